use clap::Args;
use employee_roster::error::AppError;
use employee_roster::roster::{
    Employee, EmployeeId, MinimumFloorPolicy, Position, PositionId, Roster, RosterError,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Minimum floor policy for the range check (auto-lower or strict).
    #[arg(long, value_parser = crate::infra::parse_policy)]
    pub(crate) policy: Option<MinimumFloorPolicy>,
    /// Print the final roster listing.
    #[arg(long)]
    pub(crate) list: bool,
}

/// Outcome of each demo step, kept separate from printing so it can be asserted.
#[derive(Debug)]
pub(crate) struct DemoOutcome {
    pub(crate) roster: Roster,
    pub(crate) steps: Vec<DemoStep>,
}

#[derive(Debug)]
pub(crate) struct DemoStep {
    pub(crate) action: String,
    pub(crate) result: Result<(), RosterError>,
    pub(crate) headcount: usize,
    pub(crate) total_salary: f64,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { policy, list } = args;
    let outcome = build_demo(policy.unwrap_or_default())?;

    println!("Employee roster demo");
    println!(
        "Minimum floor policy: {}",
        outcome.roster.minimum_floor().label()
    );

    println!("\nPositions");
    for position in outcome.roster.positions() {
        println!(
            "- {} ({}): {:.2} - {:.2}",
            position.name, position.id, position.min_salary, position.max_salary
        );
    }

    println!("\nSteps");
    for step in &outcome.steps {
        let verdict = match &step.result {
            Ok(()) => "ok".to_string(),
            Err(err) => format!("rejected ({}: {err})", err.kind()),
        };
        println!(
            "- {}: {} | headcount {} | total salary {:.2}",
            step.action, verdict, step.headcount, step.total_salary
        );
    }

    if list {
        println!("\nRoster");
        for employee in outcome.roster.employees() {
            let position = employee
                .position
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string());
            println!(
                "- {} | {} | position {} | salary {:.2}",
                employee.id, employee.name, position, employee.salary
            );
        }
    }

    Ok(())
}

pub(crate) fn build_demo(policy: MinimumFloorPolicy) -> Result<DemoOutcome, AppError> {
    let mut roster = Roster::with_policy(policy);
    let junior = PositionId::from("1");
    let senior = PositionId::from("2");
    roster.define_position(Position::new(
        junior.0.clone(),
        "Junior Developer",
        30000.0,
        50000.0,
    ))?;
    roster.define_position(Position::new(
        senior.0.clone(),
        "Senior Developer",
        60000.0,
        90000.0,
    ))?;

    let john = EmployeeId::from("1");
    let mut steps = Vec::new();

    let result = roster.add_employee(Employee::new("1", "John Doe", &junior, 40000.0));
    record(&mut steps, &roster, "add John Doe at 40000", result);

    let result = roster.add_employee(Employee::new("2", "Jane Smith", &senior, 70000.0));
    record(&mut steps, &roster, "add Jane Smith at 70000", result);

    let result = roster.update_employee_salary(&john, 60000.0).map(|_| ());
    record(&mut steps, &roster, "raise John Doe to 60000", result);

    let result = roster.update_employee_position(&john, &senior).map(|_| ());
    record(&mut steps, &roster, "promote John Doe to senior", result);

    let result = roster.add_employee(Employee::new("3", "John Doe", &junior, 45000.0));
    record(&mut steps, &roster, "add a second John Doe", result);

    Ok(DemoOutcome { roster, steps })
}

fn record(
    steps: &mut Vec<DemoStep>,
    roster: &Roster,
    action: &str,
    result: Result<(), RosterError>,
) {
    steps.push(DemoStep {
        action: action.to_string(),
        result,
        headcount: roster.len(),
        total_salary: roster.calculate_total_salary(),
    });
}
