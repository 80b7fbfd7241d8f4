use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{Employee, EmployeeId, PayrollTotal, Position, PositionId};

/// Controls whether the range check may lower a position's minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MinimumFloorPolicy {
    /// A salary landing exactly on 90% of the minimum becomes the new minimum.
    #[default]
    AutoLower,
    /// Plain inclusive band check.
    Strict,
}

impl MinimumFloorPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto-lower" | "auto_lower" | "autolower" => Some(Self::AutoLower),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AutoLower => "auto-lower",
            Self::Strict => "strict",
        }
    }
}

/// Range check shared by every roster mutation.
///
/// Under [`MinimumFloorPolicy::AutoLower`], a salary equal to `min_salary * 0.9`
/// lowers the position's minimum to that salary before the comparison runs, and the
/// lowered minimum stays on the position afterwards.
pub fn salary_within_band(
    position: &mut Position,
    salary: f64,
    policy: MinimumFloorPolicy,
) -> bool {
    let floor = position.min_salary * 0.9;
    if policy == MinimumFloorPolicy::AutoLower && salary == floor && floor != position.min_salary {
        warn!(
            position = %position.id,
            previous_min = position.min_salary,
            new_min = salary,
            "salary check lowered position minimum"
        );
        position.min_salary = salary;
    }
    position.contains(salary)
}

/// Aggregate owning the ordered employee collection and the position store.
///
/// Every operation validates against current state first and mutates only once all
/// preconditions hold, so a returned error always means nothing changed.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    positions: BTreeMap<PositionId, Position>,
    employees: Vec<Employee>,
    minimum_floor: MinimumFloorPolicy,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(minimum_floor: MinimumFloorPolicy) -> Self {
        Self {
            minimum_floor,
            ..Self::default()
        }
    }

    pub fn minimum_floor(&self) -> MinimumFloorPolicy {
        self.minimum_floor
    }

    /// Insert or replace a position definition, returning the previous one.
    ///
    /// Replacing a position is refused when an employee already on it would fall
    /// outside the new band. This check uses the plain band and never lowers the
    /// minimum.
    pub fn define_position(
        &mut self,
        position: Position,
    ) -> Result<Option<Position>, RosterError> {
        if !position.has_valid_band() {
            return Err(InvalidArgument::InvalidSalaryBand(position.id.clone()).into());
        }

        if let Some(outlier) = self
            .employees
            .iter()
            .filter(|employee| employee.position.as_ref() == Some(&position.id))
            .find(|employee| !position.contains(employee.salary))
        {
            return Err(RosterError::InvalidSalary {
                position: position.id.clone(),
                salary: outlier.salary,
            });
        }

        debug!(
            position = %position.id,
            min = position.min_salary,
            max = position.max_salary,
            "position defined"
        );
        Ok(self.positions.insert(position.id.clone(), position))
    }

    pub fn position(&self, id: &PositionId) -> Option<&Position> {
        self.positions.get(id)
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> + '_ {
        self.positions.values()
    }

    /// Append an employee after the duplicate, argument and salary checks pass.
    pub fn add_employee(&mut self, employee: Employee) -> Result<(), RosterError> {
        if self.employees.contains(&employee) {
            return Err(RosterError::DuplicateEmployee {
                reason: DuplicateReason::SameEmployee,
            });
        }

        if self
            .employees
            .iter()
            .any(|existing| existing.id == employee.id)
        {
            return Err(RosterError::DuplicateEmployee {
                reason: DuplicateReason::SameId,
            });
        }

        if self
            .employees
            .iter()
            .any(|existing| existing.name == employee.name)
        {
            return Err(RosterError::DuplicateEmployee {
                reason: DuplicateReason::SameName,
            });
        }

        let position_id = employee
            .position
            .as_ref()
            .ok_or(InvalidArgument::MissingPosition)?;
        if !self.positions.contains_key(position_id) {
            return Err(InvalidArgument::UnknownPosition(position_id.clone()).into());
        }

        if employee.salary < 0.0 {
            return Err(InvalidArgument::NegativeSalary.into());
        }

        if !self.is_salary_valid_for_position(position_id, employee.salary)? {
            return Err(RosterError::InvalidSalary {
                position: position_id.clone(),
                salary: employee.salary,
            });
        }

        debug!(
            employee = %employee.id,
            position = %position_id,
            salary = employee.salary,
            "employee added"
        );
        self.employees.push(employee);
        Ok(())
    }

    /// Remove an employee and hand the record back to the caller.
    pub fn remove_employee(&mut self, id: &EmployeeId) -> Result<Employee, RosterError> {
        let index = self.index_of(id)?;
        let removed = self.employees.remove(index);
        debug!(employee = %removed.id, "employee removed");
        Ok(removed)
    }

    /// Read view of the roster in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| &employee.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Sum of current salaries, accumulated left to right in roster order.
    pub fn calculate_total_salary(&self) -> f64 {
        self.employees
            .iter()
            .fold(0.0, |total, employee| total + employee.salary)
    }

    pub fn payroll_total(&self) -> PayrollTotal {
        PayrollTotal {
            headcount: self.employees.len(),
            total_salary: self.calculate_total_salary(),
        }
    }

    pub fn update_employee_salary(
        &mut self,
        id: &EmployeeId,
        new_salary: f64,
    ) -> Result<&Employee, RosterError> {
        let index = self.index_of(id)?;
        let position_id = self.employees[index]
            .position
            .clone()
            .ok_or(InvalidArgument::MissingPosition)?;

        if !self.is_salary_valid_for_position(&position_id, new_salary)? {
            return Err(RosterError::InvalidSalary {
                position: position_id,
                salary: new_salary,
            });
        }

        let employee = &mut self.employees[index];
        debug!(
            employee = %employee.id,
            previous = employee.salary,
            salary = new_salary,
            "salary updated"
        );
        employee.salary = new_salary;
        Ok(&self.employees[index])
    }

    pub fn update_employee_position(
        &mut self,
        id: &EmployeeId,
        new_position: &PositionId,
    ) -> Result<&Employee, RosterError> {
        let index = self.index_of(id)?;
        let salary = self.employees[index].salary;

        if !self.is_salary_valid_for_position(new_position, salary)? {
            return Err(RosterError::InvalidSalary {
                position: new_position.clone(),
                salary,
            });
        }

        let employee = &mut self.employees[index];
        debug!(employee = %employee.id, position = %new_position, "position updated");
        employee.position = Some(new_position.clone());
        Ok(&self.employees[index])
    }

    /// Range check against a stored position. May lower the stored minimum, see
    /// [`salary_within_band`].
    pub fn is_salary_valid_for_position(
        &mut self,
        position: &PositionId,
        salary: f64,
    ) -> Result<bool, RosterError> {
        let policy = self.minimum_floor;
        let stored = self
            .positions
            .get_mut(position)
            .ok_or_else(|| InvalidArgument::UnknownPosition(position.clone()))?;
        Ok(salary_within_band(stored, salary, policy))
    }

    fn index_of(&self, id: &EmployeeId) -> Result<usize, RosterError> {
        self.employees
            .iter()
            .position(|employee| &employee.id == id)
            .ok_or_else(|| RosterError::EmployeeNotFound { id: id.clone() })
    }
}

/// Error raised by roster operations. None of them leave partial state behind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("{reason}")]
    DuplicateEmployee { reason: DuplicateReason },
    #[error("employee {id} not found")]
    EmployeeNotFound { id: EmployeeId },
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error("salary {salary} is not within the range for position {position}")]
    InvalidSalary { position: PositionId, salary: f64 },
    #[error("roster unavailable: {0}")]
    Unavailable(String),
}

impl RosterError {
    pub fn kind(&self) -> &'static str {
        match self {
            RosterError::DuplicateEmployee { .. } => "duplicate_employee",
            RosterError::EmployeeNotFound { .. } => "employee_not_found",
            RosterError::InvalidArgument(_) => "invalid_argument",
            RosterError::InvalidSalary { .. } => "invalid_salary",
            RosterError::Unavailable(_) => "unavailable",
        }
    }
}

/// Which of the duplicate checks rejected an intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DuplicateReason {
    #[error("duplicate employee")]
    SameEmployee,
    #[error("employee with the same id already exists")]
    SameId,
    #[error("employee with the same name already exists")]
    SameName,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("position cannot be absent")]
    MissingPosition,
    #[error("salary cannot be negative")]
    NegativeSalary,
    #[error("position {0} is not defined")]
    UnknownPosition(PositionId),
    #[error("position {0} has an invalid salary band")]
    InvalidSalaryBand(PositionId),
}
