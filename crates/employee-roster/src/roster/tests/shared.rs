use std::thread;

use super::common::*;
use crate::roster::domain::{Employee, PositionId};
use crate::roster::{RosterError, SharedRoster};

#[test]
fn clones_share_one_roster() {
    let shared = shared_with_john();
    let other = shared.clone();

    other.add_employee(jane()).expect("jane is valid");

    assert_eq!(shared.employees().expect("lock available").len(), 2);
    assert_eq!(shared.calculate_total_salary(), Ok(110000.0));
}

#[test]
fn concurrent_intake_admits_each_id_once() {
    let shared = SharedRoster::new(staffed_positions());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let shared = shared.clone();
            thread::spawn(move || {
                let employee = Employee::new(
                    "contested",
                    format!("Worker {worker}"),
                    &junior_id(),
                    35000.0 + f64::from(worker),
                );
                shared.add_employee(employee).is_ok()
            })
        })
        .collect();

    let admitted = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker finished"))
        .filter(|admitted| *admitted)
        .count();

    assert_eq!(admitted, 1);
    assert_eq!(shared.employees().expect("lock available").len(), 1);
}

#[test]
fn concurrent_salary_updates_keep_band_invariant() {
    let shared = shared_with_john();
    let john_id = john().id;

    let handles: Vec<_> = [31000.0, 45000.0, 65000.0, 80000.0]
        .into_iter()
        .map(|salary| {
            let shared = shared.clone();
            let id = john_id.clone();
            thread::spawn(move || shared.update_employee_salary(&id, salary))
        })
        .collect();

    for handle in handles {
        let _ = handle.join().expect("worker finished");
    }

    let john = shared.employee(&john_id).expect("john present");
    assert!(junior_developer().contains(john.salary));
}

#[test]
fn missing_employee_lookup_reports_not_found() {
    let shared = shared_with_john();

    assert_eq!(
        shared.employee(&jane().id),
        Err(RosterError::EmployeeNotFound { id: jane().id })
    );
}

#[test]
fn salary_check_returns_adjusted_position() {
    let shared = shared_with_john();
    let floor = junior_developer().min_salary * 0.9;

    let (valid, position) = shared
        .check_salary(&junior_id(), floor)
        .expect("position defined");

    assert!(valid);
    assert_eq!(position.min_salary, floor);
    assert_eq!(
        shared
            .position(&junior_id())
            .expect("lock available")
            .map(|position| position.min_salary),
        Some(floor)
    );
}

#[test]
fn salary_check_for_undefined_position_fails() {
    let shared = SharedRoster::default();

    let result = shared.check_salary(&PositionId::from("ghost"), 1.0);

    assert!(matches!(result, Err(RosterError::InvalidArgument(_))));
}
