use std::sync::{Arc, Mutex, MutexGuard};

use super::aggregate::{InvalidArgument, Roster, RosterError};
use super::domain::{Employee, EmployeeId, PayrollTotal, Position, PositionId};

/// Thread-safe handle over one [`Roster`].
///
/// A single mutex covers the employee collection, every employee's salary and
/// position, and the position store. Each method holds the lock for the whole
/// operation, so calls from different threads apply one at a time.
#[derive(Debug, Clone, Default)]
pub struct SharedRoster {
    inner: Arc<Mutex<Roster>>,
}

impl SharedRoster {
    pub fn new(roster: Roster) -> Self {
        Self {
            inner: Arc::new(Mutex::new(roster)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Roster>, RosterError> {
        self.inner
            .lock()
            .map_err(|_| RosterError::Unavailable("roster mutex poisoned".to_string()))
    }

    pub fn define_position(&self, position: Position) -> Result<Option<Position>, RosterError> {
        self.lock()?.define_position(position)
    }

    pub fn position(&self, id: &PositionId) -> Result<Option<Position>, RosterError> {
        Ok(self.lock()?.position(id).cloned())
    }

    pub fn positions(&self) -> Result<Vec<Position>, RosterError> {
        Ok(self.lock()?.positions().cloned().collect())
    }

    pub fn add_employee(&self, employee: Employee) -> Result<Employee, RosterError> {
        let mut roster = self.lock()?;
        roster.add_employee(employee.clone())?;
        Ok(employee)
    }

    pub fn remove_employee(&self, id: &EmployeeId) -> Result<Employee, RosterError> {
        self.lock()?.remove_employee(id)
    }

    /// Snapshot of the roster in insertion order.
    pub fn employees(&self) -> Result<Vec<Employee>, RosterError> {
        Ok(self.lock()?.employees().to_vec())
    }

    pub fn employee(&self, id: &EmployeeId) -> Result<Employee, RosterError> {
        self.lock()?
            .employee(id)
            .cloned()
            .ok_or_else(|| RosterError::EmployeeNotFound { id: id.clone() })
    }

    pub fn calculate_total_salary(&self) -> Result<f64, RosterError> {
        Ok(self.lock()?.calculate_total_salary())
    }

    pub fn payroll_total(&self) -> Result<PayrollTotal, RosterError> {
        Ok(self.lock()?.payroll_total())
    }

    pub fn update_employee_salary(
        &self,
        id: &EmployeeId,
        new_salary: f64,
    ) -> Result<Employee, RosterError> {
        let mut roster = self.lock()?;
        let updated = roster.update_employee_salary(id, new_salary)?;
        Ok(updated.clone())
    }

    pub fn update_employee_position(
        &self,
        id: &EmployeeId,
        new_position: &PositionId,
    ) -> Result<Employee, RosterError> {
        let mut roster = self.lock()?;
        let updated = roster.update_employee_position(id, new_position)?;
        Ok(updated.clone())
    }

    /// Runs the range check under the lock and returns the verdict with the
    /// position as it stands afterwards.
    pub fn check_salary(
        &self,
        position: &PositionId,
        salary: f64,
    ) -> Result<(bool, Position), RosterError> {
        let mut roster = self.lock()?;
        let valid = roster.is_salary_valid_for_position(position, salary)?;
        let current = roster
            .position(position)
            .cloned()
            .ok_or_else(|| InvalidArgument::UnknownPosition(position.clone()))?;
        Ok((valid, current))
    }
}
