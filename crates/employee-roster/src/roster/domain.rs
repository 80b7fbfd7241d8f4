use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for job positions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PositionId(pub String);

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PositionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier wrapper for employees, unique within a roster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Job role carrying the allowed salary band `[min_salary, max_salary]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub name: String,
    pub min_salary: f64,
    pub max_salary: f64,
}

impl Position {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        min_salary: f64,
        max_salary: f64,
    ) -> Self {
        Self {
            id: PositionId(id.into()),
            name: name.into(),
            min_salary,
            max_salary,
        }
    }

    /// Plain band membership, without any floor adjustment.
    pub fn contains(&self, salary: f64) -> bool {
        salary >= self.min_salary && salary <= self.max_salary
    }

    pub(crate) fn has_valid_band(&self) -> bool {
        self.min_salary >= 0.0 && self.max_salary >= 0.0 && self.min_salary <= self.max_salary
    }
}

/// Person record tracked by the roster. `position` is `None` when the caller
/// never assigned one; the roster rejects such records on intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub position: Option<PositionId>,
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: &PositionId,
        salary: f64,
    ) -> Self {
        Self {
            id: EmployeeId(id.into()),
            name: name.into(),
            position: Some(position.clone()),
            salary,
        }
    }

    pub fn unassigned(id: impl Into<String>, name: impl Into<String>, salary: f64) -> Self {
        Self {
            id: EmployeeId(id.into()),
            name: name.into(),
            position: None,
            salary,
        }
    }
}

/// Headcount and salary total in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayrollTotal {
    pub headcount: usize,
    pub total_salary: f64,
}
