//! Employee roster: positions with salary bands, the validating aggregate, a
//! lock-guarded handle for shared use, and the HTTP surface over it.

pub mod aggregate;
pub mod domain;
pub mod router;
pub mod shared;

#[cfg(test)]
mod tests;

pub use aggregate::{
    salary_within_band, DuplicateReason, InvalidArgument, MinimumFloorPolicy, Roster, RosterError,
};
pub use domain::{Employee, EmployeeId, PayrollTotal, Position, PositionId};
pub use router::{
    roster_router, PositionDefinitionRequest, PositionUpdateRequest, SalaryCheckRequest,
    SalaryCheckResponse, SalaryUpdateRequest,
};
pub use shared::SharedRoster;
