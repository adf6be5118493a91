//! The remote-callable service facades.
//!
//! Each facade composes a storage contract with request validation and
//! the calculation engine. Authorization is not enforced here: the
//! caller's declared role is trusted, and any role-based gating lives
//! in the presentation layer. That trust boundary is deliberate and
//! carried over from the system this replaces.

mod employee;
mod payroll;

pub use employee::EmployeeService;
pub use payroll::PayrollService;
