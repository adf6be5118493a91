//! Persistence contracts for the payroll services.
//!
//! The two traits mirror the two tables of the underlying store. They
//! are async ports so a relational backend can stand behind the same
//! contract; [`InMemoryStore`] is the bundled implementation and the
//! one the tests run against.

mod memory;

use async_trait::async_trait;

use crate::error::PayrollResult;
use crate::models::{Employee, NewEmployee, PayrollRecord};

pub use memory::InMemoryStore;

/// The employee identity store.
///
/// Uniqueness of `username` is this layer's responsibility: the check
/// and the write must be one atomic operation, because the facades do
/// not serialize concurrent registrations.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Creates an employee row, assigning its id.
    ///
    /// Returns `Ok(false)` when the username is already taken; a taken
    /// username is a declined registration, not a fault.
    async fn insert(&self, employee: NewEmployee) -> PayrollResult<bool>;

    /// Looks an employee up by username.
    async fn find_by_username(&self, username: &str) -> PayrollResult<Option<Employee>>;

    /// Updates the mutable profile fields of the row matching
    /// `employee.id`: first name, last name, ic/passport and password.
    ///
    /// Any other field the caller supplies is deliberately ignored;
    /// `username`, `id` and `role` never change. Returns `Ok(false)`
    /// when no row matched.
    async fn update(&self, employee: &Employee) -> PayrollResult<bool>;

    /// Returns all employees in storage order.
    async fn list_all(&self) -> PayrollResult<Vec<Employee>>;

    /// Deletes the employee and every payroll record referencing it.
    ///
    /// Payroll rows are removed first. If no employee row matched, the
    /// call reports `Ok(false)` and the payroll-row removal is not
    /// rolled back; this inconsistency window is an accepted part of
    /// the contract.
    async fn delete(&self, id: i64) -> PayrollResult<bool>;
}

/// The append-only payroll record store.
#[async_trait]
pub trait PayrollLedger: Send + Sync {
    /// Appends a record, assigning its id, and returns the stored row.
    ///
    /// The `employee_id` foreign reference is enforced here: inserting
    /// a record for an unknown employee is declined with `Ok(None)`.
    async fn insert(&self, record: PayrollRecord) -> PayrollResult<Option<PayrollRecord>>;

    /// Returns all records for one employee in storage order.
    async fn find_by_employee(&self, employee_id: i64) -> PayrollResult<Vec<PayrollRecord>>;

    /// Returns all records in storage order.
    async fn list_all(&self) -> PayrollResult<Vec<PayrollRecord>>;
}
