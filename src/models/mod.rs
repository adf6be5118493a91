//! Core data models for the payroll services.
//!
//! This module contains the domain records stored by the employee
//! directory and the payroll ledger.

mod employee;
mod payroll_record;

pub use employee::{Employee, NewEmployee, Role};
pub use payroll_record::PayrollRecord;
