//! Payroll record model.

use serde::{Deserialize, Serialize};

/// One computed payroll result for one employee for one period.
///
/// Constructed only by the payroll service's calculate operations and
/// immutable once inserted into the ledger. The period token is
/// caller-supplied and not validated for format or uniqueness; several
/// records per employee per period are allowed.
///
/// Monetary fields carry full floating-point precision with no
/// rounding; formatting to two decimals is the presentation layer's
/// concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Ledger-assigned identifier; `0` until the record is inserted.
    pub id: i64,
    /// The employee this record belongs to.
    pub employee_id: i64,
    /// Caller-supplied period token, e.g. `"2025-01"`.
    pub period: String,
    /// Base salary component; zero under the flat and default conventions.
    pub base_salary: f64,
    /// Overtime hours worked; zero under the flat and default conventions.
    pub overtime_hours: f64,
    /// Pay rate per overtime hour; zero under the flat and default conventions.
    pub overtime_rate: f64,
    /// Bonus component; zero under the flat and default conventions.
    pub bonus: f64,
    /// Allowance component; zero under the flat and default conventions.
    pub allowance: f64,
    /// Derived gross pay.
    pub gross_pay: f64,
    /// Derived statutory deduction, `gross_pay * 0.11`.
    pub deductions: f64,
    /// Derived net pay, `gross_pay - deductions`.
    pub net_pay: f64,
}
