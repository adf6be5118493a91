//! Gross/deduction/net derivation rules.

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The fixed statutory deduction rate applied to gross pay.
pub const DEDUCTION_RATE: f64 = 0.11;

/// Placeholder gross pay used by the default calculation convention.
pub const DEFAULT_GROSS_PAY: f64 = 1000.0;

/// The five itemized compensation components.
///
/// All components must be non-negative; validation rejects any
/// negative value rather than clamping it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Base salary for the period.
    pub base_salary: f64,
    /// Overtime hours worked.
    pub overtime_hours: f64,
    /// Pay rate per overtime hour.
    pub overtime_rate: f64,
    /// Bonus for the period.
    pub bonus: f64,
    /// Allowance for the period.
    pub allowance: f64,
}

impl CompensationInput {
    /// Rejects the first negative component, naming the field.
    pub fn validate(&self) -> PayrollResult<()> {
        let components = [
            ("base_salary", self.base_salary),
            ("overtime_hours", self.overtime_hours),
            ("overtime_rate", self.overtime_rate),
            ("bonus", self.bonus),
            ("allowance", self.allowance),
        ];
        for (field, value) in components {
            if value < 0.0 {
                return Err(PayrollError::InvalidCompensation {
                    field: field.to_string(),
                    message: format!("must be non-negative, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Derives gross pay from the components.
    pub fn gross_pay(&self) -> f64 {
        let overtime_pay = self.overtime_hours * self.overtime_rate;
        self.base_salary + overtime_pay + self.bonus + self.allowance
    }
}

/// The derived pay amounts shared by all calculation conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayBreakdown {
    /// Gross pay before deductions.
    pub gross_pay: f64,
    /// Statutory deduction, `gross_pay * DEDUCTION_RATE`.
    pub deductions: f64,
    /// Net pay, `gross_pay - deductions`.
    pub net_pay: f64,
}

/// Derives the pay breakdown from a caller-supplied gross figure.
///
/// Returns a validation failure if `gross_pay` is negative. No
/// rounding is applied; results carry full floating-point precision.
pub fn breakdown_from_gross(gross_pay: f64) -> PayrollResult<PayBreakdown> {
    if gross_pay < 0.0 {
        return Err(PayrollError::InvalidCompensation {
            field: "gross_pay".to_string(),
            message: format!("must be non-negative, got {gross_pay}"),
        });
    }
    let deductions = gross_pay * DEDUCTION_RATE;
    Ok(PayBreakdown {
        gross_pay,
        deductions,
        net_pay: gross_pay - deductions,
    })
}

/// Derives the pay breakdown from the five itemized components.
///
/// Each component is validated for non-negativity, then
/// `gross = base_salary + overtime_hours * overtime_rate + bonus +
/// allowance`. A derived negative gross is rejected as well; that
/// check cannot trip once the inputs validate but is kept for
/// completeness.
pub fn breakdown_itemized(input: &CompensationInput) -> PayrollResult<PayBreakdown> {
    input.validate()?;
    let gross_pay = input.gross_pay();
    if gross_pay < 0.0 {
        return Err(PayrollError::NegativeGrossPay { gross_pay });
    }
    let deductions = gross_pay * DEDUCTION_RATE;
    Ok(PayBreakdown {
        gross_pay,
        deductions,
        net_pay: gross_pay - deductions,
    })
}
