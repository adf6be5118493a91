//! The payroll calculation engine.
//!
//! Pure pay derivation: given compensation inputs, derive gross pay,
//! the statutory deduction and net pay, rejecting negative inputs.
//! Persistence is the payroll service's concern; nothing here touches
//! storage.

mod breakdown;

pub use breakdown::{
    breakdown_from_gross, breakdown_itemized, CompensationInput, PayBreakdown,
    DEDUCTION_RATE, DEFAULT_GROSS_PAY,
};
