//! Request types for the payroll services API.

use serde::{Deserialize, Serialize};

use crate::calculation::CompensationInput;
use crate::models::{Employee, NewEmployee, Role};

/// Request body for `POST /employees/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Requested login name.
    pub username: String,
    /// Login password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// National ID or passport number.
    pub ic_passport: String,
    /// The role to register with.
    pub role: Role,
}

/// Request body for `POST /employees/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Password, compared byte-for-byte against the stored one.
    pub password: String,
}

/// Request body for `PUT /employees/profile`.
///
/// `username` and `role` are carried for wire compatibility with the
/// full employee shape but are ignored by the update; only the profile
/// fields and password can change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// The employee to update.
    pub id: i64,
    /// Ignored by the update.
    pub username: String,
    /// New password.
    pub password: String,
    /// New given name.
    pub first_name: String,
    /// New family name.
    pub last_name: String,
    /// New national ID or passport number.
    pub ic_passport: String,
    /// Ignored by the update.
    pub role: Role,
}

/// Request body for `POST /payroll/calculate`.
///
/// One of the three calculation conventions, distinguished by shape:
/// the itemized breakdown, a flat gross figure, or neither (the
/// default placeholder convention). Unknown fields are rejected in
/// every variant; without that, a misspelled field would fall through
/// to the default convention and persist a placeholder record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum CalculatePayrollRequest {
    /// Itemized convention with the five compensation components.
    Itemized {
        /// The employee to calculate for.
        employee_id: i64,
        /// The payroll period token.
        period: String,
        /// Base salary for the period.
        base_salary: f64,
        /// Overtime hours worked.
        overtime_hours: f64,
        /// Pay rate per overtime hour.
        overtime_rate: f64,
        /// Bonus for the period.
        bonus: f64,
        /// Allowance for the period.
        allowance: f64,
    },
    /// Flat convention with a caller-supplied gross figure.
    Flat {
        /// The employee to calculate for.
        employee_id: i64,
        /// The payroll period token.
        period: String,
        /// Gross pay for the period.
        gross_pay: f64,
    },
    /// Default convention: fixed placeholder gross pay.
    Default {
        /// The employee to calculate for.
        employee_id: i64,
        /// The payroll period token.
        period: String,
    },
}

impl From<RegisterRequest> for NewEmployee {
    fn from(req: RegisterRequest) -> Self {
        NewEmployee {
            username: req.username,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            ic_passport: req.ic_passport,
            role: req.role,
        }
    }
}

impl From<UpdateProfileRequest> for Employee {
    fn from(req: UpdateProfileRequest) -> Self {
        Employee {
            id: req.id,
            username: req.username,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            ic_passport: req.ic_passport,
            role: req.role,
        }
    }
}

impl CalculatePayrollRequest {
    /// The employee the request targets.
    pub fn employee_id(&self) -> i64 {
        match self {
            Self::Itemized { employee_id, .. }
            | Self::Flat { employee_id, .. }
            | Self::Default { employee_id, .. } => *employee_id,
        }
    }

    /// The period token the request targets.
    pub fn period(&self) -> &str {
        match self {
            Self::Itemized { period, .. }
            | Self::Flat { period, .. }
            | Self::Default { period, .. } => period,
        }
    }

    /// The itemized components, when this is the itemized convention.
    pub fn compensation(&self) -> Option<CompensationInput> {
        match self {
            Self::Itemized {
                base_salary,
                overtime_hours,
                overtime_rate,
                bonus,
                allowance,
                ..
            } => Some(CompensationInput {
                base_salary: *base_salary,
                overtime_hours: *overtime_hours,
                overtime_rate: *overtime_rate,
                bonus: *bonus,
                allowance: *allowance,
            }),
            _ => None,
        }
    }
}
