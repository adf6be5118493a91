//! Employee model and related types.

use serde::{Deserialize, Serialize};

/// The role an employee holds in the organization.
///
/// The role steers authorization decisions in the presentation layer;
/// the services themselves trust their caller and do not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A regular employee.
    Employee,
    /// An administrator who may manage other employee records.
    Admin,
}

/// An employee identity record as stored by the directory.
///
/// `id` is assigned by the directory on creation and immutable
/// thereafter; `username` is globally unique and serves as the login
/// key. The password is stored and compared verbatim, a contract
/// preserved from the system this replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Directory-assigned identifier.
    pub id: i64,
    /// Globally unique login name.
    pub username: String,
    /// Login password, compared byte-for-byte.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// National ID or passport number.
    pub ic_passport: String,
    /// The employee's role.
    pub role: Role,
}

/// Input for registering a new employee; the directory assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Requested login name; registration is declined if taken.
    pub username: String,
    /// Login password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// National ID or passport number.
    pub ic_passport: String,
    /// The role to create the employee with.
    pub role: Role,
}

impl NewEmployee {
    /// Builds the stored record for this registration under the given id.
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            username: self.username,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            ic_passport: self.ic_passport,
            role: self.role,
        }
    }
}
