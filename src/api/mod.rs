//! HTTP API for the payroll services.
//!
//! The router is the remote-callable surface of the two facades. The
//! hosting process owns the listener, TLS and endpoint publication;
//! this module only builds the router.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculatePayrollRequest, LoginRequest, RegisterRequest, UpdateProfileRequest};
pub use response::ApiError;
pub use state::AppState;
