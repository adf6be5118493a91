//! Remote payroll services for a small organization.
//!
//! This crate implements the service pair behind the payroll system:
//! an employee directory (registration, authentication, profile
//! management) and a payroll engine (pay computation and history
//! queries). The remotely callable surface is an HTTP API; binding it
//! to a listener is the hosting process's job, so the crate is a
//! library only.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
