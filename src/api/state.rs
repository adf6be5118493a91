//! Shared application state for the API.

use std::sync::Arc;

use crate::service::{EmployeeService, PayrollService};
use crate::storage::InMemoryStore;

/// Shared application state holding the two service facades.
#[derive(Clone)]
pub struct AppState {
    employees: Arc<EmployeeService>,
    payroll: Arc<PayrollService>,
}

impl AppState {
    /// Creates the state from pre-built facades.
    pub fn new(employees: EmployeeService, payroll: PayrollService) -> Self {
        Self {
            employees: Arc::new(employees),
            payroll: Arc::new(payroll),
        }
    }

    /// Creates the state over a fresh in-memory store shared by both
    /// facades, so employee deletion cascades into the ledger.
    pub fn with_in_memory_store() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(
            EmployeeService::new(store.clone()),
            PayrollService::new(store),
        )
    }

    /// Returns the employee service facade.
    pub fn employees(&self) -> &EmployeeService {
        &self.employees
    }

    /// Returns the payroll service facade.
    pub fn payroll(&self) -> &PayrollService {
        &self.payroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
