//! Employee service facade.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::PayrollResult;
use crate::models::{Employee, NewEmployee};
use crate::storage::EmployeeDirectory;

/// Remote-callable employee management: registration, authentication,
/// profile updates and queries over the employee directory.
#[derive(Clone)]
pub struct EmployeeService {
    directory: Arc<dyn EmployeeDirectory>,
}

impl EmployeeService {
    /// Creates the facade over a directory implementation.
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { directory }
    }

    /// Registers a new employee.
    ///
    /// The directory insert runs on its own worker task and the call
    /// blocks until the worker completes, so the operation is
    /// synchronous from the caller's point of view. A worker that
    /// panics or is cancelled maps to a declined registration rather
    /// than a hang or a stale result. Duplicate usernames are resolved
    /// by the directory's own unique index; no check happens here.
    pub async fn register(&self, employee: NewEmployee) -> PayrollResult<bool> {
        info!(username = %employee.username, "registering employee");
        let directory = Arc::clone(&self.directory);
        let worker = tokio::spawn(async move { directory.insert(employee).await });
        let registered = match worker.await {
            Ok(result) => result?,
            Err(err) => {
                warn!(error = %err, "registration worker interrupted");
                false
            }
        };
        info!(registered, "registration finished");
        Ok(registered)
    }

    /// Authenticates by username and password.
    ///
    /// Returns the employee only when the username exists and the
    /// stored password matches byte-for-byte. An unknown user and a
    /// wrong password are indistinguishable to the caller by design.
    pub async fn login(&self, username: &str, password: &str) -> PayrollResult<Option<Employee>> {
        info!(username, "login attempt");
        let found = self.directory.find_by_username(username).await?;
        let authenticated = found.filter(|e| e.password == password);
        if authenticated.is_none() {
            info!(username, "login declined");
        }
        Ok(authenticated)
    }

    /// Updates an employee's profile fields.
    ///
    /// Only first name, last name, ic/passport and password can
    /// change; the directory ignores anything else the caller supplies.
    pub async fn update_profile(&self, employee: &Employee) -> PayrollResult<bool> {
        info!(id = employee.id, "updating profile");
        self.directory.update(employee).await
    }

    /// Looks an employee up by username.
    pub async fn get_employee_by_username(
        &self,
        username: &str,
    ) -> PayrollResult<Option<Employee>> {
        self.directory.find_by_username(username).await
    }

    /// Returns all employees in storage order.
    pub async fn get_all_employees(&self) -> PayrollResult<Vec<Employee>> {
        self.directory.list_all().await
    }

    /// Deletes an employee and, by cascade, its payroll records.
    pub async fn delete_employee(&self, id: i64) -> PayrollResult<bool> {
        info!(id, "deleting employee");
        let deleted = self.directory.delete(id).await?;
        info!(id, deleted, "delete finished");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::storage::InMemoryStore;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(InMemoryStore::new()))
    }

    fn alice() -> NewEmployee {
        NewEmployee {
            username: "alice".to_string(),
            password: "pw1".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Ng".to_string(),
            ic_passport: "A1234567".to_string(),
            role: Role::Employee,
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = service();
        assert!(service.register(alice()).await.unwrap());

        let employee = service.login("alice", "pw1").await.unwrap().unwrap();
        assert_eq!(employee.username, "alice");
        assert_eq!(employee.role, Role::Employee);
        assert!(employee.id > 0);
    }

    #[tokio::test]
    async fn test_register_duplicate_username_declined() {
        let service = service();
        assert!(service.register(alice()).await.unwrap());
        assert!(!service.register(alice()).await.unwrap());

        // Exactly one row exists.
        assert_eq!(service.get_all_employees().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_absent() {
        let service = service();
        service.register(alice()).await.unwrap();

        assert!(service.login("alice", "wrong").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_absent() {
        let service = service();
        assert!(service.login("nobody", "pw1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_password_comparison_is_case_sensitive() {
        let service = service();
        service.register(alice()).await.unwrap();

        assert!(service.login("alice", "PW1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_sees_latest_profile_update() {
        let service = service();
        service.register(alice()).await.unwrap();
        let mut employee = service.login("alice", "pw1").await.unwrap().unwrap();

        employee.password = "pw2".to_string();
        employee.last_name = "Tan".to_string();
        assert!(service.update_profile(&employee).await.unwrap());

        assert!(service.login("alice", "pw1").await.unwrap().is_none());
        let refreshed = service.login("alice", "pw2").await.unwrap().unwrap();
        assert_eq!(refreshed.last_name, "Tan");
    }

    #[tokio::test]
    async fn test_update_profile_never_changes_identity_fields() {
        let service = service();
        service.register(alice()).await.unwrap();
        let stored = service.login("alice", "pw1").await.unwrap().unwrap();

        let mut tampered = stored.clone();
        tampered.username = "root".to_string();
        tampered.role = Role::Admin;
        assert!(service.update_profile(&tampered).await.unwrap());

        let after = service
            .get_employee_by_username("alice")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after.id, stored.id);
        assert_eq!(after.username, "alice");
        assert_eq!(after.role, Role::Employee);
    }

    #[tokio::test]
    async fn test_delete_employee_unknown_id_returns_false() {
        let service = service();
        assert!(!service.delete_employee(404).await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_registration_one_winner() {
        let service = service();
        let (a, b) = tokio::join!(service.register(alice()), service.register(alice()));
        let wins = [a.unwrap(), b.unwrap()].iter().filter(|&&w| w).count();
        assert_eq!(wins, 1);
    }
}
