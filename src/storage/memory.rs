//! In-memory implementation of the storage contracts.
//!
//! One `RwLock` guards both tables, so every operation is a scoped
//! acquisition of a shared handle with guaranteed release on every
//! exit path. Holding the write guard across the username check and
//! the insert is what makes the unique index atomic under concurrent
//! registrations.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::PayrollResult;
use crate::models::{Employee, NewEmployee, PayrollRecord};

use super::{EmployeeDirectory, PayrollLedger};

/// The two tables of the store. `BTreeMap` keyed by id keeps storage
/// order equal to insertion order.
#[derive(Default)]
struct Tables {
    employees: BTreeMap<i64, Employee>,
    payroll: BTreeMap<i64, PayrollRecord>,
    next_employee_id: i64,
    next_payroll_id: i64,
}

/// A thread-safe in-memory two-table store implementing both the
/// employee directory and the payroll ledger.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryStore {
    async fn insert(&self, employee: NewEmployee) -> PayrollResult<bool> {
        let mut tables = self.tables.write().await;
        let taken = tables
            .employees
            .values()
            .any(|e| e.username == employee.username);
        if taken {
            return Ok(false);
        }
        tables.next_employee_id += 1;
        let id = tables.next_employee_id;
        tables.employees.insert(id, employee.into_employee(id));
        Ok(true)
    }

    async fn find_by_username(&self, username: &str) -> PayrollResult<Option<Employee>> {
        let tables = self.tables.read().await;
        Ok(tables
            .employees
            .values()
            .find(|e| e.username == username)
            .cloned())
    }

    async fn update(&self, employee: &Employee) -> PayrollResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.employees.get_mut(&employee.id) {
            Some(row) => {
                // Only the profile fields; username, id and role are
                // never written even if the caller changed them.
                row.first_name = employee.first_name.clone();
                row.last_name = employee.last_name.clone();
                row.ic_passport = employee.ic_passport.clone();
                row.password = employee.password.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_all(&self) -> PayrollResult<Vec<Employee>> {
        let tables = self.tables.read().await;
        Ok(tables.employees.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> PayrollResult<bool> {
        let mut tables = self.tables.write().await;
        // Payroll rows first; they stay removed even if the employee
        // row turns out not to exist.
        tables.payroll.retain(|_, record| record.employee_id != id);
        Ok(tables.employees.remove(&id).is_some())
    }
}

#[async_trait]
impl PayrollLedger for InMemoryStore {
    async fn insert(&self, mut record: PayrollRecord) -> PayrollResult<Option<PayrollRecord>> {
        let mut tables = self.tables.write().await;
        if !tables.employees.contains_key(&record.employee_id) {
            return Ok(None);
        }
        tables.next_payroll_id += 1;
        record.id = tables.next_payroll_id;
        tables.payroll.insert(record.id, record.clone());
        Ok(Some(record))
    }

    async fn find_by_employee(&self, employee_id: i64) -> PayrollResult<Vec<PayrollRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .payroll
            .values()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> PayrollResult<Vec<PayrollRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.payroll.values().cloned().collect())
    }
}
