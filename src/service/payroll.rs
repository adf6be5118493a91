//! Payroll service facade.

use std::sync::Arc;

use tracing::{info, warn};

use crate::calculation::{
    breakdown_from_gross, breakdown_itemized, CompensationInput, PayBreakdown, DEFAULT_GROSS_PAY,
};
use crate::error::PayrollResult;
use crate::models::PayrollRecord;
use crate::storage::PayrollLedger;

/// Remote-callable payroll operations: the three calculation
/// conventions plus ledger queries.
#[derive(Clone)]
pub struct PayrollService {
    ledger: Arc<dyn PayrollLedger>,
}

impl PayrollService {
    /// Creates the facade over a ledger implementation.
    pub fn new(ledger: Arc<dyn PayrollLedger>) -> Self {
        Self { ledger }
    }

    /// Default convention: a fixed placeholder gross pay of 1000.0.
    pub async fn calculate_default(
        &self,
        employee_id: i64,
        period: &str,
    ) -> PayrollResult<PayrollRecord> {
        self.calculate_flat(employee_id, period, DEFAULT_GROSS_PAY).await
    }

    /// Flat convention: the caller supplies gross pay directly.
    ///
    /// Fails with a validation error if `gross_pay` is negative; no
    /// ledger row is written in that case.
    pub async fn calculate_flat(
        &self,
        employee_id: i64,
        period: &str,
        gross_pay: f64,
    ) -> PayrollResult<PayrollRecord> {
        let breakdown = breakdown_from_gross(gross_pay)?;
        let record = Self::build_record(
            employee_id,
            period,
            CompensationInput {
                base_salary: 0.0,
                overtime_hours: 0.0,
                overtime_rate: 0.0,
                bonus: 0.0,
                allowance: 0.0,
            },
            breakdown,
        );
        self.persist(record).await
    }

    /// Itemized convention: the five compensation components.
    ///
    /// Fails with a validation error naming the first negative
    /// component; no ledger row is written in that case.
    pub async fn calculate_itemized(
        &self,
        employee_id: i64,
        period: &str,
        input: CompensationInput,
    ) -> PayrollResult<PayrollRecord> {
        let breakdown = breakdown_itemized(&input)?;
        let record = Self::build_record(employee_id, period, input, breakdown);
        self.persist(record).await
    }

    /// Returns all payroll records for one employee in storage order.
    pub async fn records_for_employee(
        &self,
        employee_id: i64,
    ) -> PayrollResult<Vec<PayrollRecord>> {
        self.ledger.find_by_employee(employee_id).await
    }

    /// Returns every payroll record in storage order.
    pub async fn all_records(&self) -> PayrollResult<Vec<PayrollRecord>> {
        self.ledger.list_all().await
    }

    fn build_record(
        employee_id: i64,
        period: &str,
        input: CompensationInput,
        breakdown: PayBreakdown,
    ) -> PayrollRecord {
        PayrollRecord {
            id: 0,
            employee_id,
            period: period.to_string(),
            base_salary: input.base_salary,
            overtime_hours: input.overtime_hours,
            overtime_rate: input.overtime_rate,
            bonus: input.bonus,
            allowance: input.allowance,
            gross_pay: breakdown.gross_pay,
            deductions: breakdown.deductions,
            net_pay: breakdown.net_pay,
        }
    }

    /// Appends the record to the ledger and returns the stored row.
    ///
    /// A declined insert (unknown employee reference) is logged and
    /// the unpersisted record is returned as computed; the caller
    /// still sees the result of the calculation.
    async fn persist(&self, record: PayrollRecord) -> PayrollResult<PayrollRecord> {
        info!(
            employee_id = record.employee_id,
            period = %record.period,
            gross_pay = record.gross_pay,
            "payroll calculated"
        );
        match self.ledger.insert(record.clone()).await? {
            Some(stored) => Ok(stored),
            None => {
                warn!(
                    employee_id = record.employee_id,
                    "ledger declined insert; returning unpersisted record"
                );
                Ok(record)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use crate::models::{NewEmployee, Role};
    use crate::storage::{EmployeeDirectory, InMemoryStore};

    async fn store_with_employee(username: &str) -> (Arc<InMemoryStore>, i64) {
        let store = Arc::new(InMemoryStore::new());
        EmployeeDirectory::insert(
            store.as_ref(),
            NewEmployee {
                username: username.to_string(),
                password: "pw".to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                ic_passport: "X0000000".to_string(),
                role: Role::Employee,
            },
        )
        .await
        .unwrap();
        let id = store
            .find_by_username(username)
            .await
            .unwrap()
            .unwrap()
            .id;
        (store, id)
    }

    #[tokio::test]
    async fn test_default_convention_uses_placeholder_gross() {
        let (store, id) = store_with_employee("alice").await;
        let service = PayrollService::new(store);

        let record = service.calculate_default(id, "2025-01").await.unwrap();
        assert_eq!(record.gross_pay, 1000.0);
        assert_eq!(record.deductions, 110.0);
        assert_eq!(record.net_pay, 890.0);
        assert_eq!(record.base_salary, 0.0);
        assert!(record.id > 0);
    }

    #[tokio::test]
    async fn test_itemized_convention_full_breakdown() {
        let (store, id) = store_with_employee("alice").await;
        let service = PayrollService::new(store);

        let record = service
            .calculate_itemized(
                id,
                "2025-01",
                CompensationInput {
                    base_salary: 2000.0,
                    overtime_hours: 10.0,
                    overtime_rate: 5.0,
                    bonus: 100.0,
                    allowance: 50.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(record.gross_pay, 2200.0);
        assert_eq!(record.deductions, 242.0);
        assert_eq!(record.net_pay, 1958.0);
        assert_eq!(record.overtime_hours, 10.0);
        assert_eq!(record.period, "2025-01");
    }

    #[tokio::test]
    async fn test_negative_flat_gross_writes_no_row() {
        let (store, id) = store_with_employee("alice").await;
        let service = PayrollService::new(store);

        let result = service.calculate_flat(id, "2025-01", -50.0).await;
        assert!(matches!(
            result.unwrap_err(),
            PayrollError::InvalidCompensation { .. }
        ));
        assert!(service.records_for_employee(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_itemized_input_writes_no_row() {
        let (store, id) = store_with_employee("alice").await;
        let service = PayrollService::new(store);

        let result = service
            .calculate_itemized(
                id,
                "2025-01",
                CompensationInput {
                    base_salary: -1.0,
                    overtime_hours: 0.0,
                    overtime_rate: 0.0,
                    bonus: 0.0,
                    allowance: 0.0,
                },
            )
            .await;
        assert!(matches!(
            result.unwrap_err(),
            PayrollError::InvalidCompensation { field, .. } if field == "base_salary"
        ));
        assert!(service.all_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_employee_returns_unpersisted_record() {
        let store = Arc::new(InMemoryStore::new());
        let service = PayrollService::new(store);

        let record = service.calculate_default(42, "2025-01").await.unwrap();
        // Computed but not stored: id stays 0 and no row exists.
        assert_eq!(record.id, 0);
        assert_eq!(record.net_pay, 890.0);
        assert!(service.all_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_queries_return_storage_order() {
        let (store, id) = store_with_employee("alice").await;
        let service = PayrollService::new(store);

        service.calculate_default(id, "2025-01").await.unwrap();
        service.calculate_flat(id, "2025-02", 500.0).await.unwrap();

        let records = service.records_for_employee(id).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].period, "2025-01");
        assert_eq!(records[1].period, "2025-02");
        assert!(records[0].id < records[1].id);
    }
}
