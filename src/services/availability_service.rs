use crate::api::middleware::error::{ApiError, ApiResult};
use crate::domain::ports::{AvailabilityRepository, EmployeeRepository};
use crate::domain::validation;
use crate::models::{AvailabilitySlot, Employee, SlotInput};
use crate::services::company_client::CompanyClient;
use crate::services::rules_client::RulesClient;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Orchestrates the availability pipeline for one employee:
/// structural check -> conflict check against stored slots -> optional
/// location validation -> optional remote advisory check -> atomic insert.
///
/// Validation runs against a snapshot of stored slots; two concurrent
/// requests for the same employee are only as isolated as the underlying
/// store's transactions. No per-employee serialization point is taken here.
#[derive(Clone)]
pub struct AvailabilityService {
    slots: Arc<dyn AvailabilityRepository>,
    employees: Arc<dyn EmployeeRepository>,
    company: CompanyClient,
    rules: RulesClient,
}

impl AvailabilityService {
    pub fn new(
        slots: Arc<dyn AvailabilityRepository>,
        employees: Arc<dyn EmployeeRepository>,
        company: CompanyClient,
        rules: RulesClient,
    ) -> Self {
        Self {
            slots,
            employees,
            company,
            rules,
        }
    }

    async fn require_employee(&self, employee_id: &str) -> ApiResult<Employee> {
        self.employees
            .get_employee(employee_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))
    }

    pub async fn list_slots(&self, employee_id: &str) -> ApiResult<Vec<AvailabilitySlot>> {
        self.require_employee(employee_id).await?;
        self.slots.list_slots(employee_id).await
    }

    /// Validate and persist a batch of proposed slots.
    pub async fn add_slots(
        &self,
        employee_id: &str,
        batch: Vec<SlotInput>,
    ) -> ApiResult<Vec<AvailabilitySlot>> {
        let employee = self.require_employee(employee_id).await?;

        // Empty batch: trivial success, nothing to read or write.
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        // Structural check must fail before any slot read happens.
        validation::validate_structure(&batch)?;

        let days = validation::days_touched(&batch);
        let existing = self.slots.load_for_days(employee_id, &days).await?;
        validation::check_conflicts(&batch, &existing)?;

        if self.company.enabled() {
            let location_ids: BTreeSet<i64> =
                batch.iter().filter_map(|slot| slot.location_id).collect();
            for location_id in location_ids {
                if !self.company.validate_location(Some(location_id)).await? {
                    return Err(ApiError::BadRequest(format!(
                        "location_id {} not found",
                        location_id
                    )));
                }
            }
        }

        if self.rules.enabled() {
            let business_hours = match employee.company_id {
                Some(company_id) if self.company.enabled() => {
                    let hours = self.company.get_business_hours(company_id).await?;
                    if hours.is_empty() {
                        None
                    } else {
                        Some(hours)
                    }
                }
                _ => None,
            };

            let verdict = self.rules.availability_check(&batch, business_hours).await;
            if !verdict.ok {
                return Err(ApiError::BadRequest(format!(
                    "availability validation failed: overlaps={}, outOfBounds={}",
                    verdict.overlaps.len(),
                    verdict.out_of_bounds.len()
                )));
            }
        }

        let created = self.slots.insert_batch(employee_id, &batch).await?;

        self.rules
            .audit(
                "availability.created",
                Some(employee_id),
                serde_json::json!({ "count": created.len() }),
            )
            .await;

        Ok(created)
    }

    pub async fn delete_slot(&self, employee_id: &str, slot_id: &str) -> ApiResult<()> {
        self.require_employee(employee_id).await?;

        if !self.slots.delete_slot(employee_id, slot_id).await? {
            return Err(ApiError::NotFound("Slot not found".to_string()));
        }

        self.rules
            .audit(
                "availability.deleted",
                Some(employee_id),
                serde_json::json!({ "slot_id": slot_id }),
            )
            .await;

        Ok(())
    }
}
