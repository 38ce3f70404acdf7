use crate::api::middleware::error::ApiResult;
use crate::models::{AvailabilitySlot, SlotInput};

/// Persistence gateway for availability slots.
#[async_trait::async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// All stored slots for an employee.
    async fn list_slots(&self, employee_id: &str) -> ApiResult<Vec<AvailabilitySlot>>;

    /// Stored slots for an employee restricted to the given weekdays. The
    /// conflict check only ever needs the days a batch touches.
    async fn load_for_days(
        &self,
        employee_id: &str,
        days: &[i64],
    ) -> ApiResult<Vec<AvailabilitySlot>>;

    /// Persist a batch atomically (all slots or none) and return the created
    /// rows with their assigned ids.
    async fn insert_batch(
        &self,
        employee_id: &str,
        slots: &[SlotInput],
    ) -> ApiResult<Vec<AvailabilitySlot>>;

    /// Delete one slot owned by the employee. Returns false if no such slot.
    async fn delete_slot(&self, employee_id: &str, slot_id: &str) -> ApiResult<bool>;
}
