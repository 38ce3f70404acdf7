use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A stored weekly availability window. Times are time-of-day only; the slot
/// recurs on `day_of_week`. `day_of_week` is an opaque partition key shared
/// with the sibling services and is deliberately not bounds-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: String,
    pub employee_id: String,
    pub day_of_week: i64,
    pub time_from: NaiveTime,
    pub time_to: NaiveTime,
    pub location_id: Option<i64>,
}

/// A proposed, not-yet-persisted slot as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotInput {
    pub day_of_week: i64,
    pub time_from: NaiveTime,
    pub time_to: NaiveTime,
    #[serde(default)]
    pub location_id: Option<i64>,
}
