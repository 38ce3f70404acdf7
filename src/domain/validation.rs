use crate::models::{AvailabilitySlot, SlotInput};
use chrono::NaiveTime;
use std::collections::HashMap;
use thiserror::Error;

/// Validation failures for a proposed slot batch. Every variant is fatal to
/// the request; the HTTP layer maps them to 400 responses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotError {
    #[error("Invalid time range: {from} .. {to} (time_from must be < time_to)")]
    InvalidRange { from: NaiveTime, to: NaiveTime },

    #[error("Overlapping with existing slot: day={day} new={new_from}-{new_to} existing(id={existing_id})={existing_from}-{existing_to}")]
    OverlapsExisting {
        day: i64,
        new_from: NaiveTime,
        new_to: NaiveTime,
        existing_id: String,
        existing_from: NaiveTime,
        existing_to: NaiveTime,
    },

    #[error("Overlapping slots in request payload: day={day} {first_from}-{first_to} vs {second_from}-{second_to}")]
    OverlapsInBatch {
        day: i64,
        first_from: NaiveTime,
        first_to: NaiveTime,
        second_from: NaiveTime,
        second_to: NaiveTime,
    },
}

/// Returns true iff `[a_from, a_to)` overlaps `[b_from, b_to)`.
///
/// Half-open semantics: slots that merely touch at a boundary
/// (e.g. 09:00-12:00 and 12:00-14:00) do not overlap, so back-to-back
/// scheduling is allowed. This is the single overlap test used by every
/// conflict check.
pub fn overlaps(a_from: NaiveTime, a_to: NaiveTime, b_from: NaiveTime, b_to: NaiveTime) -> bool {
    a_from < b_to && a_to > b_from
}

/// Per-slot sanity check: `time_from < time_to` strictly. Fails on the first
/// offending slot in input order. An empty batch is trivially valid.
pub fn validate_structure(slots: &[SlotInput]) -> Result<(), SlotError> {
    for slot in slots {
        if slot.time_from >= slot.time_to {
            return Err(SlotError::InvalidRange {
                from: slot.time_from,
                to: slot.time_to,
            });
        }
    }
    Ok(())
}

/// The distinct weekdays touched by a batch, used to bound the persistence
/// read to relevant rows only.
pub fn days_touched(slots: &[SlotInput]) -> Vec<i64> {
    let mut days: Vec<i64> = slots.iter().map(|s| s.day_of_week).collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Conflict policy for a structurally valid batch, fail-fast on the first
/// conflict found:
///
/// 1. incoming vs existing, proposed slots in input order against existing
///    slots in loader order, partitioned by weekday;
/// 2. incoming vs incoming, each slot against previously seen batch slots on
///    the same weekday.
///
/// A conflict against committed state is the more actionable error, so it is
/// reported before batch-internal conflicts.
pub fn check_conflicts(proposed: &[SlotInput], existing: &[AvailabilitySlot]) -> Result<(), SlotError> {
    let mut existing_by_day: HashMap<i64, Vec<&AvailabilitySlot>> = HashMap::new();
    for slot in existing {
        existing_by_day.entry(slot.day_of_week).or_default().push(slot);
    }

    for slot in proposed {
        if let Some(stored) = existing_by_day.get(&slot.day_of_week) {
            for other in stored {
                if overlaps(slot.time_from, slot.time_to, other.time_from, other.time_to) {
                    return Err(SlotError::OverlapsExisting {
                        day: slot.day_of_week,
                        new_from: slot.time_from,
                        new_to: slot.time_to,
                        existing_id: other.id.clone(),
                        existing_from: other.time_from,
                        existing_to: other.time_to,
                    });
                }
            }
        }
    }

    let mut seen_by_day: HashMap<i64, Vec<&SlotInput>> = HashMap::new();
    for slot in proposed {
        if let Some(previous) = seen_by_day.get(&slot.day_of_week) {
            for prev in previous {
                if overlaps(slot.time_from, slot.time_to, prev.time_from, prev.time_to) {
                    return Err(SlotError::OverlapsInBatch {
                        day: slot.day_of_week,
                        first_from: prev.time_from,
                        first_to: prev.time_to,
                        second_from: slot.time_from,
                        second_to: slot.time_to,
                    });
                }
            }
        }
        seen_by_day.entry(slot.day_of_week).or_default().push(slot);
    }

    Ok(())
}
