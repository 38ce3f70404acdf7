use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// Read models for sibling services. Field names follow the remote wire
// formats (camelCase on the Company service side).

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyRef {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationRef {
    pub id: i64,
    pub street: Option<String>,
    pub number: Option<String>,
    #[serde(rename = "parentLocationId")]
    pub parent_location_id: Option<i64>,
}

/// Canonical business-hours entry sent to the rules check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessHoursDay {
    #[serde(rename = "dayNumber")]
    pub day_number: i64,
    #[serde(rename = "fromTime")]
    pub from_time: String,
    #[serde(rename = "toTime")]
    pub to_time: String,
}

/// Business-hours entry as returned by the Company service. Two legacy key
/// conventions exist in the wild (`fromTime`/`toTime` and
/// `timeFrom`/`timeTo`); both are accepted here and collapsed by
/// [`RawBusinessHoursDay::normalize`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawBusinessHoursDay {
    #[serde(rename = "dayNumber")]
    pub day_number: i64,
    #[serde(rename = "fromTime")]
    pub from_time: Option<String>,
    #[serde(rename = "toTime")]
    pub to_time: Option<String>,
    #[serde(rename = "timeFrom")]
    pub time_from: Option<String>,
    #[serde(rename = "timeTo")]
    pub time_to: Option<String>,
}

impl RawBusinessHoursDay {
    /// Collapse the two key conventions into the canonical pair.
    /// Precedence: `fromTime`/`toTime` wins, `timeFrom`/`timeTo` is the
    /// fallback. Entries missing a bound under both conventions are dropped.
    pub fn normalize(self) -> Option<BusinessHoursDay> {
        let from_time = self.from_time.or(self.time_from)?;
        let to_time = self.to_time.or(self.time_to)?;
        Some(BusinessHoursDay {
            day_number: self.day_number,
            from_time,
            to_time,
        })
    }
}

/// Reservation DTO proxied from the Reservation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub time_from: NaiveTime,
    pub time_to: NaiveTime,
}
