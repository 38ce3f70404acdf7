use crate::models::{BusinessHoursDay, SlotInput};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Settings for the optional serverless rules helper. Built from
/// `Config::from_env` in production and constructed directly in tests; the
/// client holds no process-global state.
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub enabled: bool,
    pub base_url: String,
    pub connect_timeout: f64,
    pub read_timeout: f64,
    pub audit_enabled: bool,
    pub audit_service: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: String::new(),
            connect_timeout: 2.0,
            read_timeout: 2.0,
            audit_enabled: false,
            audit_service: "employee-service".to_string(),
        }
    }
}

/// Verdict returned by the remote availability check.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesVerdict {
    pub ok: bool,
    #[serde(default)]
    pub overlaps: Vec<serde_json::Value>,
    #[serde(default, rename = "outOfBounds")]
    pub out_of_bounds: Vec<serde_json::Value>,
}

impl RulesVerdict {
    /// The "no objection" verdict used when the helper is disabled or
    /// unreachable.
    pub fn open() -> Self {
        Self {
            ok: true,
            overlaps: Vec::new(),
            out_of_bounds: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Serialize)]
struct CheckSlot {
    day_of_week: i64,
    time_from: String,
    time_to: String,
    location_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct CheckRequest {
    slots: Vec<CheckSlot>,
    #[serde(rename = "businessHours")]
    business_hours: Option<Vec<BusinessHoursDay>>,
}

/// Client for the serverless rules helper: a secondary, advisory
/// availability check plus best-effort audit events.
///
/// The helper is never a hard dependency. When disabled the check is a
/// no-op; when enabled, any transport failure is mapped to the open verdict
/// so a degraded helper cannot block writes.
#[derive(Clone)]
pub struct RulesClient {
    config: RulesConfig,
    http: Option<Client>,
}

impl RulesClient {
    pub fn new(config: RulesConfig) -> Self {
        let http = if config.enabled && !config.base_url.is_empty() {
            Some(
                Client::builder()
                    // Duration::from_secs_f64 panics on negative input.
                    .connect_timeout(Duration::from_secs_f64(config.connect_timeout.max(0.0)))
                    .timeout(Duration::from_secs_f64(config.read_timeout.max(0.0)))
                    .build()
                    .expect("Failed to build HTTP client"),
            )
        } else {
            None
        };

        Self { config, http }
    }

    pub fn enabled(&self) -> bool {
        self.http.is_some()
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), suffix)
    }

    /// Ask the helper for a second opinion on a slot batch. Single attempt,
    /// no retries. Never fails: transport errors resolve to the open
    /// verdict, an explicit branch below rather than an implicit catch-all.
    pub async fn availability_check(
        &self,
        slots: &[SlotInput],
        business_hours: Option<Vec<BusinessHoursDay>>,
    ) -> RulesVerdict {
        let Some(http) = &self.http else {
            return RulesVerdict::open();
        };

        match self.request_check(http, slots, business_hours).await {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!("Rules check unavailable, failing open: {}", err);
                RulesVerdict::open()
            }
        }
    }

    async fn request_check(
        &self,
        http: &Client,
        slots: &[SlotInput],
        business_hours: Option<Vec<BusinessHoursDay>>,
    ) -> Result<RulesVerdict, TransportError> {
        // Times go out in canonical HH:MM:SS form regardless of how the
        // batch arrived.
        let payload = CheckRequest {
            slots: slots
                .iter()
                .map(|s| CheckSlot {
                    day_of_week: s.day_of_week,
                    time_from: s.time_from.format("%H:%M:%S").to_string(),
                    time_to: s.time_to.format("%H:%M:%S").to_string(),
                    location_id: s.location_id,
                })
                .collect(),
            business_hours,
        };

        let response = http
            .post(self.endpoint("availability-check"))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        Ok(response.json::<RulesVerdict>().await?)
    }

    /// Emit a best-effort audit event. Gated by its own flag; failures are
    /// logged and swallowed.
    pub async fn audit(&self, event: &str, entity_id: Option<&str>, meta: serde_json::Value) {
        let Some(http) = &self.http else {
            return;
        };
        if !self.config.audit_enabled {
            return;
        }

        let payload = serde_json::json!({
            "service": self.config.audit_service,
            "event": event,
            "entityId": entity_id,
            "meta": meta,
        });

        if let Err(err) = http.post(self.endpoint("audit")).json(&payload).send().await {
            debug!("Audit emission failed (ignored): {}", err);
        }
    }
}
