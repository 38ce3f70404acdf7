use crate::api::middleware::error::{ApiError, ApiResult};
use crate::models::{BusinessHoursDay, CompanyRef, LocationRef, RawBusinessHoursDay};
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Settings for the Company directory service. Lookups are opt-in; when
/// strict mode is off, transport failures degrade to "not found" / empty
/// results instead of failing the request.
#[derive(Debug, Clone)]
pub struct CompanyConfig {
    pub enabled: bool,
    pub base_url: String,
    pub strict: bool,
    pub connect_timeout: f64,
    pub read_timeout: f64,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: String::new(),
            strict: false,
            connect_timeout: 2.0,
            read_timeout: 2.0,
        }
    }
}

/// Read-only client for the Company service: companies, locations, and
/// business hours.
#[derive(Clone)]
pub struct CompanyClient {
    config: CompanyConfig,
    http: Option<Client>,
}

impl CompanyClient {
    pub fn new(config: CompanyConfig) -> Self {
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

    async fn fetch_optional<T: serde::de::DeserializeOwned>(
        &self,
        path: String,
    ) -> ApiResult<Option<T>> {
        let Some(http) = &self.http else {
            return Ok(None);
        };

        let result: Result<Option<T>, reqwest::Error> = async {
            let response = http.get(&path).send().await?;
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            let response = response.error_for_status()?;
            response.json::<T>().await.map(Some)
        }
        .await;

        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                if self.config.strict {
                    return Err(ApiError::BadGateway(format!(
                        "Company service request failed: {}",
                        err
                    )));
                }
                warn!("Company service lookup failed (treated as absent): {}", err);
                Ok(None)
            }
        }
    }

    pub async fn get_company(&self, company_id: i64) -> ApiResult<Option<CompanyRef>> {
        self.fetch_optional(self.endpoint(&format!("companies/{}", company_id)))
            .await
    }

    pub async fn get_location(&self, location_id: i64) -> ApiResult<Option<LocationRef>> {
        self.fetch_optional(self.endpoint(&format!("locations/{}", location_id)))
            .await
    }

    /// Business hours for a company, collapsed to the canonical key pair.
    /// Entries that carry neither naming convention are dropped with a
    /// warning.
    pub async fn get_business_hours(&self, company_id: i64) -> ApiResult<Vec<BusinessHoursDay>> {
        let raw: Option<Vec<RawBusinessHoursDay>> = self
            .fetch_optional(self.endpoint(&format!("business-hours/company/{}", company_id)))
            .await?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        let mut normalized = Vec::with_capacity(raw.len());
        for entry in raw {
            let day_number = entry.day_number;
            match entry.normalize() {
                Some(day) => normalized.push(day),
                None => warn!(
                    "Business-hours entry for day {} has no usable time keys, dropping it",
                    day_number
                ),
            }
        }
        Ok(normalized)
    }

    /// A missing location id or a disabled client validates trivially.
    pub async fn validate_location(&self, location_id: Option<i64>) -> ApiResult<bool> {
        let Some(location_id) = location_id else {
            return Ok(true);
        };
        if !self.enabled() {
            return Ok(true);
        }
        Ok(self.get_location(location_id).await?.is_some())
    }

    pub async fn validate_company(&self, company_id: Option<i64>) -> ApiResult<bool> {
        let Some(company_id) = company_id else {
            return Ok(true);
        };
        if !self.enabled() {
            return Ok(true);
        }
        Ok(self.get_company(company_id).await?.is_some())
    }
}
