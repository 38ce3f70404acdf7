use crate::api::middleware::error::{ApiError, ApiResult};
use crate::models::Reservation;
use reqwest::Client;
use std::time::Duration;

/// Proxy client for the Reservation service.
#[derive(Clone)]
pub struct ReservationClient {
    base_url: Option<String>,
    http: Client,
}

impl ReservationClient {
    pub fn new(base_url: Option<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
            http,
        }
    }

    pub async fn reservations_for_employee(
        &self,
        employee_id: &str,
    ) -> ApiResult<Vec<Reservation>> {
        let Some(base_url) = &self.base_url else {
            return Err(ApiError::BadGateway(
                "Reservation service is not configured".to_string(),
            ));
        };

        let response = self
            .http
            .get(format!("{}/reservations", base_url))
            .query(&[("employee_id", employee_id)])
            .send()
            .await
            .map_err(|err| ApiError::BadGateway(format!("Reservation service request failed: {}", err)))?
            .error_for_status()
            .map_err(|err| ApiError::BadGateway(format!("Reservation service error: {}", err)))?;

        response
            .json::<Vec<Reservation>>()
            .await
            .map_err(|err| ApiError::BadGateway(format!("Malformed reservation response: {}", err)))
    }
}
