#![allow(dead_code)]

mod test_db;

pub use test_db::*;

use chrono::{NaiveDate, NaiveTime};
use staffdesk::database::Database;
use staffdesk::models::{CreateEmployeeRequest, Employee, SlotInput};
use staffdesk::services::{
    AvailabilityService, CompanyClient, CompanyConfig, RulesClient, RulesConfig,
};
use std::sync::Arc;

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn slot(day: i64, from: NaiveTime, to: NaiveTime) -> SlotInput {
    SlotInput {
        day_of_week: day,
        time_from: from,
        time_to: to,
        location_id: None,
    }
}

pub fn slot_at(day: i64, from: NaiveTime, to: NaiveTime, location_id: i64) -> SlotInput {
    SlotInput {
        day_of_week: day,
        time_from: from,
        time_to: to,
        location_id: Some(location_id),
    }
}

/// Availability pipeline with both sibling-service clients disabled.
pub fn availability_service(db: &Arc<Database>) -> AvailabilityService {
    AvailabilityService::new(
        db.clone(),
        db.clone(),
        CompanyClient::new(CompanyConfig::default()),
        RulesClient::new(RulesConfig::default()),
    )
}

pub fn employee_request(first_name: &str, last_name: &str) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        idp_id: None,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        gender: true,
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 5).unwrap(),
        id_picture: None,
        company_id: None,
        location_id: None,
    }
}

pub async fn create_test_employee(db: &Arc<Database>, first_name: &str) -> Employee {
    staffdesk::services::employee_service::create_employee(
        db.as_ref(),
        employee_request(first_name, "Tester"),
    )
    .await
    .expect("Failed to create test employee")
}

/// Minimal HTTP server on an ephemeral port answering every request with a
/// fixed status and body. Lives until the test's runtime shuts down.
pub async fn spawn_http_stub(status: u16, body: &'static str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");

    let app = axum::Router::new().fallback(move || async move {
        (
            axum::http::StatusCode::from_u16(status).expect("invalid stub status"),
            body,
        )
    });
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{}", addr)
}
