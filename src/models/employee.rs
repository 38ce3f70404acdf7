use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub idp_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub gender: bool,
    pub birth_date: NaiveDate,
    pub id_picture: Option<String>,
    pub active: bool,
    // References into the Company service, validated remotely when enabled
    pub company_id: Option<i64>,
    pub location_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Employee {
    pub fn new(request: CreateEmployeeRequest) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            idp_id: request.idp_id,
            first_name: request.first_name,
            last_name: request.last_name,
            gender: request.gender,
            birth_date: request.birth_date,
            id_picture: request.id_picture,
            active: true,
            company_id: request.company_id,
            location_id: request.location_id,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

// DTOs for API requests
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    pub idp_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub gender: bool,
    pub birth_date: NaiveDate,
    pub id_picture: Option<String>,
    pub company_id: Option<i64>,
    pub location_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub idp_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub gender: bool,
    pub birth_date: NaiveDate,
    pub id_picture: Option<String>,
    pub active: bool,
    pub company_id: Option<i64>,
    pub location_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}
