use serde::{Deserialize, Serialize};

/// Qualification link between an employee and a service offered by the
/// Company service (`service_id` lives in that service's id space).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSkill {
    pub employee_id: String,
    pub service_id: i64,
}
