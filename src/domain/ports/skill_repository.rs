use crate::api::middleware::error::ApiResult;
use crate::models::EmployeeSkill;

/// Repository for employee skill links.
#[async_trait::async_trait]
pub trait SkillRepository: Send + Sync {
    /// All skills for an employee.
    async fn list_skills(&self, employee_id: &str) -> ApiResult<Vec<EmployeeSkill>>;

    /// Replace the employee's full skill set in one transaction and return
    /// the new set.
    async fn replace_skills(
        &self,
        employee_id: &str,
        service_ids: &[i64],
    ) -> ApiResult<Vec<EmployeeSkill>>;
}
