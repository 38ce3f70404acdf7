use crate::api::middleware::error::{ApiError, ApiResult};
use crate::domain::ports::{EmployeeRepository, SkillRepository};
use crate::models::EmployeeSkill;

async fn require_employee(repo: &dyn EmployeeRepository, employee_id: &str) -> ApiResult<()> {
    repo.get_employee(employee_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))?;
    Ok(())
}

pub async fn get_skills(
    employees: &dyn EmployeeRepository,
    skills: &dyn SkillRepository,
    employee_id: &str,
) -> ApiResult<Vec<EmployeeSkill>> {
    require_employee(employees, employee_id).await?;
    skills.list_skills(employee_id).await
}

/// Replace the employee's full skill set. Duplicate ids in the request are
/// collapsed before writing.
pub async fn replace_skills(
    employees: &dyn EmployeeRepository,
    skills: &dyn SkillRepository,
    employee_id: &str,
    mut service_ids: Vec<i64>,
) -> ApiResult<Vec<EmployeeSkill>> {
    require_employee(employees, employee_id).await?;

    service_ids.sort_unstable();
    service_ids.dedup();
    skills.replace_skills(employee_id, &service_ids).await
}
