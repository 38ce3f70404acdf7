use crate::api::middleware::error::{ApiError, ApiResult};
use crate::domain::ports::EmployeeRepository;
use crate::models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};

fn validate_names(first_name: &str, last_name: &str) -> ApiResult<()> {
    if first_name.trim().is_empty() {
        return Err(ApiError::BadRequest("first_name must not be empty".to_string()));
    }
    if last_name.trim().is_empty() {
        return Err(ApiError::BadRequest("last_name must not be empty".to_string()));
    }
    Ok(())
}

pub async fn create_employee(
    repo: &dyn EmployeeRepository,
    request: CreateEmployeeRequest,
) -> ApiResult<Employee> {
    validate_names(&request.first_name, &request.last_name)?;

    let employee = Employee::new(request);
    repo.create_employee(&employee).await?;

    tracing::info!("Created employee {}", employee.id);
    Ok(employee)
}

pub async fn get_employee(repo: &dyn EmployeeRepository, employee_id: &str) -> ApiResult<Employee> {
    repo.get_employee(employee_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))
}

pub async fn list_employees(
    repo: &dyn EmployeeRepository,
    skip: i64,
    limit: i64,
) -> ApiResult<Vec<Employee>> {
    repo.list_employees(skip.max(0), limit.clamp(1, 500)).await
}

pub async fn update_employee(
    repo: &dyn EmployeeRepository,
    employee_id: &str,
    request: UpdateEmployeeRequest,
) -> ApiResult<Employee> {
    validate_names(&request.first_name, &request.last_name)?;

    repo.update_employee(employee_id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))
}

pub async fn delete_employee(repo: &dyn EmployeeRepository, employee_id: &str) -> ApiResult<()> {
    if !repo.soft_delete_employee(employee_id).await? {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }
    tracing::info!("Soft-deleted employee {}", employee_id);
    Ok(())
}
