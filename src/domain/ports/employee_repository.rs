use crate::api::middleware::error::ApiResult;
use crate::models::{Employee, UpdateEmployeeRequest};

/// Repository for employee records.
#[async_trait::async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee row.
    async fn create_employee(&self, employee: &Employee) -> ApiResult<()>;

    /// Fetch an employee by id, including soft-deleted ones.
    async fn get_employee(&self, employee_id: &str) -> ApiResult<Option<Employee>>;

    /// List active employees with offset pagination.
    async fn list_employees(&self, skip: i64, limit: i64) -> ApiResult<Vec<Employee>>;

    /// Overwrite all mutable fields of an employee. Returns the updated row,
    /// or None if the employee does not exist.
    async fn update_employee(
        &self,
        employee_id: &str,
        request: &UpdateEmployeeRequest,
    ) -> ApiResult<Option<Employee>>;

    /// Soft delete: clears the active flag, keeps the row. Returns false if
    /// the employee does not exist.
    async fn soft_delete_employee(&self, employee_id: &str) -> ApiResult<bool>;
}
