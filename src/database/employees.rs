use crate::api::middleware::error::ApiResult;
use crate::database::{format_date, parse_date, Database};
use crate::domain::ports::EmployeeRepository;
use crate::models::{Employee, UpdateEmployeeRequest};
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

fn row_to_employee(row: &AnyRow) -> ApiResult<Employee> {
    let birth_date: String = row.try_get("birth_date")?;
    let gender: i64 = row.try_get("gender")?;
    let active: i64 = row.try_get("active")?;

    Ok(Employee {
        id: row.try_get("id")?,
        idp_id: row.try_get("idp_id").ok(),
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        gender: gender != 0,
        birth_date: parse_date(&birth_date)?,
        id_picture: row.try_get("id_picture").ok(),
        active: active != 0,
        company_id: row.try_get("company_id").ok(),
        location_id: row.try_get("location_id").ok(),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl EmployeeRepository for Database {
    async fn create_employee(&self, employee: &Employee) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO employees (id, idp_id, first_name, last_name, gender, birth_date,
                                    id_picture, active, company_id, location_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&employee.id)
        .bind(&employee.idp_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.gender as i64)
        .bind(format_date(employee.birth_date))
        .bind(&employee.id_picture)
        .bind(employee.active as i64)
        .bind(employee.company_id)
        .bind(employee.location_id)
        .bind(&employee.created_at)
        .bind(&employee.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_employee(&self, employee_id: &str) -> ApiResult<Option<Employee>> {
        let row = sqlx::query(
            "SELECT id, idp_id, first_name, last_name, gender, birth_date,
                    id_picture, active, company_id, location_id, created_at, updated_at
             FROM employees
             WHERE id = ?",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_employee(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_employees(&self, skip: i64, limit: i64) -> ApiResult<Vec<Employee>> {
        let rows = sqlx::query(
            "SELECT id, idp_id, first_name, last_name, gender, birth_date,
                    id_picture, active, company_id, location_id, created_at, updated_at
             FROM employees
             WHERE active = 1
             ORDER BY created_at
             LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_employee).collect()
    }

    async fn update_employee(
        &self,
        employee_id: &str,
        request: &UpdateEmployeeRequest,
    ) -> ApiResult<Option<Employee>> {
        let now = chrono::Utc::now().to_rfc3339();
        let result = sqlx::query(
            "UPDATE employees
             SET idp_id = ?, first_name = ?, last_name = ?, gender = ?, birth_date = ?,
                 id_picture = ?, active = ?, company_id = ?, location_id = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&request.idp_id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(request.gender as i64)
        .bind(format_date(request.birth_date))
        .bind(&request.id_picture)
        .bind(request.active as i64)
        .bind(request.company_id)
        .bind(request.location_id)
        .bind(&now)
        .bind(employee_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_employee(employee_id).await
    }

    async fn soft_delete_employee(&self, employee_id: &str) -> ApiResult<bool> {
        let now = chrono::Utc::now().to_rfc3339();
        let result = sqlx::query("UPDATE employees SET active = 0, updated_at = ? WHERE id = ?")
            .bind(&now)
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
