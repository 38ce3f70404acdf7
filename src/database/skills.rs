use crate::api::middleware::error::ApiResult;
use crate::database::Database;
use crate::domain::ports::SkillRepository;
use crate::models::EmployeeSkill;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl SkillRepository for Database {
    async fn list_skills(&self, employee_id: &str) -> ApiResult<Vec<EmployeeSkill>> {
        let rows = sqlx::query(
            "SELECT employee_id, service_id
             FROM employee_skills
             WHERE employee_id = ?
             ORDER BY service_id",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(EmployeeSkill {
                    employee_id: row.try_get("employee_id")?,
                    service_id: row.try_get("service_id")?,
                })
            })
            .collect()
    }

    async fn replace_skills(
        &self,
        employee_id: &str,
        service_ids: &[i64],
    ) -> ApiResult<Vec<EmployeeSkill>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM employee_skills WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?;

        for service_id in service_ids {
            sqlx::query(
                "INSERT INTO employee_skills (employee_id, service_id) VALUES (?, ?)",
            )
            .bind(employee_id)
            .bind(*service_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        self.list_skills(employee_id).await
    }
}
