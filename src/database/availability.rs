use crate::api::middleware::error::ApiResult;
use crate::database::{format_time, parse_time, Database};
use crate::domain::ports::AvailabilityRepository;
use crate::models::{AvailabilitySlot, SlotInput};
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};
use uuid::Uuid;

fn row_to_slot(row: &AnyRow) -> ApiResult<AvailabilitySlot> {
    let time_from: String = row.try_get("time_from")?;
    let time_to: String = row.try_get("time_to")?;

    Ok(AvailabilitySlot {
        id: row.try_get("id")?,
        employee_id: row.try_get("employee_id")?,
        day_of_week: row.try_get("day_of_week")?,
        time_from: parse_time(&time_from)?,
        time_to: parse_time(&time_to)?,
        location_id: row.try_get("location_id").ok(),
    })
}

#[async_trait]
impl AvailabilityRepository for Database {
    async fn list_slots(&self, employee_id: &str) -> ApiResult<Vec<AvailabilitySlot>> {
        let rows = sqlx::query(
            "SELECT id, employee_id, day_of_week, time_from, time_to, location_id
             FROM availability_slots
             WHERE employee_id = ?
             ORDER BY day_of_week, time_from",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_slot).collect()
    }

    async fn load_for_days(
        &self,
        employee_id: &str,
        days: &[i64],
    ) -> ApiResult<Vec<AvailabilitySlot>> {
        if days.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; days.len()].join(", ");
        let sql = format!(
            "SELECT id, employee_id, day_of_week, time_from, time_to, location_id
             FROM availability_slots
             WHERE employee_id = ? AND day_of_week IN ({})
             ORDER BY day_of_week, time_from",
            placeholders
        );

        let mut query = sqlx::query(&sql).bind(employee_id);
        for day in days {
            query = query.bind(*day);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_slot).collect()
    }

    async fn insert_batch(
        &self,
        employee_id: &str,
        slots: &[SlotInput],
    ) -> ApiResult<Vec<AvailabilitySlot>> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(slots.len());

        for slot in slots {
            let stored = AvailabilitySlot {
                id: Uuid::new_v4().to_string(),
                employee_id: employee_id.to_string(),
                day_of_week: slot.day_of_week,
                time_from: slot.time_from,
                time_to: slot.time_to,
                location_id: slot.location_id,
            };

            sqlx::query(
                "INSERT INTO availability_slots (id, employee_id, day_of_week, time_from, time_to, location_id)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(&stored.id)
            .bind(&stored.employee_id)
            .bind(stored.day_of_week)
            .bind(format_time(stored.time_from))
            .bind(format_time(stored.time_to))
            .bind(stored.location_id)
            .execute(&mut *tx)
            .await?;

            created.push(stored);
        }

        tx.commit().await?;
        Ok(created)
    }

    async fn delete_slot(&self, employee_id: &str, slot_id: &str) -> ApiResult<bool> {
        let result = sqlx::query(
            "DELETE FROM availability_slots WHERE id = ? AND employee_id = ?",
        )
        .bind(slot_id)
        .bind(employee_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
