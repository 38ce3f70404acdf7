use crate::api::middleware::error::{ApiError, ApiResult};
use chrono::{NaiveDate, NaiveTime};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

pub mod availability;
pub mod employees;
pub mod skills;

pub struct Database {
    pool: AnyPool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(20)
            .min_connections(5)
            .connect(database_url)
            .await?;

        // Enable foreign keys for SQLite
        if database_url.starts_with("sqlite") {
            sqlx::query("PRAGMA foreign_keys = ON")
                .execute(&pool)
                .await?;
        }

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("migrations/sqlite").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

// Times and dates are stored as TEXT ("HH:MM:SS" / "YYYY-MM-DD") so the same
// queries run on every AnyPool backend.

pub(crate) fn format_time(value: NaiveTime) -> String {
    value.format("%H:%M:%S").to_string()
}

pub(crate) fn parse_time(value: &str) -> ApiResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|err| ApiError::Internal(format!("Malformed time '{}' in database: {}", value, err)))
}

pub(crate) fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub(crate) fn parse_date(value: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| ApiError::Internal(format!("Malformed date '{}' in database: {}", value, err)))
}
