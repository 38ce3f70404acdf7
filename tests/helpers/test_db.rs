use staffdesk::database::Database;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestDb {
    db: Arc<Database>,
    file: String,
}

impl TestDb {
    pub fn db(&self) -> Arc<Database> {
        self.db.clone()
    }
}

/// File-based SQLite with a unique name per test so tests can run in
/// parallel. Schema is created inline, mirroring the migrations.
pub async fn setup_test_db() -> TestDb {
    let file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    setup_schema(&db).await;

    TestDb {
        db: Arc::new(db),
        file,
    }
}

pub async fn teardown_test_db(test_db: TestDb) {
    test_db.db.pool().close().await;
    std::fs::remove_file(&test_db.file).ok();
    std::fs::remove_file(format!("{}-journal", test_db.file)).ok();
}

async fn setup_schema(db: &Database) {
    let pool = db.pool();

    sqlx::query(
        "CREATE TABLE employees (
            id TEXT PRIMARY KEY,
            idp_id TEXT UNIQUE,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            gender INTEGER NOT NULL,
            birth_date TEXT NOT NULL,
            id_picture TEXT,
            active INTEGER NOT NULL DEFAULT 1,
            company_id INTEGER,
            location_id INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create employees table");

    sqlx::query(
        "CREATE TABLE availability_slots (
            id TEXT PRIMARY KEY,
            employee_id TEXT NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
            day_of_week INTEGER NOT NULL,
            time_from TEXT NOT NULL,
            time_to TEXT NOT NULL,
            location_id INTEGER
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create availability_slots table");

    sqlx::query(
        "CREATE INDEX idx_availability_employee_day
         ON availability_slots(employee_id, day_of_week)",
    )
    .execute(pool)
    .await
    .ok();

    sqlx::query(
        "CREATE TABLE employee_skills (
            employee_id TEXT NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
            service_id INTEGER NOT NULL,
            PRIMARY KEY (employee_id, service_id)
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create employee_skills table");
}
