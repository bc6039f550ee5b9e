//! SQLite persistence for the submissions table.

use contracts::costing::SubmissionRow;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS submissions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    process TEXT NOT NULL,
    supplier TEXT NOT NULL,
    material_thickness REAL NOT NULL,
    foam_thickness REAL NOT NULL,
    bladder_type TEXT NOT NULL,
    panel_config INTEGER NOT NULL,
    quantity INTEGER NOT NULL,
    per_ball_usd REAL NOT NULL,
    total_for_quantity_usd REAL NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Opens (creating if missing) the database and applies the schema.
pub async fn init(path: &str) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    sqlx::query(SCHEMA).execute(&pool).await?;
    Ok(pool)
}

pub struct NewSubmission {
    pub process: String,
    pub supplier: String,
    pub material_thickness: f64,
    pub foam_thickness: f64,
    pub bladder_type: String,
    pub panel_config: i64,
    pub quantity: i64,
    pub per_ball_usd: f64,
    pub total_for_quantity_usd: f64,
}

/// Inserts one submission and returns its row id.
pub async fn insert_submission(pool: &SqlitePool, s: &NewSubmission) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO submissions (
            process, supplier, material_thickness, foam_thickness,
            bladder_type, panel_config, quantity,
            per_ball_usd, total_for_quantity_usd
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&s.process)
    .bind(&s.supplier)
    .bind(s.material_thickness)
    .bind(s.foam_thickness)
    .bind(&s.bladder_type)
    .bind(s.panel_config)
    .bind(s.quantity)
    .bind(s.per_ball_usd)
    .bind(s.total_for_quantity_usd)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All submissions, newest first.
pub async fn list_submissions(pool: &SqlitePool) -> sqlx::Result<Vec<SubmissionRow>> {
    let rows = sqlx::query(
        "SELECT id, process, supplier, material_thickness, foam_thickness,
                bladder_type, panel_config, quantity,
                per_ball_usd, total_for_quantity_usd, created_at
         FROM submissions
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| SubmissionRow {
            id: row.get("id"),
            process: row.get("process"),
            supplier: row.get("supplier"),
            material_thickness: row.get("material_thickness"),
            foam_thickness: row.get("foam_thickness"),
            bladder_type: row.get("bladder_type"),
            panel_config: row.get("panel_config"),
            quantity: row.get("quantity"),
            per_ball_usd: row.get("per_ball_usd"),
            total_for_quantity_usd: row.get("total_for_quantity_usd"),
            created_at: row.get("created_at"),
        })
        .collect())
}
