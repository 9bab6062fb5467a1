use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `feedbacks` table if it is missing.
/// Safe to run on every start: existing rows are never touched.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS feedbacks (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            type               TEXT,
            overall_rating     INTEGER,
            overall_emoji      TEXT,
            quality_rating     INTEGER,
            quality_emoji      TEXT,
            hygiene_rating     INTEGER,
            hygiene_emoji      TEXT,
            quantity_rating    INTEGER,
            quantity_emoji     TEXT,
            temperature_rating INTEGER,
            temperature_emoji  TEXT,
            average_rating     REAL,
            message            TEXT,
            timestamp          TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_feedbacks_timestamp ON feedbacks(timestamp);
        "#,
    )?;
    Ok(())
}
