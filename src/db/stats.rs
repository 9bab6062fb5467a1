use crate::errors::AppResult;
use rusqlite::Connection;

/// Summary of the stored feedbacks, shown by `db --info`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackStats {
    pub total: i64,
    pub first: Option<String>,
    pub last: Option<String>,
}

pub fn feedback_stats(conn: &Connection) -> AppResult<FeedbackStats> {
    // MIN/MAX over an empty table yield a single row of NULLs
    let stats = conn.query_row(
        "SELECT COUNT(*), MIN(timestamp), MAX(timestamp) FROM feedbacks",
        [],
        |row| {
            Ok(FeedbackStats {
                total: row.get(0)?,
                first: row.get(1)?,
                last: row.get(2)?,
            })
        },
    )?;
    Ok(stats)
}
