use crate::errors::AppResult;
use crate::models::{FeedbackRecord, NewFeedback};
use rusqlite::{Connection, Result, Row, params};

/// Default page size of the recent-feedback listing.
pub const DEFAULT_LIMIT: i64 = 50;

/// Insert one submission stamped with `timestamp`; returns the new row id.
pub fn insert_feedback(conn: &Connection, fb: &NewFeedback, timestamp: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO feedbacks
             (type, overall_rating, overall_emoji, quality_rating, quality_emoji,
              hygiene_rating, hygiene_emoji, quantity_rating, quantity_emoji,
              temperature_rating, temperature_emoji, average_rating, message, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            fb.kind,
            fb.overall_rating,
            fb.overall_emoji,
            fb.quality_rating,
            fb.quality_emoji,
            fb.hygiene_rating,
            fb.hygiene_emoji,
            fb.quantity_rating,
            fb.quantity_emoji,
            fb.temperature_rating,
            fb.temperature_emoji,
            fb.average_rating,
            fb.message,
            timestamp,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Most recent feedbacks first. A negative `limit` means no limit (SQLite semantics).
pub fn load_recent_feedbacks(conn: &Connection, limit: i64) -> AppResult<Vec<FeedbackRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM feedbacks
         ORDER BY timestamp DESC, id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<FeedbackRecord> {
    Ok(FeedbackRecord {
        id: row.get("id")?,
        kind: row.get("type")?,
        overall_rating: row.get("overall_rating")?,
        overall_emoji: row.get("overall_emoji")?,
        quality_rating: row.get("quality_rating")?,
        quality_emoji: row.get("quality_emoji")?,
        hygiene_rating: row.get("hygiene_rating")?,
        hygiene_emoji: row.get("hygiene_emoji")?,
        quantity_rating: row.get("quantity_rating")?,
        quantity_emoji: row.get("quantity_emoji")?,
        temperature_rating: row.get("temperature_rating")?,
        temperature_emoji: row.get("temperature_emoji")?,
        average_rating: row.get("average_rating")?,
        message: row.get("message")?,
        timestamp: row.get("timestamp")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    fn ts(n: u32) -> String {
        format!("2025-03-01T12:00:{n:02}.000000Z")
    }

    fn text_feedback(msg: &str) -> NewFeedback {
        NewFeedback {
            kind: Some("text".to_string()),
            message: Some(msg.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn insert_then_load_round_trips_every_field() {
        let conn = memory_db();
        let fb = NewFeedback {
            kind: Some("emoji".to_string()),
            overall_rating: Some(5),
            overall_emoji: Some("😍".to_string()),
            quality_rating: Some(4),
            quality_emoji: Some("😊".to_string()),
            hygiene_rating: Some(5),
            hygiene_emoji: Some("😍".to_string()),
            quantity_rating: Some(3),
            quantity_emoji: Some("😐".to_string()),
            temperature_rating: Some(2),
            temperature_emoji: Some("😞".to_string()),
            average_rating: Some(3.8),
            message: None,
        };

        let id = insert_feedback(&conn, &fb, &ts(1)).unwrap();
        let rows = load_recent_feedbacks(&conn, DEFAULT_LIMIT).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].timestamp, ts(1));
        assert_eq!(rows[0].payload(), fb);
    }

    #[test]
    fn empty_submission_stores_nulls() {
        let conn = memory_db();
        insert_feedback(&conn, &NewFeedback::default(), &ts(1)).unwrap();
        let rows = load_recent_feedbacks(&conn, DEFAULT_LIMIT).unwrap();
        assert_eq!(rows[0].payload(), NewFeedback::default());
    }

    #[test]
    fn ids_strictly_increase() {
        let conn = memory_db();
        let ids: Vec<i64> = (0..5)
            .map(|i| insert_feedback(&conn, &text_feedback("x"), &ts(i)).unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn newest_first_and_limited() {
        let conn = memory_db();
        for i in 0..5 {
            insert_feedback(&conn, &text_feedback(&format!("m{i}")), &ts(i)).unwrap();
        }

        let rows = load_recent_feedbacks(&conn, 2).unwrap();
        let msgs: Vec<_> = rows.iter().map(|r| r.message.clone().unwrap()).collect();
        assert_eq!(msgs, vec!["m4", "m3"]);
    }

    #[test]
    fn equal_timestamps_fall_back_to_id_order() {
        let conn = memory_db();
        let first = insert_feedback(&conn, &text_feedback("a"), &ts(7)).unwrap();
        let second = insert_feedback(&conn, &text_feedback("b"), &ts(7)).unwrap();

        let rows = load_recent_feedbacks(&conn, 10).unwrap();
        assert_eq!(rows[0].id, second);
        assert_eq!(rows[1].id, first);
    }

    #[test]
    fn negative_limit_returns_everything() {
        let conn = memory_db();
        for i in 0..3 {
            insert_feedback(&conn, &text_feedback("x"), &ts(i)).unwrap();
        }
        assert_eq!(load_recent_feedbacks(&conn, -1).unwrap().len(), 3);
    }

    #[test]
    fn missing_table_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(load_recent_feedbacks(&conn, 10).is_err());
    }
}
