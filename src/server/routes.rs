use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde::Serialize;
use tracing::{error, info, warn};

use super::error::{ListError, SubmitError};
use super::state::AppState;
use crate::db::queries::{DEFAULT_LIMIT, insert_feedback, load_recent_feedbacks};
use crate::errors::AppError;
use crate::models::feedback::receipt_timestamp;
use crate::models::impact::IMPACT_STATS;
use crate::models::{FeedbackRecord, ImpactStats, NewFeedback};

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Default)]
pub struct ListParams {
    limit: Option<String>,
}

impl ListParams {
    /// Only the first `limit` counts when the key is repeated.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let limit = pairs
            .iter()
            .find(|(key, _)| key == "limit")
            .map(|(_, value)| value.clone());
        Self { limit }
    }

    /// Missing or non-integer values fall back to the default page size.
    pub fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_LIMIT)
    }
}

/// `POST /api/feedback`
///
/// The body is parsed here rather than by the `Json` extractor so that a
/// malformed body gets the same failure shape as a storage error.
pub async fn submit_feedback(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SubmitResponse>), SubmitError> {
    let timestamp = receipt_timestamp();

    let feedback = NewFeedback::from_json(&body).inspect_err(|e| {
        warn!("Rejected feedback payload: {e}");
    })?;

    let store = state.store.clone();
    let id = tokio::task::spawn_blocking(move || {
        store.with_conn(|conn| insert_feedback(conn, &feedback, &timestamp))
    })
    .await
    .map_err(AppError::from)?
    .inspect_err(|e| error!("Failed to store feedback: {e}"))?;

    info!(id, "Feedback stored");

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            message: "Feedback submitted".to_string(),
            id,
        }),
    ))
}

/// `GET /api/feedbacks?limit=N`
pub async fn list_feedbacks(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<FeedbackRecord>>, ListError> {
    // An undecodable query string is treated like a missing `limit`
    let params = match query {
        Ok(Query(pairs)) => ListParams::from_pairs(&pairs),
        Err(e) => {
            warn!("Ignoring query string: {e}");
            ListParams::default()
        }
    };
    let limit = params.limit();
    let store = state.store.clone();

    let feedbacks = tokio::task::spawn_blocking(move || {
        store.with_conn(|conn| load_recent_feedbacks(conn, limit))
    })
    .await
    .map_err(AppError::from)?
    .inspect_err(|e| error!("Failed to load feedbacks: {e}"))?;

    Ok(Json(feedbacks))
}

/// `GET /api/stats/impact`
pub async fn impact_stats() -> (StatusCode, Json<ImpactStats>) {
    (StatusCode::OK, Json(IMPACT_STATS))
}
