//! Feedback submissions as received over HTTP and as stored in `feedbacks`.

use crate::errors::AppResult;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// An incoming submission. Every field is optional and copied verbatim;
/// unknown keys (including a client-supplied `id` or `timestamp`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewFeedback {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub overall_rating: Option<i64>,
    pub overall_emoji: Option<String>,
    pub quality_rating: Option<i64>,
    pub quality_emoji: Option<String>,
    pub hygiene_rating: Option<i64>,
    pub hygiene_emoji: Option<String>,
    pub quantity_rating: Option<i64>,
    pub quantity_emoji: Option<String>,
    pub temperature_rating: Option<i64>,
    pub temperature_emoji: Option<String>,
    pub average_rating: Option<f64>,
    pub message: Option<String>,
}

impl NewFeedback {
    /// Parse a raw request body. Anything that is not a JSON object with
    /// correctly typed fields is rejected.
    pub fn from_json(body: &[u8]) -> AppResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// A persisted row of the `feedbacks` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub overall_rating: Option<i64>,
    pub overall_emoji: Option<String>,
    pub quality_rating: Option<i64>,
    pub quality_emoji: Option<String>,
    pub hygiene_rating: Option<i64>,
    pub hygiene_emoji: Option<String>,
    pub quantity_rating: Option<i64>,
    pub quantity_emoji: Option<String>,
    pub temperature_rating: Option<i64>,
    pub temperature_emoji: Option<String>,
    pub average_rating: Option<f64>,
    pub message: Option<String>,
    pub timestamp: String, // ISO 8601, UTC
}

impl FeedbackRecord {
    /// The submitted part of the record, without `id` and `timestamp`.
    pub fn payload(&self) -> NewFeedback {
        NewFeedback {
            kind: self.kind.clone(),
            overall_rating: self.overall_rating,
            overall_emoji: self.overall_emoji.clone(),
            quality_rating: self.quality_rating,
            quality_emoji: self.quality_emoji.clone(),
            hygiene_rating: self.hygiene_rating,
            hygiene_emoji: self.hygiene_emoji.clone(),
            quantity_rating: self.quantity_rating,
            quantity_emoji: self.quantity_emoji.clone(),
            temperature_rating: self.temperature_rating,
            temperature_emoji: self.temperature_emoji.clone(),
            average_rating: self.average_rating,
            message: self.message.clone(),
        }
    }
}

/// Server receipt time. Fixed precision and the `Z` suffix keep the text
/// ordering of stored timestamps equal to their chronological ordering.
pub fn receipt_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_absent() {
        let fb = NewFeedback::from_json(b"{}").unwrap();
        assert_eq!(fb, NewFeedback::default());
    }

    #[test]
    fn type_key_maps_to_kind() {
        let fb = NewFeedback::from_json(br#"{"type":"text","message":"too salty"}"#).unwrap();
        assert_eq!(fb.kind.as_deref(), Some("text"));
        assert_eq!(fb.message.as_deref(), Some("too salty"));
        assert!(fb.overall_rating.is_none());
    }

    #[test]
    fn client_id_and_timestamp_are_ignored() {
        let fb = NewFeedback::from_json(
            br#"{"id":99,"timestamp":"1999-01-01T00:00:00","overall_rating":4}"#,
        )
        .unwrap();
        assert_eq!(fb.overall_rating, Some(4));
    }

    #[test]
    fn ratings_are_not_range_checked() {
        let fb = NewFeedback::from_json(br#"{"quality_rating":42,"hygiene_rating":-3}"#).unwrap();
        assert_eq!(fb.quality_rating, Some(42));
        assert_eq!(fb.hygiene_rating, Some(-3));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(NewFeedback::from_json(b"not json").is_err());
        assert!(NewFeedback::from_json(b"").is_err());
        assert!(NewFeedback::from_json(b"null").is_err());
        assert!(NewFeedback::from_json(b"42").is_err());
    }

    #[test]
    fn mistyped_rating_is_rejected() {
        assert!(NewFeedback::from_json(br#"{"overall_rating":"five"}"#).is_err());
    }

    #[test]
    fn record_serializes_absent_fields_as_null() {
        let rec = FeedbackRecord {
            id: 1,
            kind: None,
            overall_rating: None,
            overall_emoji: None,
            quality_rating: None,
            quality_emoji: None,
            hygiene_rating: None,
            hygiene_emoji: None,
            quantity_rating: None,
            quantity_emoji: None,
            temperature_rating: None,
            temperature_emoji: None,
            average_rating: None,
            message: None,
            timestamp: "2025-01-01T00:00:00.000000Z".to_string(),
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert!(value["type"].is_null());
        assert!(value["average_rating"].is_null());
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn receipt_timestamps_sort_chronologically() {
        let a = receipt_timestamp();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = receipt_timestamp();
        assert!(a < b);
        assert!(a.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&a).is_ok());
    }
}
