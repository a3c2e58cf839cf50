//! User feedback submissions.
//!
//! Feedback is not validated, checked against the store, or persisted.
//! It is echoed back with a receipt timestamp.

use crate::facilities::data::{iso8601, now_millis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Incoming feedback body. Every field is optional and untyped.
///
/// `None` means the field was absent; an explicit `null` is kept as
/// `Some(Value::Null)` so it is echoed back.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    #[serde(default, deserialize_with = "present")]
    pub facility_id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub comment: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl FeedbackSubmission {
    /// Parse a raw request body.
    ///
    /// Anything that is not a JSON object is treated as an empty submission.
    pub fn from_body(body: &[u8]) -> Self {
        if body.is_empty() {
            return Self::default();
        }
        let parsed = serde_json::from_slice::<Value>(body).and_then(|value| match value {
            Value::Object(_) => serde_json::from_value::<Self>(value),
            _ => Ok(Self::default()),
        });
        match parsed {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "unparseable feedback body, treating as empty");
                Self::default()
            }
        }
    }

    /// Stamp the submission with the current time.
    pub fn into_receipt(self) -> FeedbackReceipt {
        FeedbackReceipt {
            facility_id: self.facility_id,
            rating: self.rating,
            comment: self.comment,
            timestamp: now_millis(),
        }
    }
}

/// Echo of a submission returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value>,
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
}
