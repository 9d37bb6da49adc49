use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reuse count at which a note counts as confirmed.
pub const CONFIRM_THRESHOLD: u32 = 3;

/// A freeform remark attached to a note (a variation, a caveat, a reference).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            created_at: Utc::now(),
        }
    }
}

/// One recorded technique, with the number of times it has been reused.
///
/// Timestamps serialize as integer milliseconds since the epoch and field
/// names as camelCase — the stored snapshot keeps that shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageNote {
    pub id: Uuid,
    pub content: String,
    pub count: u32,
    pub comments: Vec<Comment>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl UsageNote {
    pub fn new(content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            count: 0,
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Computed, never stored: true once the note has been reused enough.
    pub fn is_confirmed(&self) -> bool {
        self.count >= CONFIRM_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_starts_unused() {
        let note = UsageNote::new("rsync -a for local backups".to_string());
        assert_eq!(note.count, 0);
        assert!(note.comments.is_empty());
        assert!(!note.is_confirmed());
    }

    #[test]
    fn confirmation_flips_exactly_at_threshold() {
        let mut note = UsageNote::new("x".to_string());
        for used in 1..=5u32 {
            note.count = used;
            assert_eq!(note.is_confirmed(), used >= CONFIRM_THRESHOLD);
        }
    }

    #[test]
    fn serialized_shape_uses_camel_case_and_epoch_millis() {
        let mut note = UsageNote::new("shape check".to_string());
        note.comments.push(Comment::new("memo".to_string()));

        let value = serde_json::to_value(&note).unwrap();
        assert!(value.get("createdAt").unwrap().is_i64());
        assert!(value.get("created_at").is_none());
        let comment = &value.get("comments").unwrap()[0];
        assert!(comment.get("createdAt").unwrap().is_i64());

        let back: UsageNote = serde_json::from_value(value).unwrap();
        assert_eq!(back.id, note.id);
        assert_eq!(
            back.created_at.timestamp_millis(),
            note.created_at.timestamp_millis()
        );
    }
}
