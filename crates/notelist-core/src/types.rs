//! Note shapes for the wire and for validated write input.
//!
//! The external representation uses camelCase field names; the storage
//! layer's snake_case columns never appear here. Write inputs are
//! decoded with `deny_unknown_fields` and no defaults, so a request
//! must carry exactly the declared key set: a missing key, an extra
//! key, or a wrong-typed value all fail the decode as a whole.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A note as it appears on the wire, exactly 8 fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Storage-assigned identifier, immutable after creation.
    pub note_id: i64,
    /// Identifier of the list this note belongs to.
    pub list_id: String,
    pub note_title: String,
    pub note_text: String,
    pub timestamp: DateTime<Utc>,
    pub priority: i32,
    pub deadline: Option<DateTime<Utc>>,
    pub complete: bool,
}

/// Write input for creating a note: exactly 7 camelCase keys.
///
/// `deadline` must be present but may be null; every other key must be
/// present with the declared type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NoteDraft {
    pub list_id: String,
    pub note_title: String,
    pub note_text: String,
    pub timestamp: DateTime<Utc>,
    pub priority: i32,
    #[serde(deserialize_with = "required_nullable_datetime")]
    pub deadline: Option<DateTime<Utc>>,
    pub complete: bool,
}

/// Write input for updating a note: the draft set plus `noteId`.
///
/// `listId` and `timestamp` are part of the validated shape but are
/// never written back by the update.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NoteUpdate {
    pub note_id: i64,
    pub list_id: String,
    pub note_title: String,
    pub note_text: String,
    pub timestamp: DateTime<Utc>,
    pub priority: i32,
    #[serde(deserialize_with = "required_nullable_datetime")]
    pub deadline: Option<DateTime<Utc>>,
    pub complete: bool,
}

/// Deserialize an `Option<DateTime<Utc>>` while keeping the key
/// itself mandatory. Serde's implicit missing-field-to-None handling
/// for `Option` is disabled by `deserialize_with`, so absence of the
/// key is an error while an explicit null is accepted.
fn required_nullable_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DateTime<Utc>>::deserialize(deserializer)
}

/// A list identifier is valid when it contains no whitespace.
///
/// The identifier participates in query construction and URL paths, so
/// the check is deliberately strict: any whitespace character anywhere
/// rejects the whole identifier.
pub fn list_id_is_valid(list_id: &str) -> bool {
    !list_id.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_draft_body() -> serde_json::Value {
        json!({
            "listId": "test",
            "noteTitle": "T",
            "noteText": "x",
            "timestamp": "2022-04-16T14:06:00.000Z",
            "priority": 1,
            "deadline": "2022-04-18T17:30:00.000Z",
            "complete": false,
        })
    }

    #[test]
    fn draft_decodes_with_exactly_seven_keys() {
        let draft: NoteDraft = serde_json::from_value(valid_draft_body()).unwrap();
        assert_eq!(draft.list_id, "test");
        assert_eq!(draft.note_title, "T");
        assert_eq!(draft.priority, 1);
        assert!(draft.deadline.is_some());
        assert!(!draft.complete);
    }

    #[test]
    fn draft_accepts_null_deadline() {
        let mut body = valid_draft_body();
        body["deadline"] = serde_json::Value::Null;
        let draft: NoteDraft = serde_json::from_value(body).unwrap();
        assert_eq!(draft.deadline, None);
    }

    #[test]
    fn draft_rejects_missing_deadline_key() {
        let mut body = valid_draft_body();
        body.as_object_mut().unwrap().remove("deadline");
        assert!(serde_json::from_value::<NoteDraft>(body).is_err());
    }

    #[test]
    fn draft_rejects_missing_key() {
        for key in [
            "listId",
            "noteTitle",
            "noteText",
            "timestamp",
            "priority",
            "complete",
        ] {
            let mut body = valid_draft_body();
            body.as_object_mut().unwrap().remove(key);
            assert!(
                serde_json::from_value::<NoteDraft>(body).is_err(),
                "missing {key} should fail"
            );
        }
    }

    #[test]
    fn draft_rejects_extra_key() {
        let mut body = valid_draft_body();
        body["noteId"] = json!(42);
        assert!(serde_json::from_value::<NoteDraft>(body).is_err());
    }

    #[test]
    fn draft_rejects_wrong_types() {
        let mut body = valid_draft_body();
        body["noteTitle"] = json!(7);
        assert!(serde_json::from_value::<NoteDraft>(body).is_err());

        let mut body = valid_draft_body();
        body["complete"] = json!("false");
        assert!(serde_json::from_value::<NoteDraft>(body).is_err());

        let mut body = valid_draft_body();
        body["priority"] = json!(1.5);
        assert!(serde_json::from_value::<NoteDraft>(body).is_err());
    }

    #[test]
    fn draft_rejects_unparseable_timestamp() {
        let mut body = valid_draft_body();
        body["timestamp"] = json!("last tuesday");
        assert!(serde_json::from_value::<NoteDraft>(body).is_err());
    }

    #[test]
    fn draft_rejects_non_object_input() {
        assert!(serde_json::from_value::<NoteDraft>(json!("a note")).is_err());
        assert!(serde_json::from_value::<NoteDraft>(json!(null)).is_err());
    }

    #[test]
    fn update_requires_note_id() {
        let body = valid_draft_body();
        assert!(serde_json::from_value::<NoteUpdate>(body).is_err());

        let mut body = valid_draft_body();
        body["noteId"] = json!(3);
        let update: NoteUpdate = serde_json::from_value(body).unwrap();
        assert_eq!(update.note_id, 3);
    }

    #[test]
    fn update_rejects_extra_key() {
        let mut body = valid_draft_body();
        body["noteId"] = json!(3);
        body["owner"] = json!("me");
        assert!(serde_json::from_value::<NoteUpdate>(body).is_err());
    }

    #[test]
    fn note_serializes_as_camel_case() {
        let note = Note {
            note_id: 1,
            list_id: "test".into(),
            note_title: "T".into(),
            note_text: "x".into(),
            timestamp: "2022-04-16T14:06:00Z".parse().unwrap(),
            priority: 1,
            deadline: None,
            complete: false,
        };
        let value = serde_json::to_value(&note).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        for key in [
            "noteId",
            "listId",
            "noteTitle",
            "noteText",
            "timestamp",
            "priority",
            "deadline",
            "complete",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(value["deadline"], serde_json::Value::Null);
    }

    #[test]
    fn list_id_whitespace_rules() {
        assert!(list_id_is_valid("test"));
        assert!(list_id_is_valid("shopping-list_2"));
        assert!(!list_id_is_valid("two words"));
        assert!(!list_id_is_valid("tab\there"));
        assert!(!list_id_is_valid("trailing "));
        assert!(!list_id_is_valid("new\nline"));
        // Empty contains no whitespace, so it passes this check.
        assert!(list_id_is_valid(""));
    }
}
