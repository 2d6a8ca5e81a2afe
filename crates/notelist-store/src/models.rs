//! Database models and the row/wire formatter.
//!
//! `NoteRow` maps one-to-one onto the snake_case columns of the
//! `notes` table. The conversions to and from `Note` are the only
//! place the snake_case/camelCase rename happens: a pure, total,
//! reversible mapping over the fixed 8-field set with no validation
//! and no computation.

use chrono::{DateTime, Utc};
use notelist_core::Note;
use sqlx::FromRow;

/// Database row for the `notes` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct NoteRow {
    pub note_id: i64,
    pub list_id: String,
    pub note_title: String,
    pub note_text: String,
    pub timestamp: DateTime<Utc>,
    pub priority: i32,
    pub deadline: Option<DateTime<Utc>>,
    pub complete: bool,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            note_id: row.note_id,
            list_id: row.list_id,
            note_title: row.note_title,
            note_text: row.note_text,
            timestamp: row.timestamp,
            priority: row.priority,
            deadline: row.deadline,
            complete: row.complete,
        }
    }
}

impl From<Note> for NoteRow {
    fn from(note: Note) -> Self {
        Self {
            note_id: note.note_id,
            list_id: note.list_id,
            note_title: note.note_title,
            note_text: note.note_text,
            timestamp: note.timestamp,
            priority: note.priority,
            deadline: note.deadline,
            complete: note.complete,
        }
    }
}
