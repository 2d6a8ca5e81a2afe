//! Test and development seeding.
//!
//! Re-applies the schema, empties the table, and inserts the given
//! drafts in order, so `note_id` assignment restarts from 1 on every
//! run.

use chrono::{DateTime, Utc};
use notelist_core::NoteDraft;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::schema;

/// Reset the notes table and populate it with the given drafts.
pub async fn seed(pool: &PgPool, notes: &[NoteDraft]) -> StoreResult<()> {
    schema::run_migrations(pool).await?;

    sqlx::query("TRUNCATE notes RESTART IDENTITY")
        .execute(pool)
        .await?;

    for draft in notes {
        sqlx::query(
            r#"
            INSERT INTO notes (list_id, note_title, note_text, "timestamp", priority, deadline, complete)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&draft.list_id)
        .bind(&draft.note_title)
        .bind(&draft.note_text)
        .bind(draft.timestamp)
        .bind(draft.priority)
        .bind(draft.deadline)
        .bind(draft.complete)
        .execute(pool)
        .await?;
    }

    tracing::info!(count = notes.len(), "Seeded notes table");

    Ok(())
}

fn at(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

/// Four sample notes across two lists, used by the integration tests.
pub fn sample_notes() -> Vec<NoteDraft> {
    vec![
        NoteDraft {
            list_id: "test".into(),
            note_title: "Water the plants".into(),
            note_text: "The ones on the balcony first".into(),
            timestamp: at(1_649_001_286_757),
            priority: 1,
            deadline: Some(at(1_650_150_000_000)),
            complete: false,
        },
        NoteDraft {
            list_id: "test".into(),
            note_title: "Book dentist appointment".into(),
            note_text: "Ask about the evening slots".into(),
            timestamp: at(1_629_001_286_757),
            priority: 2,
            deadline: Some(at(1_690_150_000_000)),
            complete: false,
        },
        NoteDraft {
            list_id: "another".into(),
            note_title: "Renew passport".into(),
            note_text: "Photos are in the top drawer".into(),
            timestamp: at(1_629_001_286_757),
            priority: 2,
            deadline: Some(at(1_690_150_000_000)),
            complete: false,
        },
        NoteDraft {
            list_id: "another".into(),
            note_title: "Return library books".into(),
            note_text: "Due at the end of the month".into(),
            timestamp: at(1_619_001_286_757),
            priority: 2,
            deadline: Some(at(1_790_150_000_000)),
            complete: true,
        },
    ]
}
