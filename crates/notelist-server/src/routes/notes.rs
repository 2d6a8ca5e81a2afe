//! Notes CRUD routes.
//!
//! Handlers are thin: they translate path/query/body parts into
//! data-access calls and map the result to a status code. All
//! validation lives in the store.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use notelist_core::Note;
use notelist_store::StoreError;

use crate::error::{ApiError, ApiResult};
use crate::routes::method_not_allowed;
use crate::state::AppState;

/// Query parameters for listing notes.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Sort direction token (`asc` or `desc`).
    pub order: Option<String>,
    /// Sort key token (`note`, `date`, `title`, `deadline`, `priority`).
    pub order_by: Option<String>,
}

/// Response for GET /api/notes/{list_id}.
#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
}

/// Response for POST and PATCH on /api/notes/{list_id}.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub note: Note,
}

/// Pull the `note` payload out of a `{"note": {...}}` request body.
///
/// A body that is not JSON, or has no `note` key, is an invalid note
/// shape like any other.
fn note_payload(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    let Json(value) = body.map_err(|_| StoreError::InvalidNoteFormat)?;
    value
        .get("note")
        .cloned()
        .ok_or_else(|| StoreError::InvalidNoteFormat.into())
}

/// GET /api/notes/{list_id} - List notes, ordered per query params.
///
/// # Response
///
/// - 200 OK: `{ "notes": [...] }`
/// - 400 Bad Request: sort token outside the whitelist, or list id
///   containing whitespace
async fn list_notes(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<NotesResponse>> {
    let notes = state
        .store()
        .select_all_notes_by_list_id(&list_id, query.order_by.as_deref(), query.order.as_deref())
        .await?;

    Ok(Json(NotesResponse { notes }))
}

/// POST /api/notes/{list_id} - Create a note.
///
/// The note's list membership comes from the body's `listId`; the
/// path segment only routes the request.
///
/// # Response
///
/// - 201 Created: `{ "note": {...} }` with the assigned `noteId`
/// - 400 Bad Request: body is not exactly the 7-key note shape
async fn create_note(
    State(state): State<AppState>,
    Path(_list_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let note = state.store().insert_new_note(note_payload(body)?).await?;

    Ok((StatusCode::CREATED, Json(NoteResponse { note })))
}

/// PATCH /api/notes/{list_id} - Update a note in place.
///
/// # Response
///
/// - 201 Created: `{ "note": {...} }` with the updated fields
/// - 400 Bad Request: body is not exactly the 8-key note shape
/// - 404 Not Found: no note with the given `noteId`
async fn update_note(
    State(state): State<AppState>,
    Path(_list_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let note = state.store().patch_note(note_payload(body)?).await?;

    Ok((StatusCode::CREATED, Json(NoteResponse { note })))
}

/// DELETE /api/notes/{list_id}/{note_id} - Delete a note.
///
/// A non-numeric `note_id` segment surfaces as 404, the same as a
/// missing row; malformed delete input and not-found are deliberately
/// indistinguishable to the caller.
///
/// # Response
///
/// - 204 No Content: the row matching both identifiers was removed
/// - 404 Not Found: no such row, or malformed `note_id`
async fn remove_note(
    State(state): State<AppState>,
    Path((list_id, note_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let note_id: i64 = note_id
        .parse()
        .map_err(|_| ApiError::from(StoreError::NoteNotFound))?;

    state.store().delete_note(note_id, &list_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Build notes routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/notes/{list_id}",
            get(list_notes)
                .post(create_note)
                .patch(update_note)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/notes/{list_id}/{note_id}",
            delete(remove_note).fallback(method_not_allowed),
        )
}
