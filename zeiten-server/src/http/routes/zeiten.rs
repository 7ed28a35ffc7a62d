//! Zeit endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::db::Zeit;
use crate::http::error::ApiError;
use crate::http::extractors::LenientJson;
use crate::http::server::AppState;
use crate::models::ZeitInput;

const SAVED: &str = "Termin erfolgreich gespeichert!";
const SAVE_FAILED: &str = "Interner Serverfehler beim Speichern.";

/// Create zeit request
///
/// `zeit` is taken as any JSON value; scalars are handed to the store as text.
#[derive(Debug, Default, Deserialize)]
pub struct CreateZeitRequest {
    #[serde(default)]
    pub zeit: Option<Value>,
}

/// Zeit response
#[derive(Debug, Serialize)]
pub struct ZeitResponse {
    pub id: i32,
    pub zeit: String,
}

impl From<Zeit> for ZeitResponse {
    fn from(z: Zeit) -> Self {
        Self {
            id: z.id,
            zeit: z.zeit.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// Response to a successful create
#[derive(Debug, Serialize)]
pub struct CreateZeitResponse {
    pub message: &'static str,
    pub id: i32,
    pub data: ZeitResponse,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// GET /api/zeiten - all zeiten, earliest first
#[instrument(skip(state))]
async fn list_zeiten(
    State(state): State<AppState>,
) -> Result<Json<Vec<ZeitResponse>>, ApiError> {
    let rows = state.store.list_zeiten().await?;
    Ok(Json(rows.into_iter().map(ZeitResponse::from).collect()))
}

/// POST /api/zeiten - store one zeit
#[instrument(skip(state, req))]
async fn create_zeit(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<CreateZeitRequest>,
) -> Result<(StatusCode, Json<CreateZeitResponse>), ApiError> {
    tracing::debug!(zeit = ?req.zeit, "api zeiten");
    let zeit = ZeitInput::new(req.zeit)?;

    let row = state
        .store
        .create_zeit(&zeit)
        .await
        .map_err(ApiError::opaque(SAVE_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateZeitResponse {
            message: SAVED,
            id: row.id,
            data: ZeitResponse::from(row),
        }),
    ))
}

/// DELETE /zeiten/{id} - succeeds whether or not the id existed
#[instrument(skip(state))]
async fn delete_zeit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let removed = state.store.delete_zeit(&id).await?;
    if removed == 0 {
        tracing::debug!("no zeit matched");
    }
    Ok(Json(DeleteResponse { success: true }))
}

/// Zeit routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/zeiten", get(list_zeiten).post(create_zeit))
        .route("/zeiten/{id}", delete(delete_zeit))
}
