//! Verein endpoints

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::db::Verein;
use crate::http::error::ApiError;
use crate::http::extractors::LenientJson;
use crate::http::server::AppState;
use crate::models::to_param_text;

const CREATE_FAILED: &str = "Fehler beim Anlegen des Vereins";

/// Create verein request
#[derive(Debug, Default, Deserialize)]
pub struct CreateVereinRequest {
    #[serde(default)]
    pub vereinsname: Option<Value>,
}

/// Verein response
#[derive(Debug, Serialize)]
pub struct VereinResponse {
    pub id: i32,
    pub vereinsname: Option<String>,
}

impl From<Verein> for VereinResponse {
    fn from(v: Verein) -> Self {
        Self {
            id: v.id,
            vereinsname: v.vereinsname,
        }
    }
}

/// POST /api/vereine - create a club
///
/// Answers 200, not 201, with the inserted record.
#[instrument(skip(state, req))]
async fn create_verein(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<CreateVereinRequest>,
) -> Result<Json<VereinResponse>, ApiError> {
    let name = to_param_text(req.vereinsname);
    let verein = state
        .store
        .create_verein(name.as_deref())
        .await
        .map_err(ApiError::opaque(CREATE_FAILED))?;

    Ok(Json(VereinResponse::from(verein)))
}

/// Verein routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/vereine", post(create_verein))
}
