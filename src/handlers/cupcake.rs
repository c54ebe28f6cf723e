//! Cupcake CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::response::{cupcake_created, cupcake_ok, cupcakes_ok, message_ok};
use crate::service::CupcakeValidator;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde_json::Value;

/// Ids that are not integers cannot name a record, so they are reported as not found.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(format!("cupcake {}", id_str)))
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("cupcake {}", id))
}

/// GET /api/cupcakes
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cupcakes = state.store.list().await?;
    Ok(cupcakes_ok(cupcakes))
}

/// POST /api/cupcakes
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let input = CupcakeValidator::validate(body)?;
    let cupcake = state.store.insert(&input).await?;
    tracing::info!(id = cupcake.id, flavor = %cupcake.flavor, "cupcake created");
    Ok(cupcake_created(cupcake))
}

/// GET /api/cupcakes/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let cupcake = state.store.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(cupcake_ok(cupcake))
}

/// PATCH /api/cupcakes/:id. Overwrites every field; there is no partial update.
/// An unknown id is reported as not found even when the body is also invalid.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<ApiJson<Value>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let input = match body.and_then(|ApiJson(body)| CupcakeValidator::validate(body)) {
        Ok(input) => input,
        Err(e) => {
            if state.store.get(id).await?.is_none() {
                return Err(not_found(id));
            }
            return Err(e);
        }
    };
    let cupcake = state.store.update(id, &input).await?.ok_or_else(|| not_found(id))?;
    tracing::info!(id, "cupcake updated");
    Ok(cupcake_ok(cupcake))
}

/// DELETE /api/cupcakes/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "cupcake deleted");
    Ok(message_ok("Deleted"))
}
