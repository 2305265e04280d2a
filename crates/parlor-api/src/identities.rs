use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use parlor_types::api::RegisterIdentityRequest;
use parlor_types::models::Identity;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{Payload, path_id};

pub async fn list_identities(State(state): State<AppState>) -> Json<Vec<Identity>> {
    Json(state.store.registry().list())
}

pub async fn get_identity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Identity>, ApiError> {
    let id = path_id(&id)?;
    Ok(Json(state.store.registry().get_by_id(id)?))
}

pub async fn register_identity(
    State(state): State<AppState>,
    Payload(req): Payload<RegisterIdentityRequest>,
) -> Result<Json<Identity>, ApiError> {
    let identity = state.store.registry().register(
        req.nickname.as_deref().unwrap_or_default(),
        req.avatar.as_deref().unwrap_or_default(),
    )?;

    info!("Nickname {} joined (id {})", identity.nickname, identity.id);
    Ok(Json(identity))
}

pub async fn delete_identity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = path_id(&id)?;
    state.store.registry().delete_by_id(id)?;

    info!("Nickname id {} removed", id);
    Ok("Nickname deleted.")
}
