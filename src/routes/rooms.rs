use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::CallerId,
    models::{CreateRoomRequest, PlaybackState, PlaybackUpdate, WatchRoom},
    routes::AppState,
};

/// Opens a watch-room hosted by the caller
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    CallerId(caller): CallerId,
    Json(request): Json<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<WatchRoom>)> {
    let room = state.watch_rooms.create_room(caller, request).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// Polled by room members
pub async fn get_playback(
    State(state): State<Arc<AppState>>,
    _caller: CallerId,
    Path(room_id): Path<Uuid>,
) -> AppResult<Json<PlaybackState>> {
    let playback = state.watch_rooms.playback(room_id).await?;
    Ok(Json(playback))
}

/// Host push of the shared playback position
pub async fn sync_playback(
    State(state): State<Arc<AppState>>,
    CallerId(caller): CallerId,
    Path(room_id): Path<Uuid>,
    Json(update): Json<PlaybackUpdate>,
) -> AppResult<Json<PlaybackState>> {
    let playback = state.watch_rooms.sync(room_id, caller, update).await?;
    Ok(Json(playback))
}
