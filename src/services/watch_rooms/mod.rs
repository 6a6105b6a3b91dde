//! Watch-room playback synchronization
//!
//! The host owns the shared playback position. Each host push is a
//! single-row upsert of `{current_time, is_playing}`; members poll it.
//! There is no merging of concurrent writes: the last write wins.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{CreateRoomRequest, PlaybackState, PlaybackUpdate, WatchRoom},
};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryWatchRooms;
pub use postgres::PostgresWatchRooms;

/// Persistence for rooms and their playback state
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WatchRoomStore: Send + Sync {
    async fn insert_room(&self, room: &WatchRoom) -> AppResult<()>;

    async fn get_room(&self, room_id: Uuid) -> AppResult<Option<WatchRoom>>;

    async fn get_playback(&self, room_id: Uuid) -> AppResult<Option<PlaybackState>>;

    /// Inserts or replaces the playback row of `state.room_id`
    async fn upsert_playback(&self, state: &PlaybackState) -> AppResult<PlaybackState>;
}

#[derive(Clone)]
pub struct WatchRoomService {
    store: Arc<dyn WatchRoomStore>,
}

impl WatchRoomService {
    pub fn new(store: Arc<dyn WatchRoomStore>) -> Self {
        Self { store }
    }

    /// Opens a room hosted by `host_id`
    pub async fn create_room(
        &self,
        host_id: Uuid,
        request: CreateRoomRequest,
    ) -> AppResult<WatchRoom> {
        let room = WatchRoom::new(request.validated_name()?, host_id);
        self.store.insert_room(&room).await?;

        tracing::info!(room_id = %room.id, host_id = %host_id, "Watch room created");

        Ok(room)
    }

    /// Current playback of a room; idle if the host never synced
    pub async fn playback(&self, room_id: Uuid) -> AppResult<PlaybackState> {
        self.require_room(room_id).await?;

        Ok(self
            .store
            .get_playback(room_id)
            .await?
            .unwrap_or_else(|| PlaybackState::idle(room_id)))
    }

    /// Applies a host push to the shared playback
    pub async fn sync(
        &self,
        room_id: Uuid,
        caller_id: Uuid,
        update: PlaybackUpdate,
    ) -> AppResult<PlaybackState> {
        let room = self.require_room(room_id).await?;

        if !room.is_host(caller_id) {
            tracing::warn!(
                room_id = %room_id,
                caller_id = %caller_id,
                "Rejected playback sync from non-host"
            );
            return Err(AppError::Forbidden(
                "Only the host can control playback".to_string(),
            ));
        }

        update.validate()?;

        let state = self.store.upsert_playback(&update.into_state(room_id)).await?;

        tracing::debug!(
            room_id = %room_id,
            current_time = state.current_time,
            is_playing = state.is_playing,
            "Playback synced"
        );

        Ok(state)
    }

    async fn require_room(&self, room_id: Uuid) -> AppResult<WatchRoom> {
        self.store
            .get_room(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Watch room {} not found", room_id)))
    }
}
