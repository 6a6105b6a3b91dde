use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{PlaybackState, WatchRoom},
};

use super::WatchRoomStore;

#[derive(Default)]
struct Rooms {
    rooms: HashMap<Uuid, WatchRoom>,
    playback: HashMap<Uuid, PlaybackState>,
}

/// Watch-room store kept in process memory
#[derive(Clone, Default)]
pub struct InMemoryWatchRooms {
    inner: Arc<RwLock<Rooms>>,
}

impl InMemoryWatchRooms {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl WatchRoomStore for InMemoryWatchRooms {
    async fn insert_room(&self, room: &WatchRoom) -> AppResult<()> {
        self.inner.write().await.rooms.insert(room.id, room.clone());
        Ok(())
    }

    async fn get_room(&self, room_id: Uuid) -> AppResult<Option<WatchRoom>> {
        Ok(self.inner.read().await.rooms.get(&room_id).cloned())
    }

    async fn get_playback(&self, room_id: Uuid) -> AppResult<Option<PlaybackState>> {
        Ok(self.inner.read().await.playback.get(&room_id).cloned())
    }

    async fn upsert_playback(&self, state: &PlaybackState) -> AppResult<PlaybackState> {
        self.inner
            .write()
            .await
            .playback
            .insert(state.room_id, state.clone());
        Ok(state.clone())
    }
}
