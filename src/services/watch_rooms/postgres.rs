use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{PlaybackState, WatchRoom},
};

use super::WatchRoomStore;

/// Watch-room store backed by `watch_rooms` and `watch_room_playback`
#[derive(Clone)]
pub struct PostgresWatchRooms {
    db_pool: PgPool,
}

impl PostgresWatchRooms {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait::async_trait]
impl WatchRoomStore for PostgresWatchRooms {
    async fn insert_room(&self, room: &WatchRoom) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO watch_rooms (id, name, host_id, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(room.id)
        .bind(&room.name)
        .bind(room.host_id)
        .bind(room.created_at)
        .execute(&self.db_pool)
        .await?;

        Ok(())
    }

    async fn get_room(&self, room_id: Uuid) -> AppResult<Option<WatchRoom>> {
        let room = sqlx::query_as::<_, WatchRoom>(
            r#"
            SELECT id, name, host_id, created_at
            FROM watch_rooms
            WHERE id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(room)
    }

    async fn get_playback(&self, room_id: Uuid) -> AppResult<Option<PlaybackState>> {
        let state = sqlx::query_as::<_, PlaybackState>(
            r#"
            SELECT room_id, position_secs, is_playing, updated_at
            FROM watch_room_playback
            WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(state)
    }

    async fn upsert_playback(&self, state: &PlaybackState) -> AppResult<PlaybackState> {
        let stored = sqlx::query_as::<_, PlaybackState>(
            r#"
            INSERT INTO watch_room_playback (room_id, position_secs, is_playing, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (room_id) DO UPDATE
            SET position_secs = EXCLUDED.position_secs,
                is_playing = EXCLUDED.is_playing,
                updated_at = EXCLUDED.updated_at
            RETURNING room_id, position_secs, is_playing, updated_at
            "#,
        )
        .bind(state.room_id)
        .bind(state.current_time)
        .bind(state.is_playing)
        .bind(state.updated_at)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(stored)
    }
}
