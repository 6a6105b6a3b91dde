use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// A watch-room; only its host may move the shared playback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct WatchRoom {
    pub id: Uuid,
    pub name: String,
    pub host_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl WatchRoom {
    pub fn new(name: String, host_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            host_id,
            created_at: Utc::now(),
        }
    }

    pub fn is_host(&self, user_id: Uuid) -> bool {
        self.host_id == user_id
    }
}

/// Shared playback position of a room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct PlaybackState {
    pub room_id: Uuid,
    /// Seconds from the start of the movie
    #[sqlx(rename = "position_secs")]
    pub current_time: f64,
    pub is_playing: bool,
    /// `None` until the host syncs for the first time
    pub updated_at: Option<DateTime<Utc>>,
}

impl PlaybackState {
    /// State reported for a room the host has never synced
    pub fn idle(room_id: Uuid) -> Self {
        Self {
            room_id,
            current_time: 0.0,
            is_playing: false,
            updated_at: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
}

impl CreateRoomRequest {
    /// Returns the trimmed room name
    pub fn validated_name(&self) -> AppResult<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput(
                "Room name must not be empty".to_string(),
            ));
        }
        Ok(name.to_string())
    }
}

/// Host push of the current playback position
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlaybackUpdate {
    pub current_time: f64,
    pub is_playing: bool,
}

impl PlaybackUpdate {
    pub fn validate(&self) -> AppResult<()> {
        if !self.current_time.is_finite() || self.current_time < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "current_time must be a non-negative number of seconds, got {}",
                self.current_time
            )));
        }
        Ok(())
    }

    pub fn into_state(self, room_id: Uuid) -> PlaybackState {
        PlaybackState {
            room_id,
            current_time: self.current_time,
            is_playing: self.is_playing,
            updated_at: Some(Utc::now()),
        }
    }
}
