pub mod movie;
pub mod watch_room;

pub use movie::{Candidate, CandidateRow, MovieId, MovieSummary};
pub use watch_room::{CreateRoomRequest, PlaybackState, PlaybackUpdate, WatchRoom};
