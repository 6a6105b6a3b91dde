pub mod catalog;
pub mod diversity;
pub mod genres;
pub mod onboarding;
pub mod watch_rooms;

pub use diversity::{DiversitySelector, SelectionPolicy};
pub use onboarding::OnboardingService;
pub use watch_rooms::WatchRoomService;
