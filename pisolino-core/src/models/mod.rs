pub mod story;
pub mod user;

// Re-export per comodità
pub use story::{Story, StoryDraft};
pub use user::User;
