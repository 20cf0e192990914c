//! pisolino-core: tipi condivisi del client Pisolino (modelli, DTO HTTP, errori).
//! Niente I/O o dipendenze non compatibili con WASM.

pub mod models;
pub mod protocol;
pub mod error;
pub mod utils;

// Re-export utili per ridurre i percorsi nel crate client
pub use error::Error;
pub use models::{story::Story, story::StoryDraft, user::User};
pub use protocol::http::{
    AuthResponse, CreateStoryRequest, CreateStoryResponse, LoginCredentials, LoginRequest,
    MessageResponse, SignupCredentials, SignupRequest, StoriesResponse, UserResponse,
};
pub use utils::short_date;
