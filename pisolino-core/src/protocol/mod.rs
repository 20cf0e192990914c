pub mod http;

// Re-export comodi
pub use http::{
    AuthResponse, CreateStoryRequest, CreateStoryResponse, LoginCredentials, LoginRequest,
    MessageResponse, SignupCredentials, SignupRequest, StoriesResponse, UserResponse,
};
