//! # Inkwell Shared
//!
//! Request and response types shared by the API and its clients.

pub mod dto;
pub mod response;

pub use dto::CreatePostRequest;
pub use response::ErrorResponse;
