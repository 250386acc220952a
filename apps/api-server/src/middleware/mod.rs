//! Middleware modules.

pub mod body;
pub mod error;
pub mod security;
