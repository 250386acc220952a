//! Stored document shapes.

pub mod post;
