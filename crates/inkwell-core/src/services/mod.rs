//! Domain services - operations composed over the ports.

mod post_service;

pub use post_service::PostService;
