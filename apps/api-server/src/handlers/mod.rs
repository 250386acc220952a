//! HTTP controllers and route configuration.

mod posts;

use actix_web::web;

pub use posts::PostController;

/// Prefix every controller is mounted under.
pub const API_PREFIX: &str = "/api";

/// A resource exposing a set of routes.
pub trait Controller: Sync {
    /// Resource path, relative to [`API_PREFIX`].
    fn path(&self) -> &'static str;

    /// Register this resource's routes.
    fn routes(&self, cfg: &mut web::ServiceConfig);
}

/// Every controller the server mounts.
pub static CONTROLLERS: &[&dyn Controller] = &[&PostController];

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(API_PREFIX).configure(|api| {
        for controller in CONTROLLERS {
            tracing::debug!(path = %controller.path(), "Mounting controller");
            controller.routes(api);
        }
    }));
}
