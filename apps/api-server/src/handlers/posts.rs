//! Post handlers.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use inkwell_core::domain::Post;
use inkwell_shared::CreatePostRequest;

use super::Controller;
use crate::middleware::body::RequestBody;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Client-facing message for every failed creation.
pub const CANNOT_CREATE_POST: &str = "Cannot create post.";

pub struct PostController;

impl Controller for PostController {
    fn path(&self) -> &'static str {
        "/posts"
    }

    fn routes(&self, cfg: &mut web::ServiceConfig) {
        cfg.route(self.path(), web::post().to(create));
    }
}

#[derive(Serialize)]
pub struct PostResponse {
    pub post: Post,
}

/// POST /api/posts
pub async fn create(state: web::Data<AppState>, body: RequestBody) -> AppResult<HttpResponse> {
    let request =
        CreatePostRequest::from_value(&body.into_inner()).map_err(AppError::Validation)?;

    let post = state
        .posts
        .create(request.title, request.body)
        .await
        .map_err(|_| AppError::bad_request(CANNOT_CREATE_POST))?;

    Ok(HttpResponse::Created().json(PostResponse { post }))
}
