//! Application assembly - middleware chain, body parsers, and routes.

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Compress,
    web,
};
use tracing_actix_web::TracingLogger;

use crate::handlers;
use crate::middleware::{body, error, security};
use crate::state::AppState;

/// Build the application.
///
/// Middleware run in this order on the way in: security headers, CORS,
/// request logging, compression. The last `wrap` is the outermost.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Compress::default())
        .wrap(TracingLogger::default())
        .wrap(security::cors())
        .wrap(security::security_headers())
        .app_data(web::Data::new(state))
        .app_data(body::json_config())
        .app_data(body::form_config())
        .configure(handlers::configure_routes)
        .default_service(web::to(error::not_found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Arc;

    use inkwell_core::RepoError;
    use inkwell_core::domain::{NewPost, Post};
    use inkwell_core::ports::PostRepository;
    use inkwell_infra::InMemoryPostRepository;

    struct FailingRepository;

    #[async_trait]
    impl PostRepository for FailingRepository {
        async fn insert(&self, _post: NewPost) -> Result<Post, RepoError> {
            Err(RepoError::Connection("server selection timeout".to_string()))
        }
    }

    fn create_request(body: Value) -> actix_web::test::TestRequest {
        test::TestRequest::post().uri("/api/posts").set_json(body)
    }

    #[actix_rt::test]
    async fn test_create_post() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test::init_service(build_app(AppState::with_repository(repo.clone()))).await;

        let resp = test::call_service(
            &app,
            create_request(json!({ "title": "Hello", "body": "World" })).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        let post = &body["post"];
        assert_eq!(post["title"], "Hello");
        assert_eq!(post["body"], "World");
        assert!(post["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(post["createdAt"], post["updatedAt"]);
        assert_eq!(repo.len().await, 1);
    }

    #[actix_rt::test]
    async fn test_same_request_twice_creates_two_posts() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test::init_service(build_app(AppState::with_repository(repo.clone()))).await;

        let mut ids = Vec::new();
        for _ in 0..2 {
            let resp = test::call_service(
                &app,
                create_request(json!({ "title": "Hello", "body": "World" })).to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let body: Value = test::read_body_json(resp).await;
            ids.push(body["post"]["id"].clone());
        }

        assert_ne!(ids[0], ids[1]);
        assert_eq!(repo.len().await, 2);
    }

    #[actix_rt::test]
    async fn test_invalid_bodies_are_rejected() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test::init_service(build_app(AppState::with_repository(repo.clone()))).await;

        let bodies = [
            json!({}),
            json!({ "title": "Hello" }),
            json!({ "body": "World" }),
            json!({ "title": "", "body": "World" }),
            json!({ "title": "Hello", "body": "" }),
            json!({ "title": 1, "body": "World" }),
        ];

        for body in bodies {
            let resp = test::call_service(&app, create_request(body.clone()).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
        }

        assert!(repo.is_empty().await);
    }

    #[actix_rt::test]
    async fn test_validation_message_names_both_fields() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test::init_service(build_app(AppState::with_repository(repo))).await;

        let resp =
            test::call_service(&app, create_request(json!({ "title": "" })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("title"));
        assert!(message.contains("body"));
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(2));
    }

    #[actix_rt::test]
    async fn test_persistence_failure_is_generic_bad_request() {
        let app = test::init_service(build_app(AppState::with_repository(Arc::new(
            FailingRepository,
        ))))
        .await;

        let resp = test::call_service(
            &app,
            create_request(json!({ "title": "Hello", "body": "World" })).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": 400, "message": "Cannot create post." }));
    }

    #[actix_rt::test]
    async fn test_form_body_is_accepted() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test::init_service(build_app(AppState::with_repository(repo.clone()))).await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_form([("title", "Hello"), ("body", "World")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(repo.len().await, 1);
    }

    #[actix_rt::test]
    async fn test_malformed_json_is_bad_request() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test::init_service(build_app(AppState::with_repository(repo.clone()))).await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(header::ContentType::json())
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(repo.is_empty().await);
    }

    #[actix_rt::test]
    async fn test_unknown_route_is_not_found() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test::init_service(build_app(AppState::with_repository(repo))).await;

        let req = test::TestRequest::get().uri("/api/comments").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
    }

    #[actix_rt::test]
    async fn test_security_and_cors_headers() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test::init_service(build_app(AppState::with_repository(repo))).await;

        let req = create_request(json!({ "title": "Hello", "body": "World" }))
            .insert_header((header::ORIGIN, "http://example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let headers = resp.headers();
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("x-frame-options").unwrap(), "SAMEORIGIN");
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
