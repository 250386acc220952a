//! Body parsers - JSON and URL-encoded request bodies.

use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, http::StatusCode, web};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use super::error::AppError;

/// Largest accepted request body.
pub const BODY_LIMIT: usize = 100 * 1024;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(|err, _req| json_error(err).into())
}

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(|err, _req| form_error(err).into())
}

fn json_error(err: JsonPayloadError) -> AppError {
    match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            AppError::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large.")
        }
        JsonPayloadError::Payload(e) => AppError::Internal(e.to_string()),
        other => AppError::Validation(vec![other.to_string()]),
    }
}

fn form_error(err: UrlencodedError) -> AppError {
    match err {
        UrlencodedError::Overflow { .. } => {
            AppError::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large.")
        }
        UrlencodedError::Payload(e) => AppError::Internal(e.to_string()),
        other => AppError::Validation(vec![other.to_string()]),
    }
}

/// Untyped request body: a JSON value, or a URL-encoded form turned into a
/// JSON object of strings.
#[derive(Debug, Clone)]
pub struct RequestBody(pub Value);

impl RequestBody {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl FromRequest for RequestBody {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.content_type() == FORM_CONTENT_TYPE {
            let form = web::Form::<HashMap<String, String>>::from_request(req, payload);
            Box::pin(async move {
                let fields: Map<String, Value> = form
                    .await?
                    .into_inner()
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect();
                Ok(RequestBody(Value::Object(fields)))
            })
        } else {
            let json = web::Json::<Value>::from_request(req, payload);
            Box::pin(async move { Ok(RequestBody(json.await?.into_inner())) })
        }
    }
}
