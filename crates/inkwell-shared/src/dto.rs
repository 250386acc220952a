//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

const NOT_AN_OBJECT: &str = "request body must be an object";

/// Request to create a post, after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
}

/// Raw shape of a create request before the rules have run.
#[derive(Debug, Validate)]
struct CreatePostDraft {
    #[validate(
        required(message = "\"title\" is required"),
        length(min = 1, message = "\"title\" is not allowed to be empty")
    )]
    title: Option<String>,
    #[validate(
        required(message = "\"body\" is required"),
        length(min = 1, message = "\"body\" is not allowed to be empty")
    )]
    body: Option<String>,
}

impl CreatePostRequest {
    const FIELDS: [&'static str; 2] = ["title", "body"];

    /// Check an untyped request body.
    ///
    /// Every failing field is reported, `title` before `body`. Unknown keys
    /// are ignored.
    pub fn from_value(value: &Value) -> Result<Self, Vec<String>> {
        let Some(map) = value.as_object() else {
            return Err(vec![NOT_AN_OBJECT.to_string()]);
        };

        let mut wrong_type = Vec::new();
        let draft = CreatePostDraft {
            title: string_field(map, "title", &mut wrong_type),
            body: string_field(map, "body", &mut wrong_type),
        };

        let validation = draft.validate().err().unwrap_or_else(ValidationErrors::new);
        let field_errors = validation.field_errors();

        let mut errors = Vec::new();
        for field in Self::FIELDS {
            if wrong_type.contains(&field) {
                errors.push(format!("\"{field}\" must be a string"));
                continue;
            }
            if let Some(failures) = field_errors.get(field) {
                errors.extend(failures.iter().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("\"{field}\" is invalid"))
                }));
            }
        }

        match (draft.title, draft.body) {
            (Some(title), Some(body)) if errors.is_empty() => Ok(Self { title, body }),
            _ => Err(errors),
        }
    }
}

/// Missing and null both count as absent; any other non-string is recorded
/// in `wrong_type`.
fn string_field(
    map: &Map<String, Value>,
    field: &'static str,
    wrong_type: &mut Vec<&'static str>,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            wrong_type.push(field);
            None
        }
    }
}
