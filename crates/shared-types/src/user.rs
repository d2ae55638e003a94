use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AppError, EMPTY_USER_ID};

/// A user-chosen account identifier.
///
/// Always trimmed and never empty; the only way to build one is
/// [`UserId::parse`]. No other format rules are enforced client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Trim the raw input and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation(EMPTY_USER_ID));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    pub user_id: String,
}

impl From<&UserId> for CreateUserRequest {
    fn from(id: &UserId) -> Self {
        Self {
            user_id: id.as_str().to_string(),
        }
    }
}

/// The part of a failing create-user response the client reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Pull the `error` string out of an already-decoded response body.
    ///
    /// Bodies that are not objects, or whose `error` is not a string,
    /// yield `None`.
    pub fn message_from(body: &serde_json::Value) -> Option<String> {
        if !body.is_object() {
            return None;
        }
        serde_json::from_value::<Self>(body.clone())
            .ok()
            .and_then(|b| b.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use serde_json::json;

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let id = UserId::parse("  alice \n").unwrap();
        assert_eq!(id.as_str(), "alice");
    }

    #[test]
    fn parse_keeps_inner_whitespace() {
        let id = UserId::parse(" vintage collector ").unwrap();
        assert_eq!(id.as_str(), "vintage collector");
    }

    #[test]
    fn parse_rejects_empty_and_whitespace() {
        for raw in ["", " ", "\t\n  "] {
            let err = UserId::parse(raw).unwrap_err();
            assert_eq!(err.kind, AppErrorKind::ValidationError);
            assert_eq!(err.message, "Please enter a user ID");
        }
    }

    #[test]
    fn request_serializes_as_user_id_object() {
        let id = UserId::parse(" john_collector ").unwrap();
        let body = serde_json::to_value(CreateUserRequest::from(&id)).unwrap();
        assert_eq!(body, json!({ "user_id": "john_collector" }));
    }

    #[test]
    fn user_id_serializes_transparently() {
        let id = UserId::parse("bob").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"bob\"");
    }

    #[test]
    fn error_message_read_from_object() {
        let body = json!({ "error": "db down", "code": 500 });
        assert_eq!(ApiErrorBody::message_from(&body).as_deref(), Some("db down"));
    }

    #[test]
    fn error_message_missing_or_wrong_shape() {
        assert_eq!(ApiErrorBody::message_from(&json!({})), None);
        assert_eq!(ApiErrorBody::message_from(&json!({ "error": 42 })), None);
        assert_eq!(ApiErrorBody::message_from(&json!(["error"])), None);
        assert_eq!(ApiErrorBody::message_from(&json!(null)), None);
    }
}
