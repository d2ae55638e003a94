use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown when neither the server nor the transport supplied one.
pub const CREATE_USER_FALLBACK: &str = "Failed to create user";

/// Message shown when the user submits an empty identifier.
pub const EMPTY_USER_ID: &str = "Please enter a user ID";

/// Categorization of onboarding errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// Input rejected before any request was made.
    ValidationError,
    /// The backend answered with a non-2xx status other than 409.
    ServerError,
    /// The request never completed, or the response body was not JSON.
    TransportError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
            AppErrorKind::TransportError => write!(f, "TransportError"),
        }
    }
}

/// Structured error carried through the onboarding flow.
///
/// `message` is always user-presentable; it is what ends up in the toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
        }
    }

    /// Server rejection. Uses the server-supplied message when it is
    /// present and non-blank, otherwise the generic fallback.
    pub fn server(message: Option<String>) -> Self {
        Self {
            kind: AppErrorKind::ServerError,
            message: non_blank_or_fallback(message),
        }
    }

    /// Network or decoding failure. A blank message falls back to the
    /// generic one.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::TransportError,
            message: non_blank_or_fallback(Some(message.into())),
        }
    }
}

fn non_blank_or_fallback(message: Option<String>) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| CREATE_USER_FALLBACK.to_string())
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
