use axum::http::StatusCode;
use std::fmt;
use thiserror::Error;

/// The remote schedule call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPosts,
    CreatePost,
    DeletePost,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::ListPosts => "list scheduled posts",
            Operation::CreatePost => "create scheduled post",
            Operation::DeletePost => "delete scheduled post",
        })
    }
}

#[derive(Debug, Error)]
pub enum FetchErrorKind {
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A failed schedule operation. Always surfaced to the caller, never replaced by mock data.
#[derive(Debug, Error)]
#[error("failed to {operation}: {kind}")]
pub struct FetchError {
    pub operation: Operation,
    #[source]
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn transport(operation: Operation, err: reqwest::Error) -> Self {
        Self {
            operation,
            kind: FetchErrorKind::Transport(err),
        }
    }

    pub fn status(operation: Operation, status: StatusCode, body: String) -> Self {
        Self {
            operation,
            kind: FetchErrorKind::Status { status, body },
        }
    }

    pub fn decode(operation: Operation, err: reqwest::Error) -> Self {
        Self {
            operation,
            kind: FetchErrorKind::Decode(err),
        }
    }

    /// Status code returned by the remote API, if it answered at all.
    pub fn remote_status(&self) -> Option<StatusCode> {
        match &self.kind {
            FetchErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        match err.remote_status() {
            Some(StatusCode::NOT_FOUND) => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            _ => Self::bad_gateway(err.to_string()),
        }
    }
}

impl From<crate::scheduler::DraftError> for AppError {
    fn from(err: crate::scheduler::DraftError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
