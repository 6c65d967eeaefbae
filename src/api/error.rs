// API error taxonomy
// Every failure a request can hit, with its HTTP status and JSON body

use hyper::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// Keys offered back to the caller when a lookup misses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidates {
    /// First page of brand names plus a suggestion listing all of them
    Brands {
        available: Vec<&'static str>,
        suggestion: String,
    },
    Industries(Vec<&'static str>),
    Subcategories(Vec<&'static str>),
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or empty
    #[error("{0}")]
    Validation(String),

    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Failed to read request body: {0}")]
    BodyRead(String),

    #[error("Request body too large: {size} bytes (max: {max})")]
    PayloadTooLarge { size: u64, max: u64 },

    /// Lookup key not present in its table
    #[error("{message}")]
    NotFound {
        message: String,
        candidates: Candidates,
    },

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("No route for {path}")]
    UnknownRoute {
        path: String,
        available_endpoints: Vec<String>,
    },

    /// Unexpected failure while handling the request
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) | Self::BodyRead(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound { .. } | Self::UnknownRoute { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body sent to the client
    pub fn to_body(&self) -> Value {
        match self {
            Self::Validation(message) => json!({ "error": message }),
            Self::InvalidBody(e) => json!({
                "error": "Invalid JSON body",
                "message": e.to_string()
            }),
            Self::BodyRead(message) => json!({
                "error": "Failed to read request body",
                "message": message
            }),
            Self::PayloadTooLarge { .. } => json!({
                "error": "Payload too large",
                "message": self.to_string()
            }),
            Self::NotFound {
                message,
                candidates,
            } => match candidates {
                Candidates::Brands {
                    available,
                    suggestion,
                } => json!({
                    "error": message,
                    "available_brands": available,
                    "suggestion": suggestion
                }),
                Candidates::Industries(industries) => json!({
                    "error": message,
                    "available_industries": industries
                }),
                Candidates::Subcategories(subcategories) => json!({
                    "error": message,
                    "available_subcategories": subcategories
                }),
            },
            Self::MethodNotAllowed => json!({ "error": "Method not allowed" }),
            Self::UnknownRoute {
                available_endpoints,
                ..
            } => json!({
                "error": "Not Found",
                "available_endpoints": available_endpoints
            }),
            Self::Internal(message) => json!({
                "error": "Internal server error",
                "message": message
            }),
        }
    }
}
