//! NutriVeda API Client
//!
//! Typed REST wrapper over the backend's CRUD endpoints. Every endpoint
//! answers with the uniform `{success, data, message?, error?}` envelope;
//! requests carry a bearer token supplied by an injected [`SessionStore`].
//!
//! The failure policy is deliberately minimal: a single attempt with a
//! single timeout, then the error is surfaced to the caller.

mod client;
mod envelope;
mod session;

pub use client::{ApiClient, ReportRequest, DEFAULT_TIMEOUT};
pub use envelope::{ApiResponse, PaginatedResponse};
pub use session::{MemorySession, SessionStore};

use thiserror::Error;

/// Client errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// The request exceeded the client timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection-level failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server's envelope reported failure
    #[error("API error: {0}")]
    Api(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
