//! Wire envelope shared by every backend endpoint.

use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Uniform response envelope: `{success, data, message?, error?}`.
///
/// This shape is the only contract the backend surface commits to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope: the payload on success, the server's error
    /// string otherwise.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.success {
            self.data
                .ok_or_else(|| ApiError::Api("missing data in successful response".to_string()))
        } else {
            let reason = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "unknown error".to_string());
            Err(ApiError::Api(reason))
        }
    }
}

/// Paginated collection payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}
