//! API envelope and wire DTOs.
//!
//! Every endpoint responds with an [`ApiResponse`]: `success` plus
//! optional `data`, `error`, and `message` fields, with absent fields
//! omitted from the JSON. Request bodies use `#[serde(default)]` so a
//! missing field deserializes to its empty value and is rejected by
//! validation with a structured 400, not by the JSON decoder.

use serde::{Deserialize, Serialize};

/// Uniform response envelope for all API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A success envelope with payload and a human-readable message.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }

    /// A failure envelope carrying only an error message.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Accepted for the wire contract; the composer does not use it.
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub character_ids: Vec<String>,
}

/// Query parameters of `GET /api/teams`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamListQuery {
    pub user_id: Option<String>,
}
