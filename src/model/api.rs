use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorDto {
    /// Human-readable description of the failure.
    pub error: String,
}
