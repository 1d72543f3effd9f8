use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::GroupeaseError;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for GroupeaseError to implement IntoResponse
#[derive(Debug)]
pub struct ApiError(pub GroupeaseError);

impl From<GroupeaseError> for ApiError {
    fn from(err: GroupeaseError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            GroupeaseError::IdentityNotFound(_) => StatusCode::NOT_FOUND,
            GroupeaseError::NotChannelMember(_) | GroupeaseError::NotGroupMember(_) => StatusCode::FORBIDDEN,
            GroupeaseError::InvalidGroupId(_)
            | GroupeaseError::InvalidChannelId(_)
            | GroupeaseError::GroupNameMissing => StatusCode::BAD_REQUEST,
            GroupeaseError::GroupNameConflict(_) => StatusCode::CONFLICT,
            GroupeaseError::GroupNotFound(_) => StatusCode::NOT_FOUND,
            GroupeaseError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GroupeaseError::StoreUnavailable(_) | GroupeaseError::DirectoryUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            GroupeaseError::LoggingError(_)
            | GroupeaseError::SeedError(_)
            | GroupeaseError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}
