//! Error types shared by the generators, the data service and the API.

use thiserror::Error;

/// Failure of a data service request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// A request parameter is outside its accepted range.
    #[error("invalid parameter `{field}`: {message}")]
    InvalidParameter {
        /// Parameter name as it appears in the request (e.g. `"forecast_days"`).
        field: &'static str,
        /// Human-readable constraint description.
        message: String,
    },

    /// Unexpected internal fault while producing data.
    #[error("data generation failed: {0}")]
    GenerationFailure(String),
}

impl ServiceError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
