use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Requested tenure is not one of hour/day/week/month
    #[error("Invalid tenure: {0}")]
    InvalidTenure(String),

    /// Product cannot be priced (non-positive base price, not rentable, ...)
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// A concrete date range was required and end was not after start
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidTenure(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidProduct(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidDateRange(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_tenure(msg: impl Into<String>) -> Self {
        AppError::InvalidTenure(msg.into())
    }

    pub fn invalid_product(msg: impl Into<String>) -> Self {
        AppError::InvalidProduct(msg.into())
    }

    pub fn invalid_date_range(msg: impl Into<String>) -> Self {
        AppError::InvalidDateRange(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
