//! Unified error handling for RankBoost
//!
//! `PricingError` covers the two ways a quote request can be refused.
//! `AppError` is the application-wide error with automatic HTTP response
//! mapping; pricing errors convert into it with `?`.

use crate::models::Rank;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Reasons the pricing engine refuses a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Identifier outside the closed rank enumeration
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    /// End rank not strictly above start rank
    #[error("End rank must be higher than start rank (got {start} -> {end})")]
    InvalidProgression { start: Rank, end: Rank },
}

impl PricingError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PricingError::InvalidRank(_) => "invalid_rank",
            PricingError::InvalidProgression { .. } => "invalid_progression",
        }
    }
}

/// Main application error type
///
/// It implements `ResponseError` for automatic HTTP response generation.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Pricing Errors ====================
    #[error(transparent)]
    Pricing(#[from] PricingError),

    // ==================== Validation Errors ====================
    #[error("Validation error: {0}")]
    Validation(String),

    // ==================== Internal Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::Pricing(PricingError::InvalidRank(_)) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }

            // 422 Unprocessable Entity
            AppError::Pricing(PricingError::InvalidProgression { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            // 500 Internal Server Error
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Pricing(e) => e.error_code(),
            AppError::Validation(_) => "validation_error",
            AppError::Config(_) => "config_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = json!({
            "error": self.error_code(),
            "message": self.to_string(),
            "status": status.as_u16(),
        });

        HttpResponse::build(status).json(body)
    }
}

// ==================== From implementations ====================

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
