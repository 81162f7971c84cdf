//! API layer for RankBoost
//!
//! HTTP handlers exposing the pricing engine as a price-preview service.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod dto;
pub mod handlers;

// Re-export DTOs (common types)
pub use dto::ApiResponse;

// Re-export handler configuration functions
pub use handlers::configure_pricing;
