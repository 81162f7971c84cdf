//! RankBoost Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the RankBoost pricing system. It includes:
//!
//! - The rank ladder (ordinals, tier indices, special ranks)
//! - The quote model and pricing rates
//! - The pricing service trait
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::{AppError, PricingError};

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
