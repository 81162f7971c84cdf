//! Business logic services for RankBoost
//!
//! # Architecture
//!
//! Services are plain values built once at startup:
//! - Each service owns its configuration (no shared mutable state)
//! - Services are wrapped in Arc for sharing across actix workers
//! - All operations are instrumented with tracing
//!
//! # Services
//!
//! - `PricingEngine` - Quotes a rank progression from the static ladder

pub mod pricing;

pub use pricing::PricingEngine;
