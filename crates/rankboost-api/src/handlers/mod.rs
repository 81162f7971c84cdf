//! HTTP request handlers

pub mod pricing;

pub use pricing::configure as configure_pricing;
