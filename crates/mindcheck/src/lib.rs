//! Depression-risk screening: a twelve-question catalog, a fixed linear scoring
//! model, tiered recommendations, and display-only chart data.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
