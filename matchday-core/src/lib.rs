//! MATCHDAY Core - Shared domain types
//!
//! This crate provides the domain types shared between the draw engine
//! and its UI consumers:
//! - Team identity (id + editable display name)
//! - Default roster generation for the setup panel
//! - Match series formats (single, two-leg, best-of-N)
//! - The error type for the configuration boundary

pub mod error;
pub mod format;
pub mod team;

// Re-exports for convenient access
pub use error::DrawError;
pub use format::SeriesFormat;
pub use team::{placeholder_roster, Team};
