#![forbid(unsafe_code)]

//! Core domain model and planning logic for mesocycle training plans.
//!
//! This crate provides:
//! - Domain types (mesocycles, weeks, days, planned slots)
//! - Current-day resolution
//! - Muscle-group ordering checks
//! - Weight and rep picker increments
//! - Payload loading and boundary validation

pub mod types;
pub mod error;
pub mod status;
pub mod config;
pub mod logging;
pub mod loader;
pub mod validate;
pub mod resolver;
pub mod grouping;
pub mod increments;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use status::StatusSets;
pub use config::Config;
pub use loader::{load_mesocycle, parse_mesocycle};
pub use resolver::{current_day, resolve, resolve_with, DayRoute};
pub use grouping::{first_split, is_valid_grouping, GroupingSplit};
pub use increments::{rep_options, weight_options, WeightUnit};
