//! # Presentation Time Core
//!
//! Converts a presentation's wall-clock start time into other zones.
//!
//! ## Modules
//! - `error`: Error types raised by conversion and setup
//! - `models`: Zone configuration and converted results
//! - `provider`: The `TimePresenter` and its DST-aware conversion
//! - `utils`: Formats, input validation and offset arithmetic

pub mod error;
pub mod models;
pub mod provider;
pub mod utils;
