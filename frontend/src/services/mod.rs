//! Backend services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`analyze`] - Poem submission to the analysis service (`POST /analyze`)

pub mod analyze;

pub use analyze::*;
