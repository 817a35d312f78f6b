//! Layout module for glyph-to-line reconstruction.
//!
//! This module contains:
//! - Glyph, word and line types
//! - Assembly parameters (AssemblyParams)
//! - Direction bucketing, line assembly and direction analysis
//! - Bidirectional reordering for search

pub mod analysis;
pub mod bidi;
pub mod params;
pub mod types;

// Re-export params
pub use params::*;

// Re-export value types
pub use types::*;

// Re-export analysis types and functions
pub use analysis::*;
