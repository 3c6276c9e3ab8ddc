//! Infrastructure Layer
//!
//! The HTTP surface (driving adapters) and the SQLite store plus
//! configuration (driven adapters).

pub mod driven_adapters;
pub mod driving_adapters;
