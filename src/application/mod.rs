//! Application Layer
//!
//! Use cases for heroes, powers and their associations, written against the
//! domain gateways only.

pub mod use_cases;
