//! Hero Powers Registry API
//!
//! A Rust-based microservice managing heroes, powers and the association
//! between them, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
