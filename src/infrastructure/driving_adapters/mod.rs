//! Driving Adapters
//!
//! The REST API: routers, handlers, DTOs and middleware.

pub mod api_rest;
