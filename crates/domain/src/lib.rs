//! Domain layer for the option store.
//!
//! This crate contains:
//! - Domain models (ConfigOption and its structured component metadata)
//! - The storage-agnostic repository contract
//! - The option service and its business rules
//! - Domain error types

pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
