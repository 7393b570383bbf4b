//! Persistence layer for the option store.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - The PostgreSQL implementation of the domain repository contract

pub mod db;
pub mod entities;
pub mod repositories;
