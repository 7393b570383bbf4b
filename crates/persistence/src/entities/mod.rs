//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod option;

pub use option::OptionEntity;
