//! Repository implementations for database operations.

pub mod option;

pub use option::PgOptionRepository;
