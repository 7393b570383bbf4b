//! Storage-agnostic repository contract for options.
//!
//! The repository translates typed operations into backend queries and
//! carries no business logic. It reports backend faults and absent results
//! only; translating those into the domain error taxonomy is the service's
//! job.

pub mod memory;
pub mod option;

pub use memory::InMemoryOptionRepository;
pub use option::{OptionRepository, RepositoryError};
