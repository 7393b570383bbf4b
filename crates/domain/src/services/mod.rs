//! Domain services for the option store.
//!
//! Services contain the business rules that the repository cannot enforce:
//! key uniqueness, existence checks, partial-update semantics, and the
//! translation of backend faults into the domain error taxonomy.

pub mod option;

pub use option::OptionService;
