//! Domain models for the option store.

pub mod option;

pub use option::{
    ComponentParams, ConfigOption, CreateOptionInput, NewOption, UpdateOptionInput, SYSTEM_GROUP,
};
