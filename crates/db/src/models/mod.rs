//! Document structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` document struct matching the stored shape
//! - A `New*` struct carrying everything the store needs for an insert
//! - `Deserialize` DTOs for create and update requests

pub mod project;
pub mod template;
