//! Domain types and policy for the screenshot designer backend.
//!
//! Nothing in this crate performs I/O. Persistence lives in `shotify-db`,
//! the HTTP boundary in `shotify-api`.

pub mod access;
pub mod canvas;
pub mod error;
pub mod naming;
pub mod platform;
pub mod seed;
pub mod types;
