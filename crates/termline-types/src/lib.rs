//! Foundation types for termline.
//!
//! Shared by every termline crate: the workspace error enum with its `Result`
//! alias, and the engine configuration.

pub mod config;
pub mod error;
