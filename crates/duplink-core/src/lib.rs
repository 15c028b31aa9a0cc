//! Core types and configuration for duplink.
//!
//! This crate provides the data structures shared by the locator, the
//! grouper and the link replacer: the run configuration, the association
//! map produced by grouping, and the error type for fatal failures.

mod association;
mod config;
mod error;

pub use association::{Association, AssociationKind, AssociationMap};
pub use config::{
    DEFAULT_PREFIX, DEFAULT_ROOT, DEFAULT_SUBPATH, DEFAULT_TRACKED_FILES, DedupConfig,
    DedupConfigBuilder,
};
pub use error::DedupError;
