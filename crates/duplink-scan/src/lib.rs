//! Target directory discovery for duplink.
//!
//! Lists the immediate children of a root directory, keeps those whose name
//! starts with the configured prefix, and resolves the configured subpath
//! inside each of them.
//!
//! # Example
//!
//! ```rust,no_run
//! use duplink_scan::{DedupConfig, DirectoryLocator};
//!
//! let config = DedupConfig::new("/path/to/labs");
//! let dirs = DirectoryLocator::new(&config).locate().unwrap();
//!
//! for dir in &dirs {
//!     println!("{}", dir.display());
//! }
//! ```

mod locator;

pub use locator::{DirectoryLocator, locate};

// Re-export core types for convenience
pub use duplink_core::{DedupConfig, DedupError};
