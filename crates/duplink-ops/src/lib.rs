//! Symlink replacement engine for duplink.
//!
//! This crate turns an association map into filesystem changes: every
//! duplicate is deleted and recreated as a relative symbolic link to its
//! canonical copy. Items are processed independently and failures are
//! collected rather than aborting the batch.

mod confirm;
mod outcome;
mod paths;
mod replace;

pub use confirm::{CONFIRMATION_PROMPT, CONFIRMATION_TOKEN, confirm};
pub use outcome::{ReplaceError, ReplaceErrorKind, ReplaceOutcome};
pub use paths::relative_link_target;
pub use replace::LinkReplacer;
