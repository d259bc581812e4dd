//! Library interface for the `helpful-merge` command-line tool.
//!
//! The binary reads JSON documents from disk, merges them with
//! [`helpful_merge`], and prints the result. Merge failures, including the
//! typo suggestions raised when `--seal-target` rejects an unknown key, are
//! rendered through the Fluent catalogue selected with `--locale`.

pub mod cli;
pub mod error;
pub mod fs_helpers;
pub mod locale;
pub mod output;
pub mod pipeline;
