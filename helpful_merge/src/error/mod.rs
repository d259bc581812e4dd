//! Error types produced by the merge engine and the configuration resolver.

mod localize;
mod types;

pub use types::{MergeError, MergeResult};

#[cfg(test)]
mod tests;
