//! Test helpers shared across crates.
//!
//! This crate provides temporary JSON fixtures and normalisation for
//! localised output.

pub mod fs;
pub mod text;
