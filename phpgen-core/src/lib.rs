//! Core utilities for the phpgen PHP printer.
//!
//! This crate provides the text primitives every render step relies on
//! and the file helpers used to put rendered output on disk.

mod file;
mod text;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Text utilities
pub use text::{indent, normalize, trim_leading_blank_lines};
