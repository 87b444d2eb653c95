//! File operations module
//!
//! This module contains the whole-file read and write used while rewriting.

mod actions;
mod target;

pub use actions::write_contents;
pub use target::FileTarget;
