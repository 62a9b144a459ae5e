//! walkdel - Walk a directory tree and list or delete matching files
//!
//! A single pipeline per run:
//! - walk the tree from a root, directories before their contents
//! - skip entries by type, minimum size and extension
//! - list each remaining file, or delete it and record the deletion
//!
//! The first error anywhere ends the run.

pub mod action;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod walker;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, Result, WalkDelError};
pub use runner::{execute, run, RunSummary};
