//! Directory traversal and the per-entry filter predicate.

mod entry;
mod filter;
mod walk;

pub use entry::EntryInfo;
pub use filter::filter_out;
pub use walk::walk;
