//! Filesystem helpers.
//!
//! `dir` and `file` are the namespaces scripts use; the remaining modules
//! hold the implementations they re-export.

pub mod content;
pub mod copy;
pub mod create;
pub mod dir;
pub mod error;
pub mod file;
pub mod metadata;
pub mod path;
pub mod remove;
pub mod search;
pub mod stat;

pub use error::FsOpError;
