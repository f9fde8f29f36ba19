//! Shared traits implemented across Quill crates.

pub mod cache;
