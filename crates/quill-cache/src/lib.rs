//! # quill-cache
//!
//! Server-side key-value storage for Quill. The session subsystem keeps
//! its token → user mappings here, behind the [`CacheProvider`] trait
//! from `quill-core`, with Redis and in-memory backends selected by
//! configuration.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
pub use quill_core::traits::cache::CacheProvider;
