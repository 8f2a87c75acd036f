//! Utility modules for the normalizer.
//!
//! This module contains supporting functionality such as the cache of
//! built normalizers.

pub mod cache;

pub use cache::{CacheStats, NormalizerCache};
