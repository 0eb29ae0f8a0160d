//! LZ4 block compression and decompression.
//!
//! This module contains the core LZ4 block-format engine, ported from lz4.c v1.10.0.
//! It operates on single independent blocks with no cross-block dictionary
//! state — exactly the shape [`crate::adapter`] needs for its per-block calls.

pub mod compress;
pub mod decompress_api;
pub mod decompress_core;
pub mod types;

// Re-export the most important public API items at the module level.
pub use compress::{
    compress_bound, compress_default, compress_fast, Lz4Error, LZ4_ACCELERATION_DEFAULT,
    LZ4_MAX_INPUT_SIZE,
};
pub use decompress_api::{decompress_safe, BlockDecompressError};
