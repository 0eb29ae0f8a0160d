//! Block compressor adapter (component C2).
//!
//! A thin measurement wrapper over [`crate::block`], the LZ4 block-format
//! engine ported from the reference `lz4.c`. [`crate::container`] calls
//! this once per block; the bandit never talks to the compressor directly.
//!
//! `level` is accepted for API completeness (it is carried into the
//! container's per-block header) but the encoder does not exercise it —
//! compression always runs at LZ4's default acceleration.
//! Any alternative compressor plugged in here would need to accept the
//! hinted `original_size` on decompress even if it does not need it, since
//! the container format always supplies it out-of-band.

use std::time::{Duration, Instant};

use crate::block;
use crate::error::{FastLogError, Result};

/// One block's compression outcome: the compressed bytes plus the
/// measurements the bandit's reward function consumes.
pub struct CompressOutcome {
    pub compressed: Vec<u8>,
    pub ratio: f64,
    pub elapsed: Duration,
    pub speed: f64,
}

/// Compresses one independent block, measuring wall-clock elapsed time and
/// the resulting compression ratio (`compressed_len / original_len`, not
/// clamped to `<= 1`).
///
/// `level` is accepted but unused (see module docs).
pub fn compress(block_data: &[u8], _level: i32) -> Result<CompressOutcome> {
    let bound = block::compress_bound(block_data.len() as i32);
    if bound <= 0 {
        return Err(FastLogError::CompressorFailed);
    }
    let mut dst = vec![0u8; bound as usize];

    let t0 = Instant::now();
    let n = block::compress_default(block_data, &mut dst).map_err(|_| FastLogError::CompressorFailed)?;
    let elapsed = t0.elapsed();

    dst.truncate(n);

    let ratio = n as f64 / block_data.len() as f64;
    let speed = 1.0 / elapsed.as_secs_f64().max(f64::EPSILON);

    Ok(CompressOutcome {
        compressed: dst,
        ratio,
        elapsed,
        speed,
    })
}

/// Decompresses one block, given the original (pre-compression) size out of
/// band — required because LZ4 block mode carries no self-delimiting
/// length prefix.
///
/// A result whose length does not match `expected_original_size` is treated
/// as fatal container corruption.
pub fn decompress(compressed: &[u8], expected_original_size: usize) -> Result<Vec<u8>> {
    let mut dst = vec![0u8; expected_original_size];
    let n = block::decompress_safe(compressed, &mut dst).map_err(|_| FastLogError::DecompressorFailed)?;
    if n != expected_original_size {
        return Err(FastLogError::DecompressorFailed);
    }
    Ok(dst)
}
