//! Compile-time defaults and the orchestrator's construction-time config.
//!
//! Plain `pub const` defaults plus a small construction struct, the same
//! shape as compile-time constants migrated from a C header, scaled down
//! to what this codec's single orchestrator actually needs — there is no
//! environment-variable or config-file override layer here, only
//! constructor arguments.

use crate::bandit::BanditMode;
use crate::error::{FastLogError, Result};

/// Default compression level passed through to the block compressor.
/// Stored per block in the container header but not exercised by the
/// encoder — the encoder always compresses at LZ4's default acceleration
/// regardless of this value.
pub const LEVEL_DEFAULT: i32 = 9;

/// Default candidate block sizes, strictly increasing: 256 KiB, 1 MiB, 4 MiB.
pub const CANDIDATES_DEFAULT: [u32; 3] = [256 * 1024, 1024 * 1024, 4 * 1024 * 1024];

/// Reward weight on compression ratio.
pub const REWARD_WEIGHT_RATIO: f64 = 0.7;

/// Reward weight on compression speed.
pub const REWARD_WEIGHT_SPEED: f64 = 0.3;

/// Default exploration probability for [`crate::bandit::FullBandit`].
pub const FULL_BANDIT_EPSILON: f64 = 0.1;

/// Block size `Off` mode uses unconditionally (1 MiB, the candidate set's
/// middle element by default).
pub const OFF_BANDIT_DEFAULT_BLOCK_SIZE: u32 = 1024 * 1024;

/// Decoder allocation cap for a single block's declared `original_size`.
pub const DECODER_BLOCK_SIZE_CAP: u64 = 64 * 1024 * 1024;

/// Decoder ceiling on the container's declared block count.
pub const DECODER_BLOCK_COUNT_CEILING: u64 = 1u64 << 32;

/// Session key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Construction-time configuration for [`crate::orchestrator::FastLog`]:
/// `bandit`, `key`, `level`, `candidates`, each independently optional at
/// the builder level and defaulted here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bandit policy to drive block-size selection.
    pub bandit: BanditMode,
    /// Session key; `None` means "generate one fresh".
    pub key: Option<[u8; KEY_LEN]>,
    /// Compression level passthrough (see [`LEVEL_DEFAULT`]).
    pub level: i32,
    /// Candidate block sizes, strictly increasing.
    pub candidates: Vec<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bandit: BanditMode::OneShot,
            key: None,
            level: LEVEL_DEFAULT,
            candidates: CANDIDATES_DEFAULT.to_vec(),
        }
    }
}

impl Config {
    /// Validates `candidates`: non-empty, strictly increasing, all positive.
    /// Returns [`FastLogError::BadConfig`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(FastLogError::BadConfig("candidate set must not be empty"));
        }
        if self.candidates.iter().any(|&c| c == 0) {
            return Err(FastLogError::BadConfig("candidate sizes must be positive"));
        }
        if !self.candidates.windows(2).all(|w| w[0] < w[1]) {
            return Err(FastLogError::BadConfig(
                "candidate set must be strictly increasing (implies no duplicates)",
            ));
        }
        Ok(())
    }
}
