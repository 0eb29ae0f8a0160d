//! Error taxonomy for the FASTLOG2 codec.
//!
//! Mirrors the plain-enum-plus-manual-`Display` style used for
//! [`block::compress::Lz4Error`] and [`crate::block::decompress_api::BlockDecompressError`]:
//! no `thiserror`, a `Debug`-derived enum, and a hand-written `Display` impl.
//! All variants are fatal to the call that produced them — nothing here is
//! retried internally.
//!
//! [`block::compress::Lz4Error`]: crate::block::compress::Lz4Error

use core::fmt;

/// Reason a container blob failed to parse. Carried inside
/// [`FastLogError::Malformed`] so callers can distinguish truncation from
/// an over-large block count without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The block count in the header exceeds the configured ceiling.
    BlockCountTooLarge,
    /// End of input reached while reading a block header.
    TruncatedBlockHeader,
    /// End of input reached while reading a block's compressed payload.
    TruncatedBlockPayload,
    /// Bytes remain in the container after the last declared block.
    TrailingBytes,
    /// A block's declared `original_size` exceeds the decoder's allocation cap.
    OriginalSizeTooLarge,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MalformedReason::BlockCountTooLarge => "block count exceeds decoder ceiling",
            MalformedReason::TruncatedBlockHeader => "truncated block header",
            MalformedReason::TruncatedBlockPayload => "truncated block payload",
            MalformedReason::TrailingBytes => "trailing bytes after last block",
            MalformedReason::OriginalSizeTooLarge => "original_size exceeds decoder cap",
        };
        f.write_str(s)
    }
}

/// Top-level error returned by [`crate::orchestrator::FastLog`] and
/// [`crate::container`] operations.
///
/// Corresponds one-to-one to the error kinds of the codec's error taxonomy:
/// construction-time misconfiguration, AEAD authentication failure, and the
/// three decode-time framing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastLogError {
    /// Construction-time: key not 32 bytes, empty/non-monotonic/duplicate
    /// candidate set.
    BadConfig(&'static str),
    /// AEAD tag mismatch, or nonce/ciphertext length inconsistent. Surfaced
    /// immediately; no partial plaintext is ever returned.
    AuthFailed,
    /// The container's magic prefix did not match `"FASTLOG2"`.
    InvalidContainer,
    /// The container framing itself is inconsistent (see [`MalformedReason`]).
    Malformed(MalformedReason),
    /// The block compressor reported failure.
    CompressorFailed,
    /// The block decompressor reported failure or produced wrong-length output.
    DecompressorFailed,
}

impl fmt::Display for FastLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastLogError::BadConfig(reason) => write!(f, "bad config: {reason}"),
            FastLogError::AuthFailed => f.write_str("AEAD authentication failed"),
            FastLogError::InvalidContainer => f.write_str("invalid container: magic mismatch"),
            FastLogError::Malformed(reason) => write!(f, "malformed container: {reason}"),
            FastLogError::CompressorFailed => f.write_str("block compression failed"),
            FastLogError::DecompressorFailed => f.write_str("block decompression failed"),
        }
    }
}

impl std::error::Error for FastLogError {}

/// Convenience alias used throughout the crate's public API.
pub type Result<T> = core::result::Result<T, FastLogError>;
