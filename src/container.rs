//! Container codec (component C3): blockwise framing, driven by the bandit.
//!
//! Encode splits the input into blocks whose size the bandit chooses one at
//! a time, feeding each block's measured ratio/speed back before choosing
//! the next; decode is a pure function of the framed bytes and never
//! consults the bandit — the container is fully self-describing.

use crate::adapter;
use crate::bandit::{Bandit, HistoryEntry};
use crate::config::{DECODER_BLOCK_COUNT_CEILING, DECODER_BLOCK_SIZE_CAP};
use crate::error::{FastLogError, MalformedReason, Result};

/// 8-byte magic prefixing every container.
pub const MAGIC: &[u8; 8] = b"FASTLOG2";

const HEADER_LEN: usize = 8 + 8; // MAGIC + u64 block count
const BLOCK_HEADER_LEN: usize = 4 + 4 + 4; // original_size, compressed_size, level

/// Splits `input` into blocks sized by `bandit`, compresses each, and
/// frames them behind `MAGIC || block_count || blocks...`.
///
/// Empty input produces `MAGIC || u64_le(0)` and no block records. The
/// final block may be shorter than the chosen size; its actual length
/// becomes that record's `original_size` — no padding.
pub fn encode(input: &[u8], level: i32, bandit: &mut Bandit, candidates: &[u32]) -> Result<Vec<u8>> {
    if candidates.is_empty() {
        return Err(FastLogError::BadConfig("candidate set must not be empty"));
    }

    let mut offset = 0usize;
    let mut history: Vec<HistoryEntry> = Vec::new();
    let mut blocks: Vec<(u32, u32, i32, Vec<u8>)> = Vec::new();

    while offset < input.len() {
        let bs = bandit.choose(candidates, &history);
        let end = (offset + bs as usize).min(input.len());
        let block = &input[offset..end];
        offset = end;

        let outcome = adapter::compress(block, level)?;
        bandit.observe(bs, outcome.elapsed, outcome.ratio);

        // History is capped at `candidates.len()` entries: later blocks still
        // feed `observe` but no longer widen the window. This preserves
        // OneShot's exactly-once-per-candidate probing semantics.
        if history.len() < candidates.len() {
            history.push(HistoryEntry {
                block_size: bs,
                ratio: outcome.ratio,
                speed: outcome.speed,
            });
        }

        blocks.push((block.len() as u32, outcome.compressed.len() as u32, level, outcome.compressed));
    }

    let mut out = Vec::with_capacity(HEADER_LEN + blocks.iter().map(|b| BLOCK_HEADER_LEN + b.3.len()).sum::<usize>());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&(blocks.len() as u64).to_le_bytes());
    for (original, compressed_len, level, compressed) in &blocks {
        out.extend_from_slice(&original.to_le_bytes());
        out.extend_from_slice(&compressed_len.to_le_bytes());
        out.extend_from_slice(&(*level as u32).to_le_bytes());
        out.extend_from_slice(compressed);
    }
    Ok(out)
}

/// Reverses [`encode`]: verifies the magic prefix, reads the block count
/// against [`DECODER_BLOCK_COUNT_CEILING`], then decompresses each block in
/// order. The cursor must land exactly on the input's end; any remaining
/// bytes are [`MalformedReason::TrailingBytes`].
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    if container.len() < MAGIC.len() || &container[..MAGIC.len()] != MAGIC {
        return Err(FastLogError::InvalidContainer);
    }
    let mut p = MAGIC.len();

    let count_bytes = container
        .get(p..p + 8)
        .ok_or(FastLogError::Malformed(MalformedReason::TruncatedBlockHeader))?;
    let block_count = u64::from_le_bytes(count_bytes.try_into().unwrap());
    p += 8;

    if block_count > DECODER_BLOCK_COUNT_CEILING {
        return Err(FastLogError::Malformed(MalformedReason::BlockCountTooLarge));
    }

    let mut out = Vec::new();
    for _ in 0..block_count {
        let header = container
            .get(p..p + BLOCK_HEADER_LEN)
            .ok_or(FastLogError::Malformed(MalformedReason::TruncatedBlockHeader))?;
        let original = u32::from_le_bytes(header[0..4].try_into().unwrap());
        let compressed_len = u32::from_le_bytes(header[4..8].try_into().unwrap());
        let _level = u32::from_le_bytes(header[8..12].try_into().unwrap());
        p += BLOCK_HEADER_LEN;

        if original as u64 > DECODER_BLOCK_SIZE_CAP {
            return Err(FastLogError::Malformed(MalformedReason::OriginalSizeTooLarge));
        }

        let payload = container
            .get(p..p + compressed_len as usize)
            .ok_or(FastLogError::Malformed(MalformedReason::TruncatedBlockPayload))?;
        p += compressed_len as usize;

        let decoded = adapter::decompress(payload, original as usize)?;
        out.extend_from_slice(&decoded);
    }

    if p != container.len() {
        return Err(FastLogError::Malformed(MalformedReason::TrailingBytes));
    }

    Ok(out)
}
