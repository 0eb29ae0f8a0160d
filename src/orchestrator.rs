//! Core orchestrator (component C5): composes the container codec and the
//! envelope cipher, and owns the session's key material and bandit state.
//!
//! `encode` runs C3 then C4 (compress-then-encrypt); `decode` runs C4 then
//! C3 and never attempts to parse the container before authentication
//! succeeds. A single [`FastLog`] instance is not safe for concurrent
//! `encode`/`decode` calls — the bandit state mutates — but distinct
//! instances with distinct keys share nothing and may run on separate
//! threads freely.

use crate::bandit::Bandit;
use crate::config::Config;
use crate::container;
use crate::envelope;
use crate::error::Result;

/// A session: one key, one bandit policy, for as long as this value lives.
pub struct FastLog {
    key: [u8; crate::config::KEY_LEN],
    level: i32,
    candidates: Vec<u32>,
    bandit: Bandit,
}

impl FastLog {
    /// Constructs a new session from `config`, generating a fresh key if
    /// none was supplied. Returns [`crate::error::FastLogError::BadConfig`]
    /// if the candidate set is empty, contains a non-positive entry, or is
    /// not strictly increasing.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let key = config.key.unwrap_or_else(envelope::generate_key);
        Ok(FastLog {
            key,
            level: config.level,
            candidates: config.candidates,
            bandit: Bandit::new(config.bandit),
        })
    }

    /// Encodes `raw` into a sealed blob: container framing (C3), then AEAD
    /// sealing (C4). The bandit's state carries across blocks within this
    /// call but is independent across separate `encode` calls.
    pub fn encode(&mut self, raw: &[u8]) -> Result<Vec<u8>> {
        let framed = container::encode(raw, self.level, &mut self.bandit, &self.candidates)?;
        envelope::seal(&self.key, &framed)
    }

    /// Decodes a sealed blob produced by [`FastLog::encode`] (with the same
    /// key): authenticates first, then parses and decompresses the
    /// container. Never touches the bandit — decode is bandit-agnostic by
    /// construction.
    pub fn decode(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        let framed = envelope::open(&self.key, sealed)?;
        container::decode(&framed)
    }

    /// Returns a copy of the session key. The orchestrator owns the key
    /// exclusively; callers needing it out-of-band must copy it explicitly.
    pub fn key(&self) -> [u8; crate::config::KEY_LEN] {
        self.key
    }
}
