//! Bandit policy family (component C1).
//!
//! Three variants are modeled as a tagged enum rather than a trait-object
//! hierarchy — [`crate::orchestrator::FastLog`] owns exactly one instance
//! per session, selected at construction time and never swapped, so dynamic
//! dispatch buys nothing here. Small, closed variant sets like this one
//! (compare `block::types::TableType`, `block::types::DictDirective`) are
//! plain enums matched in the hot loop rather than behind a trait.
//!
//! Bandits never fail: an unknown candidate simply scores the default
//! reward of `0.0`.

use std::collections::HashMap;
use std::time::Duration;

use rand::Rng;

use crate::config::{FULL_BANDIT_EPSILON, OFF_BANDIT_DEFAULT_BLOCK_SIZE, REWARD_WEIGHT_RATIO, REWARD_WEIGHT_SPEED};

/// Which bandit variant an orchestrator session uses. Set once at
/// construction via [`crate::config::Config::bandit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BanditMode {
    /// Always returns a fixed block size; never learns.
    Off,
    /// Probes each candidate once, then latches the best-scoring one.
    OneShot,
    /// Epsilon-greedy over a running mean reward per candidate.
    Full,
}

/// One block's recorded outcome, fed back to [`OneShotBandit::choose`] and
/// [`FullBandit::observe`] during a single encode.
///
/// `ratio = compressed_len / original_len`; `speed = 1 / elapsed_seconds`.
/// A *higher* ratio scores better here — this is the reward function's
/// intentionally asymmetric design, reproduced verbatim from the
/// reference rather than silently inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry {
    pub block_size: u32,
    pub ratio: f64,
    pub speed: f64,
}

#[inline]
fn reward(ratio: f64, speed: f64) -> f64 {
    REWARD_WEIGHT_RATIO * ratio + REWARD_WEIGHT_SPEED * speed
}

/// Fixed block size, regardless of history. `choose` is pure; `observe` is
/// a no-op.
#[derive(Debug, Clone, Copy)]
pub struct OffBandit {
    default_block_size: u32,
}

impl OffBandit {
    pub fn new(default_block_size: u32) -> Self {
        OffBandit { default_block_size }
    }
}

impl Default for OffBandit {
    fn default() -> Self {
        OffBandit::new(OFF_BANDIT_DEFAULT_BLOCK_SIZE)
    }
}

/// Probes every candidate exactly once (in index order), then latches the
/// winner for the remainder of the encode.
#[derive(Debug, Clone, Default)]
pub struct OneShotBandit {
    selected: Option<u32>,
}

impl OneShotBandit {
    pub fn new() -> Self {
        OneShotBandit { selected: None }
    }

    fn choose(&mut self, candidates: &[u32], history: &[HistoryEntry]) -> u32 {
        if let Some(winner) = self.selected {
            return winner;
        }
        if candidates.is_empty() {
            // Malformed input the public `Bandit` API can be handed directly,
            // bypassing `container::encode`'s own validation. Bandits never
            // fail (spec.md §4.1); fall back to the global default rather
            // than indexing an empty slice.
            return OFF_BANDIT_DEFAULT_BLOCK_SIZE;
        }
        if history.is_empty() {
            return candidates[candidates.len() / 2];
        }
        if history.len() < candidates.len() {
            return candidates[history.len()];
        }

        // All candidates probed — score and latch. A stable sort preserves
        // "first tested among tied candidates" but callers must not rely on
        // that.
        let mut scored: Vec<&HistoryEntry> = history.iter().collect();
        scored.sort_by(|a, b| {
            reward(b.ratio, b.speed)
                .partial_cmp(&reward(a.ratio, a.speed))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let winner = scored[0].block_size;
        self.selected = Some(winner);
        winner
    }
}

/// Epsilon-greedy bandit over a running mean reward per candidate.
#[derive(Debug, Clone)]
pub struct FullBandit {
    epsilon: f64,
    /// block_size -> (running mean reward, observation count)
    stats: HashMap<u32, (f64, u64)>,
}

impl FullBandit {
    pub fn new(epsilon: f64) -> Self {
        FullBandit {
            epsilon,
            stats: HashMap::new(),
        }
    }

    fn choose(&self, candidates: &[u32]) -> u32 {
        if candidates.is_empty() {
            // See `OneShotBandit::choose`: the public `Bandit` API can be
            // handed malformed input directly, independent of
            // `container::encode`'s own validation.
            return OFF_BANDIT_DEFAULT_BLOCK_SIZE;
        }

        if self.epsilon > 0.0 && rand::thread_rng().gen_bool(self.epsilon) {
            let idx = rand::thread_rng().gen_range(0..candidates.len());
            return candidates[idx];
        }

        if self.stats.is_empty() {
            return candidates[candidates.len() / 2];
        }

        candidates
            .iter()
            .copied()
            .max_by(|&a, &b| {
                let score_a = self.stats.get(&a).map(|(v, _)| *v).unwrap_or(0.0);
                let score_b = self.stats.get(&b).map(|(v, _)| *v).unwrap_or(0.0);
                score_a.partial_cmp(&score_b).unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("candidates is non-empty, checked above")
    }

    fn observe(&mut self, block_size: u32, ratio: f64, speed: f64) {
        let r = reward(ratio, speed);
        let entry = self.stats.entry(block_size).or_insert((0.0, 0));
        let (mean, count) = *entry;
        let new_mean = (mean * count as f64 + r) / (count as f64 + 1.0);
        *entry = (new_mean, count + 1);
    }
}

impl Default for FullBandit {
    fn default() -> Self {
        FullBandit::new(FULL_BANDIT_EPSILON)
    }
}

/// A session's bandit state, owned exclusively by its
/// [`crate::orchestrator::FastLog`] instance.
#[derive(Debug, Clone)]
pub enum Bandit {
    Off(OffBandit),
    OneShot(OneShotBandit),
    Full(FullBandit),
}

impl Bandit {
    pub fn new(mode: BanditMode) -> Self {
        match mode {
            BanditMode::Off => Bandit::Off(OffBandit::default()),
            BanditMode::OneShot => Bandit::OneShot(OneShotBandit::new()),
            BanditMode::Full => Bandit::Full(FullBandit::default()),
        }
    }

    /// Picks the next block size given the candidate set and the history
    /// window accumulated so far this encode.
    pub fn choose(&mut self, candidates: &[u32], history: &[HistoryEntry]) -> u32 {
        match self {
            Bandit::Off(b) => b.default_block_size,
            Bandit::OneShot(b) => b.choose(candidates, history),
            Bandit::Full(b) => b.choose(candidates),
        }
    }

    /// Feeds a block's measured outcome back into the policy. A no-op for
    /// `Off`; `Full` updates its running mean unconditionally, independent
    /// of the history-window cap applied by the container codec.
    pub fn observe(&mut self, block_size: u32, elapsed: Duration, ratio: f64) {
        if let Bandit::Full(b) = self {
            let speed = 1.0 / elapsed.as_secs_f64();
            b.observe(block_size, ratio, speed);
        }
    }
}
