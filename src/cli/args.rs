//! Command-line argument parsing for the `fastlog2` binary, built on
//! `clap`'s derive API. This CLI has three subcommands and none of
//! `lz4cli`'s 30-year-old flag-set legacy to match, so the derive API is
//! the idiomatic choice over a hand-rolled parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::bandit::BanditMode;

/// Adaptive blockwise log codec: LZ4 compression sealed under AES-256-GCM.
#[derive(Debug, Parser)]
#[command(name = "fastlog2", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase output verbosity (repeatable: -v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress and seal a file.
    Encode {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, value_enum, default_value = "one")]
        bandit: BanditArg,
        #[arg(long, default_value_t = crate::config::LEVEL_DEFAULT)]
        level: i32,
        /// 64 hex-char session key; a fresh key is generated and printed to
        /// stderr if omitted. There is no on-disk key management — callers
        /// needing a persistent key must supply one.
        #[arg(long)]
        key_hex: Option<String>,
    },
    /// Authenticate and decompress a sealed blob.
    Decode {
        input: PathBuf,
        output: PathBuf,
        /// 64 hex-char session key matching the one used to encode.
        #[arg(long)]
        key_hex: String,
    },
    /// Encode a file in memory and report per-bandit-mode throughput.
    Bench {
        input: PathBuf,
        #[arg(long, value_enum, default_value = "one")]
        bandit: BanditArg,
    },
}

/// Mirrors [`BanditMode`] as a `clap`-friendly enum (spec's CLI surface
/// names the flag values `one|full|off`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BanditArg {
    Off,
    One,
    Full,
}

impl From<BanditArg> for BanditMode {
    fn from(value: BanditArg) -> Self {
        match value {
            BanditArg::Off => BanditMode::Off,
            BanditArg::One => BanditMode::OneShot,
            BanditArg::Full => BanditMode::Full,
        }
    }
}

/// Parses a 64-char hex string into a 32-byte key.
pub fn parse_key_hex(hex: &str) -> anyhow::Result<[u8; crate::config::KEY_LEN]> {
    if hex.len() != crate::config::KEY_LEN * 2 {
        anyhow::bail!(
            "key must be {} hex characters ({} bytes), got {}",
            crate::config::KEY_LEN * 2,
            crate::config::KEY_LEN,
            hex.len()
        );
    }
    let mut key = [0u8; crate::config::KEY_LEN];
    for (i, byte) in key.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)?;
    }
    Ok(key)
}

/// Renders a key as a lowercase hex string, for printing a freshly
/// generated session key back to the caller.
pub fn key_to_hex(key: &[u8; crate::config::KEY_LEN]) -> String {
    key.iter().map(|b| format!("{b:02x}")).collect()
}
