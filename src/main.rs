//! Binary entry point for the `fastlog2` command-line tool.
//!
//! Dispatches to `encode`/`decode`/`bench`; all of the interesting work
//! happens in [`fastlog2::orchestrator::FastLog`]. Thin post-parse dispatch
//! with `anyhow::Result` at the process boundary and a process exit code
//! of 0 on success.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use fastlog2::bandit::{Bandit, BanditMode};
use fastlog2::cli::args::{parse_key_hex, key_to_hex, Cli, Command};
use fastlog2::cli::constants::set_display_level;
use fastlog2::{adapter, displaylevel, Config, FastLog};

fn main() {
    let cli = Cli::parse();
    set_display_level(1 + cli.verbose as u32);

    let result = match cli.command {
        Command::Encode { input, output, bandit, level, key_hex } => {
            run_encode(input, output, bandit.into(), level, key_hex)
        }
        Command::Decode { input, output, key_hex } => run_decode(input, output, key_hex),
        Command::Bench { input, bandit } => run_bench(input, bandit.into()),
    };

    if let Err(err) = result {
        eprintln!("fastlog2: error: {err:#}");
        std::process::exit(1);
    }
}

fn run_encode(
    input: std::path::PathBuf,
    output: std::path::PathBuf,
    bandit: BanditMode,
    level: i32,
    key_hex: Option<String>,
) -> Result<()> {
    let raw = fs::read(&input).with_context(|| format!("reading {}", input.display()))?;

    let key = key_hex.as_deref().map(parse_key_hex).transpose()?;
    let mut log = FastLog::new(Config {
        bandit,
        key,
        level,
        ..Config::default()
    })?;

    let sealed = log.encode(&raw)?;
    fs::write(&output, &sealed).with_context(|| format!("writing {}", output.display()))?;

    displaylevel!(
        1,
        "encoded {} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        raw.len(),
        sealed.len()
    );
    if key_hex.is_none() {
        eprintln!("session key: {}", key_to_hex(&log.key()));
    }
    Ok(())
}

fn run_decode(input: std::path::PathBuf, output: std::path::PathBuf, key_hex: String) -> Result<()> {
    let sealed = fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    let key = parse_key_hex(&key_hex)?;

    let log = FastLog::new(Config {
        key: Some(key),
        ..Config::default()
    })?;

    let raw = log.decode(&sealed)?;
    fs::write(&output, &raw).with_context(|| format!("writing {}", output.display()))?;

    displaylevel!(1, "decoded {} -> {} ({} bytes)", input.display(), output.display(), raw.len());
    Ok(())
}

fn run_bench(input: std::path::PathBuf, bandit: BanditMode) -> Result<()> {
    let raw = fs::read(&input).with_context(|| format!("reading {}", input.display()))?;

    let config = Config { bandit, ..Config::default() };
    let mut probe = Bandit::new(config.bandit);
    let mut offset = 0usize;
    let mut history = Vec::new();
    let mut block_no = 0usize;
    while offset < raw.len() {
        let bs = probe.choose(&config.candidates, &history);
        let end = (offset + bs as usize).min(raw.len());
        let block_len = end - offset;
        let outcome = adapter::compress(&raw[offset..end], config.level)?;
        probe.observe(bs, outcome.elapsed, outcome.ratio);
        if history.len() < config.candidates.len() {
            history.push(fastlog2::bandit::HistoryEntry {
                block_size: bs,
                ratio: outcome.ratio,
                speed: outcome.speed,
            });
        }
        // `outcome.speed` (1/elapsed seconds) is the reward function's input,
        // not a throughput figure — report actual MiB/s for the human here.
        let block_mib_s = (block_len as f64 / outcome.elapsed.as_secs_f64().max(f64::EPSILON)) / (1024.0 * 1024.0);
        displaylevel!(
            2,
            "  block {block_no}: {bs} bytes chosen, ratio {:.3}, {block_mib_s:.1} MiB/s",
            outcome.ratio,
        );
        block_no += 1;
        offset = end;
    }

    let mut log = FastLog::new(config)?;
    let t0 = Instant::now();
    let sealed = log.encode(&raw)?;
    let elapsed = t0.elapsed();

    let throughput_mb_s = (raw.len() as f64 / elapsed.as_secs_f64()) / (1024.0 * 1024.0);
    println!(
        "{}: {} bytes -> {} bytes in {:.3}s ({:.1} MiB/s)",
        input.display(),
        raw.len(),
        sealed.len(),
        elapsed.as_secs_f64(),
        throughput_mb_s
    );
    Ok(())
}
