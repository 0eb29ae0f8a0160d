// e2e/bandit_convergence.rs — end-to-end checks on bandit behavior across a
// full session, driven through the public `FastLog` API rather than the
// bandit module directly (see tests/bandit.rs for that).

use fastlog2::{BanditMode, Config, FastLog};

fn encode_and_count_blocks(log: &mut FastLog, raw: &[u8]) -> u64 {
    let sealed = log.encode(raw).unwrap();
    // Decrypt only; block counting happens by re-deriving from the exposed
    // container bytes would require reaching into fastlog2::envelope, which
    // a caller of the orchestrator alone cannot do. Round-trip instead and
    // trust the container's own internal accounting (exercised directly in
    // tests/container.rs) — here we only care that convergence doesn't
    // regress correctness.
    let _ = log.decode(&sealed).unwrap();
    sealed.len() as u64
}

#[test]
fn off_mode_produces_identical_size_output_for_identical_input_every_call() {
    let mut log = FastLog::new(Config { bandit: BanditMode::Off, ..Config::default() }).unwrap();
    let raw = vec![0x77u8; 10_000_000];
    let a = encode_and_count_blocks(&mut log, &raw);
    let b = encode_and_count_blocks(&mut log, &raw);
    // Off never learns, so the container framing (and hence sealed length,
    // modulo the independent random nonce) is identical call to call.
    assert_eq!(a, b);
}

#[test]
fn full_mode_does_not_crash_or_corrupt_across_many_encodes_with_varying_content() {
    let mut log = FastLog::new(Config { bandit: BanditMode::Full, ..Config::default() }).unwrap();
    for i in 0..30 {
        let raw = vec![(i % 256) as u8; 1_500_000 + i * 777];
        let sealed = log.encode(&raw).unwrap();
        assert_eq!(log.decode(&sealed).unwrap(), raw);
    }
}

#[test]
fn one_shot_mode_latches_and_keeps_round_tripping_correctly_after_latching() {
    let mut log = FastLog::new(Config { bandit: BanditMode::OneShot, ..Config::default() }).unwrap();
    // First encode exhausts the probe-every-candidate-once phase and latches.
    let warmup = vec![b'w'; 9_000_000];
    let sealed = log.encode(&warmup).unwrap();
    assert_eq!(log.decode(&sealed).unwrap(), warmup);

    // Subsequent encodes on the same session reuse the latched size; must
    // still round-trip regardless of input shape.
    for len in [0usize, 1, 4096, 2_500_000] {
        let raw = vec![b'z'; len];
        let sealed = log.encode(&raw).unwrap();
        assert_eq!(log.decode(&sealed).unwrap(), raw);
    }
}

#[test]
fn distinct_sessions_never_share_bandit_state() {
    let mut log_a = FastLog::new(Config { bandit: BanditMode::OneShot, ..Config::default() }).unwrap();
    let mut log_b = FastLog::new(Config { bandit: BanditMode::OneShot, ..Config::default() }).unwrap();

    // Exhaust log_a's probe phase and latch it.
    let raw = vec![b'a'; 9_000_000];
    let _ = log_a.encode(&raw).unwrap();

    // log_b starts its own probe phase from scratch; both must still
    // round-trip independently.
    let sealed_b = log_b.encode(b"fresh session, fresh bandit").unwrap();
    assert_eq!(log_b.decode(&sealed_b).unwrap(), b"fresh session, fresh bandit");
}
