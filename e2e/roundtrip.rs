// e2e/roundtrip.rs — whole-crate round-trip tests through the public API.
//
// Drives `fastlog2::FastLog` directly (not the CLI binary — that's covered
// by e2e/cli.rs) across realistic payload shapes: empty, tiny, multi-block,
// and every bandit mode.

use fastlog2::{BanditMode, Config, FastLog};

fn session(bandit: BanditMode) -> FastLog {
    FastLog::new(Config { bandit, ..Config::default() }).unwrap()
}

#[test]
fn empty_payload_round_trips_under_every_bandit_mode() {
    for mode in [BanditMode::Off, BanditMode::OneShot, BanditMode::Full] {
        let mut log = session(mode);
        let sealed = log.encode(b"").unwrap();
        assert_eq!(log.decode(&sealed).unwrap(), Vec::<u8>::new());
    }
}

#[test]
fn short_single_block_payload_round_trips() {
    let mut log = session(BanditMode::OneShot);
    let raw = b"2026-07-27T00:00:00Z INFO starting up".to_vec();
    let sealed = log.encode(&raw).unwrap();
    assert_eq!(log.decode(&sealed).unwrap(), raw);
}

#[test]
fn multi_block_payload_round_trips_under_every_bandit_mode() {
    let raw = (0..20_000)
        .map(|i| format!("2026-07-27T00:00:{i:02}Z INFO request handled in {i}ms\n"))
        .collect::<String>()
        .into_bytes();

    for mode in [BanditMode::Off, BanditMode::OneShot, BanditMode::Full] {
        let mut log = session(mode);
        let sealed = log.encode(&raw).unwrap();
        assert_eq!(log.decode(&sealed).unwrap(), raw);
    }
}

#[test]
fn binary_payload_with_every_byte_value_round_trips() {
    let raw: Vec<u8> = (0..=255u8).cycle().take(500_000).collect();
    let mut log = session(BanditMode::Full);
    let sealed = log.encode(&raw).unwrap();
    assert_eq!(log.decode(&sealed).unwrap(), raw);
}

#[test]
fn custom_candidate_set_round_trips() {
    let mut log = FastLog::new(Config {
        candidates: vec![1024, 8192, 65536],
        ..Config::default()
    })
    .unwrap();
    let raw = vec![0x11u8; 300_000];
    let sealed = log.encode(&raw).unwrap();
    assert_eq!(log.decode(&sealed).unwrap(), raw);
}

#[test]
fn repeated_encode_decode_cycles_on_one_session_stay_consistent() {
    let mut log = session(BanditMode::Full);
    for i in 0..10 {
        let raw = format!("cycle {i}").into_bytes();
        let sealed = log.encode(&raw).unwrap();
        assert_eq!(log.decode(&sealed).unwrap(), raw);
    }
}
