//! FASTLOG2 — an adaptive blockwise log-blob codec.
//!
//! Takes an arbitrary byte payload and produces a self-describing,
//! block-compressed, authenticatedly-encrypted container. Encoding chooses
//! a per-block size from a candidate set via a multi-armed-bandit policy,
//! driven by each block's observed compression ratio and throughput.
//!
//! ```
//! use fastlog2::{Config, FastLog};
//!
//! let mut log = FastLog::new(Config::default()).unwrap();
//! let sealed = log.encode(b"hello fastlog").unwrap();
//! assert_eq!(log.decode(&sealed).unwrap(), b"hello fastlog");
//! ```
//!
//! # Layout
//!
//! - [`bandit`] — C1, the block-size selection policy (`Off`/`OneShot`/`Full`).
//! - [`adapter`] — C2, a measuring wrapper over the LZ4 [`block`] engine.
//! - [`block`] — the LZ4 block-format codec, ported from the reference `lz4.c`.
//! - [`container`] — C3, the framed blockwise container format.
//! - [`envelope`] — C4, AES-256-GCM sealing of the whole container.
//! - [`orchestrator`] — C5, [`FastLog`]: owns the session key and bandit state.
//!
//! # Scope
//!
//! Random access into encoded blobs, streaming decryption before full
//! receipt, concurrent writers sharing one session, on-disk key
//! management, and format versioning beyond the single magic tag are all
//! out of scope — see the component docs for what each one does cover.

pub mod adapter;
pub mod bandit;
pub mod block;
pub mod cli;
pub mod config;
pub mod container;
pub mod envelope;
pub mod error;
pub mod orchestrator;

pub use bandit::BanditMode;
pub use config::Config;
pub use error::{FastLogError, MalformedReason, Result};
pub use orchestrator::FastLog;
