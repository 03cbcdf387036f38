//! Fixture generator: builds sessions and writes them to disk

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, error};

use crate::fixture::{Session, SessionBuilder};
use crate::{Result, TxnForgeError};

/// Outcome of one failed session file write
#[derive(Debug)]
pub struct WriteFailure {
    /// Zero-based session index
    pub index: usize,
    /// Path that could not be written
    pub path: PathBuf,
    /// What went wrong
    pub error: TxnForgeError,
}

/// Aggregated outcome of a generation run
///
/// A single failed write never aborts the run; the generator records the
/// failure here and moves on to the next index.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Paths written successfully, in index order
    pub written: Vec<PathBuf>,
    /// Failed writes, in index order
    pub failures: Vec<WriteFailure>,
    /// Total transactions built across all sessions
    pub txns_built: u64,
}

impl GenerateReport {
    /// Number of sessions attempted
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    /// True if every attempted session was written
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Session fixture generator
pub struct Generator<R: Rng> {
    builder: SessionBuilder<R>,
}

impl Generator<StdRng> {
    /// Create a generator seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SessionBuilder::from_entropy())
    }

    /// Create a generator with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SessionBuilder::seeded(seed))
    }
}

impl<R: Rng> Generator<R> {
    /// Create a generator around an existing session builder
    #[must_use]
    pub fn new(builder: SessionBuilder<R>) -> Self {
        Self { builder }
    }

    /// Generate `count` session files under `dir`
    ///
    /// Files are named `session_<i>.json` for i in 0..count, created or
    /// overwritten one at a time. Write failures are logged and collected;
    /// generation always continues with the next index. The directory is
    /// not created or validated up front.
    pub fn generate(&mut self, count: usize, dir: &Path) -> GenerateReport {
        let mut report = GenerateReport::default();

        for index in 0..count {
            let session = self.builder.build_session();
            let path = dir.join(format!("session_{index}.json"));

            match write_session(&session, &path) {
                Ok(()) => {
                    debug!(
                        path = %path.display(),
                        txns = session.txns.len(),
                        "wrote session file"
                    );
                    report.written.push(path);
                }
                Err(e) => {
                    error!("{e}");
                    report.failures.push(WriteFailure {
                        index,
                        path,
                        error: e,
                    });
                }
            }
        }

        report.txns_built = self.builder.txns_built();
        report
    }
}

/// Serialize one session and write it to `path`
///
/// # Errors
///
/// Returns error if serialization fails or the file cannot be written
fn write_session(session: &Session, path: &Path) -> Result<()> {
    let data = serde_json::to_vec(session)?;

    fs::write(path, data).map_err(|e| TxnForgeError::SessionWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
