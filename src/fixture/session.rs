//! Session construction

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::txn::{build_txns, Transaction, TxnCounter};
use super::{FIXTURE_VERSION, MAX_TXNS_PER_SESSION, MIN_TXNS_PER_SESSION, PLACEHOLDER_TIMESTAMP};

/// A group of synthetic transactions, serialized as one fixture file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Capture timestamp (placeholder)
    pub timestamp: String,
    /// Fixture schema version
    pub version: String,
    /// Ordered transactions, 1..=20 per session
    pub txns: Vec<Transaction>,
}

/// Builds sessions from an injected random source and an owned counter
///
/// The counter advances once per transaction and is never reset between
/// sessions, so request paths stay unique across every session built by
/// one `SessionBuilder`.
pub struct SessionBuilder<R: Rng> {
    rng: R,
    counter: TxnCounter,
}

impl SessionBuilder<StdRng> {
    /// Create a builder seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a builder with a fixed seed, for deterministic session sizes
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SessionBuilder<R> {
    /// Create a builder around an existing random source
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            counter: TxnCounter::new(),
        }
    }

    /// Build one session with a uniformly sampled transaction count
    pub fn build_session(&mut self) -> Session {
        let n = self
            .rng
            .random_range(MIN_TXNS_PER_SESSION..=MAX_TXNS_PER_SESSION);

        Session {
            timestamp: PLACEHOLDER_TIMESTAMP.to_string(),
            version: FIXTURE_VERSION.to_string(),
            txns: build_txns(&mut self.counter, n),
        }
    }

    /// Total transactions built so far
    #[must_use]
    pub fn txns_built(&self) -> u64 {
        self.counter.current()
    }
}
