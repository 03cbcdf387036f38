//! Fixture data model for synthetic HTTP sessions

mod session;
mod txn;

pub use session::{Session, SessionBuilder};
pub use txn::{build_txn, build_txns, HttpMessage, Transaction, TxnCounter};

/// Placeholder timestamp used for all sessions and messages
pub const PLACEHOLDER_TIMESTAMP: &str = "1234";

/// Placeholder uuid shared by every transaction (the harness only checks
/// that the field is present)
pub const PLACEHOLDER_UUID: &str = "123455666";

/// Schema version advertised in every session file
pub const FIXTURE_VERSION: &str = "0.1";

/// Host header value for every generated request
pub const REQUEST_HOST: &str = "s2.yimg.com";

/// Minimum transactions per session
pub const MIN_TXNS_PER_SESSION: usize = 1;

/// Maximum transactions per session
pub const MAX_TXNS_PER_SESSION: usize = 20;
