//! Transaction construction

use serde::{Deserialize, Serialize};

use super::{PLACEHOLDER_TIMESTAMP, PLACEHOLDER_UUID, REQUEST_HOST};

/// One side of an HTTP exchange: a body, a timestamp, and a raw header blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpMessage {
    /// Message body (empty in generated fixtures)
    pub body: String,
    /// Capture timestamp (placeholder)
    pub timestamp: String,
    /// Raw HTTP/1.1 header section, CRLF terminated
    pub headers: String,
}

/// A single synthetic request/response pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Request side
    pub request: HttpMessage,
    /// Transaction identifier (constant placeholder, not unique)
    pub uuid: String,
    /// Response side
    pub response: HttpMessage,
}

/// Monotonic counter embedded in request paths
///
/// Starts at zero and advances once per built transaction, never resetting
/// between sessions, so every request path within a run is textually unique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxnCounter(u64);

impl TxnCounter {
    /// Create a counter positioned at zero
    #[must_use]
    pub fn new() -> Self {
        Self(0)
    }

    /// Current value without advancing
    #[must_use]
    pub fn current(&self) -> u64 {
        self.0
    }

    /// Return the current value and advance by one
    pub fn advance(&mut self) -> u64 {
        let value = self.0;
        self.0 += 1;
        value
    }
}

/// Build one transaction, advancing the counter by one
#[must_use]
pub fn build_txn(counter: &mut TxnCounter) -> Transaction {
    let n = counter.advance();

    Transaction {
        request: HttpMessage {
            body: String::new(),
            timestamp: PLACEHOLDER_TIMESTAMP.to_string(),
            headers: format!("GET /{n} HTTP/1.1\r\nHost: {REQUEST_HOST}\r\n\r\n"),
        },
        uuid: PLACEHOLDER_UUID.to_string(),
        response: HttpMessage {
            body: String::new(),
            timestamp: PLACEHOLDER_TIMESTAMP.to_string(),
            headers: "HTTP/1.1 200 OK\r\nCache-Control: max-age=31536000,public\r\n\
                      Content-Length: 564\r\nContent-Type: image/png\r\n\r\n"
                .to_string(),
        },
    }
}

/// Build `n` transactions in order, advancing the counter once per transaction
#[must_use]
pub fn build_txns(counter: &mut TxnCounter, n: usize) -> Vec<Transaction> {
    (0..n).map(|_| build_txn(counter)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let mut counter = TxnCounter::new();
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.advance(), 0);
        assert_eq!(counter.advance(), 1);
        assert_eq!(counter.current(), 2);
    }

    #[test]
    fn test_txn_embeds_counter_in_path() {
        let mut counter = TxnCounter::new();

        let first = build_txn(&mut counter);
        let second = build_txn(&mut counter);

        assert_eq!(
            first.request.headers,
            "GET /0 HTTP/1.1\r\nHost: s2.yimg.com\r\n\r\n"
        );
        assert_eq!(
            second.request.headers,
            "GET /1 HTTP/1.1\r\nHost: s2.yimg.com\r\n\r\n"
        );
    }

    #[test]
    fn test_txn_template_fields() {
        let mut counter = TxnCounter::new();
        let txn = build_txn(&mut counter);

        assert_eq!(txn.uuid, PLACEHOLDER_UUID);
        assert_eq!(txn.request.body, "");
        assert_eq!(txn.request.timestamp, PLACEHOLDER_TIMESTAMP);
        assert_eq!(txn.response.body, "");
        assert_eq!(txn.response.timestamp, PLACEHOLDER_TIMESTAMP);
        assert_eq!(
            txn.response.headers,
            "HTTP/1.1 200 OK\r\nCache-Control: max-age=31536000,public\r\n\
             Content-Length: 564\r\nContent-Type: image/png\r\n\r\n"
        );
    }

    #[test]
    fn test_build_txns_zero() {
        let mut counter = TxnCounter::new();
        assert!(build_txns(&mut counter, 0).is_empty());
        assert_eq!(counter.current(), 0);
    }

    #[test]
    fn test_txn_serializes_in_schema_order() {
        let mut counter = TxnCounter::new();
        let json = serde_json::to_string(&build_txn(&mut counter)).unwrap();

        let request_pos = json.find("\"request\"").unwrap();
        let uuid_pos = json.find("\"uuid\"").unwrap();
        let response_pos = json.find("\"response\"").unwrap();
        assert!(request_pos < uuid_pos && uuid_pos < response_pos);
    }

    proptest! {
        #[test]
        fn prop_txns_are_consecutive(n in 0usize..64) {
            let mut counter = TxnCounter::new();
            let txns = build_txns(&mut counter, n);

            prop_assert_eq!(txns.len(), n);
            prop_assert_eq!(counter.current(), n as u64);
            for (k, txn) in txns.iter().enumerate() {
                let expected = format!("GET /{k} HTTP/1.1\r\nHost: s2.yimg.com\r\n\r\n");
                prop_assert_eq!(&txn.request.headers, &expected);
            }
        }
    }
}
