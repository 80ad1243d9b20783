//! Executor response types and the shared status contract.

use serde::{Deserialize, Serialize};

/// Status codes shared between chaincodes and the peer. The payload of
/// a response is only meaningful when the status is [`status::OK`].
pub mod status {
    pub const OK: i32 = 200;
    pub const ERROR: i32 = 500;
}

/// What an invocation returned: a status, a human-readable message
/// (populated on failure), and an opaque payload (populated on success).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Response {
    pub status: i32,
    pub message: String,
    pub payload: Vec<u8>,
}

impl Response {
    pub fn ok(payload: Vec<u8>) -> Self {
        Self {
            status: status::OK,
            message: String::new(),
            payload,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: status::ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    pub const fn is_ok(&self) -> bool {
        self.status == status::OK
    }
}

/// Event emitted by a chaincode during an invocation. The lifecycle
/// facade ignores these; the event hub consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaincodeEvent {
    pub chaincode_id: String,
    pub tx_id: String,
    pub event_name: String,
    pub payload: Vec<u8>,
}
