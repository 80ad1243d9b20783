//! Lifecycle error taxonomy.
//!
//! Four distinct conditions, because callers act on them differently:
//! a store failure, an executor/transport failure, a semantic non-OK
//! response from the lookup chaincode, and a payload that claimed
//! success but failed to decode. None are collapsed, retried, or
//! logged-and-swallowed — every error carries the identifying
//! (channel, chaincode) pair and preserves its cause.

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// The deployment store failed.
    #[error("could not retrieve deployment spec for {channel_id}/{chaincode_name}")]
    StoreLookup {
        channel_id: String,
        chaincode_name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The executor itself failed (infrastructure or transport).
    #[error("getccdata {channel_id}/{chaincode_id} failed")]
    Execution {
        channel_id: String,
        chaincode_id: String,
        #[source]
        source: anyhow::Error,
    },

    /// The lookup chaincode ran but answered with a non-OK status,
    /// e.g. the chaincode is unknown or not instantiated. The status
    /// and message are carried verbatim.
    #[error("getccdata {channel_id}/{chaincode_id} responded with status {status}: {message}")]
    Application {
        channel_id: String,
        chaincode_id: String,
        status: i32,
        message: String,
    },

    /// The lookup chaincode claimed success but its payload did not
    /// decode as a definition — a protocol-contract violation, distinct
    /// from "not found".
    #[error("failed to decode chaincode definition for {channel_id}/{chaincode_id}")]
    Decode {
        channel_id: String,
        chaincode_id: String,
        #[source]
        source: serde_json::Error,
    },
}
