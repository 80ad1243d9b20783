//! Opaque proposal carriers.
//!
//! Proposal signing and endorsement live elsewhere; the lifecycle
//! facade only threads these through to the executor as authorization
//! context. Nothing here is inspected or validated.

use bytes::Bytes;

/// A transaction proposal as received from a client.
#[derive(Debug, Clone, Default)]
pub struct Proposal {
    pub header: Bytes,
    pub payload: Bytes,
}

/// A proposal plus the client's signature over its bytes.
#[derive(Debug, Clone, Default)]
pub struct SignedProposal {
    pub proposal_bytes: Bytes,
    pub signature: Bytes,
}
