//! On-chain chaincode definitions — the decoded result of a lookup.

use serde::{Deserialize, Serialize};

/// The active on-chain state of a chaincode, as consumers see it.
///
/// Downstream code (endorsement, validation, container start) depends
/// on this trait, not on the concrete decode target, so the payload
/// format can evolve without touching consumers.
pub trait ChaincodeDefinition: Send + Sync {
    /// Chaincode name as committed on the channel.
    fn cc_name(&self) -> &str;

    /// Committed version string.
    fn cc_version(&self) -> &str;

    /// Hash of the deployed code package.
    fn hash(&self) -> &[u8];

    /// Validation plugin name and its serialized policy argument.
    fn validation(&self) -> (&str, &[u8]);
}

/// JSON decode target for the lookup chaincode's `getccdata` payload.
///
/// All fields default so a payload from an older peer that omits
/// trailing fields still decodes. The facade guarantees only that the
/// decode succeeded — semantic validation belongs to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaincodeData {
    pub name: String,
    pub version: String,
    /// Endorsement plugin name.
    pub escc: String,
    /// Validation plugin name.
    pub vscc: String,
    /// Serialized validation policy.
    pub policy: Vec<u8>,
    /// Hash of the code package.
    pub data: Vec<u8>,
    /// Chaincode identity hash.
    pub id: Vec<u8>,
    /// Serialized instantiation policy.
    pub instantiation_policy: Vec<u8>,
}

impl ChaincodeDefinition for ChaincodeData {
    fn cc_name(&self) -> &str {
        &self.name
    }

    fn cc_version(&self) -> &str {
        &self.version
    }

    fn hash(&self) -> &[u8] {
        &self.data
    }

    fn validation(&self) -> (&str, &[u8]) {
        (&self.vscc, &self.policy)
    }
}
