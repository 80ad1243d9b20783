//! Deployment artifacts — what backs an installed chaincode.
//!
//! A deployment spec is produced by the peer's deployment store and
//! forwarded opaquely by the lifecycle facade. Container info is the
//! flattened descriptor the container runtime consumes to materialize
//! an instance.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::chaincode::{ChaincodeKind, ChaincodeSpec};

/// How a chaincode instance is hosted. Closed set — anything else is
/// invalid input to the container runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContainerType {
    Docker,
    System,
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Docker => write!(f, "DOCKER"),
            Self::System => write!(f, "SYSTEM"),
        }
    }
}

impl FromStr for ContainerType {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DOCKER" => Ok(Self::Docker),
            "SYSTEM" => Ok(Self::System),
            other => Err(ProtocolError::UnknownContainerType(other.to_string())),
        }
    }
}

/// A chaincode deployment artifact: the spec it was installed under,
/// the code package bytes, and the execution environment.
#[derive(Debug, Clone)]
pub struct ChaincodeDeploymentSpec {
    pub chaincode_spec: ChaincodeSpec,
    pub code_package: Bytes,
    pub exec_env: ContainerType,
}

impl ChaincodeDeploymentSpec {
    /// BLAKE3 hash of the code package bytes.
    pub fn code_hash(&self) -> [u8; 32] {
        *blake3::hash(&self.code_package).as_bytes()
    }

    /// Flatten into the descriptor the container runtime consumes.
    pub fn container_info(&self) -> ChaincodeContainerInfo {
        ChaincodeContainerInfo {
            name: self.chaincode_spec.chaincode_id.name.clone(),
            version: self.chaincode_spec.chaincode_id.version.clone(),
            path: self.chaincode_spec.chaincode_id.path.clone(),
            kind: self.chaincode_spec.kind,
            container_type: self.exec_env,
        }
    }
}

/// The data required to start or stop a chaincode instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeContainerInfo {
    pub name: String,
    pub version: String,
    pub path: String,
    pub kind: ChaincodeKind,
    pub container_type: ContainerType,
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Errors that can arise when interpreting deployment data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unknown container type: {0}")]
    UnknownContainerType(String),
}
