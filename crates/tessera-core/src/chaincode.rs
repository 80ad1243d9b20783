//! Chaincode identity and invocation types.
//!
//! An invocation spec is the structured request handed to the executor:
//! which chaincode to run, under which runtime kind, with which
//! positional byte arguments. Specs are ephemeral — built fresh per
//! call, never cached or mutated after construction.

use serde::{Deserialize, Serialize};

/// Name of the well-known lookup system chaincode. Every channel runs
/// one; it answers metadata queries about other chaincodes.
pub const LOOKUP_CHAINCODE: &str = "lscc";

/// Well-known operation names understood by the lookup chaincode.
pub mod lookup_ops {
    /// Fetch the active on-chain definition of a chaincode.
    pub const GET_CC_DATA: &str = "getccdata";
}

/// Runtime kind discriminator for a chaincode spec.
///
/// System chaincodes (including the lookup chaincode) always run
/// `Native`, in-process on the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ChaincodeKind {
    Native = 1,
    Wasm = 2,
    External = 3,
}

impl ChaincodeKind {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Native),
            2 => Some(Self::Wasm),
            3 => Some(Self::External),
            _ => None,
        }
    }
}

/// Identity of a chaincode as named inside a spec.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaincodeId {
    pub name: String,
    pub version: String,
    /// Source path of the code package. Empty for system chaincodes.
    pub path: String,
}

impl ChaincodeId {
    /// Identity with a name only — enough to target an invocation.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Positional arguments for an invocation, already in the executor's
/// byte encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChaincodeInput {
    pub args: Vec<Vec<u8>>,
}

/// Encode string arguments as the executor expects them (UTF-8 bytes,
/// order preserved).
pub fn chaincode_args<I, S>(args: I) -> Vec<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|a| a.as_ref().as_bytes().to_vec())
        .collect()
}

/// What to run and with what input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeSpec {
    pub kind: ChaincodeKind,
    pub chaincode_id: ChaincodeId,
    pub input: ChaincodeInput,
}

/// The structured request submitted to the executor for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeInvocationSpec {
    pub chaincode_spec: ChaincodeSpec,
}

impl ChaincodeInvocationSpec {
    pub fn new(chaincode_spec: ChaincodeSpec) -> Self {
        Self { chaincode_spec }
    }

    /// Shorthand for the common case: invoke `name` natively with
    /// string arguments.
    pub fn native<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(ChaincodeSpec {
            kind: ChaincodeKind::Native,
            chaincode_id: ChaincodeId::named(name),
            input: ChaincodeInput {
                args: chaincode_args(args),
            },
        })
    }
}
