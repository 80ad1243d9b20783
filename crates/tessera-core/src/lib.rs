//! tessera-core — shared ledger protocol types and configuration.
//! All other Tessera crates depend on this one.

pub mod chaincode;
pub mod config;
pub mod definition;
pub mod deployment;
pub mod proposal;
pub mod response;

pub use chaincode::{ChaincodeId, ChaincodeInvocationSpec, ChaincodeKind, ChaincodeSpec};
pub use definition::{ChaincodeData, ChaincodeDefinition};
