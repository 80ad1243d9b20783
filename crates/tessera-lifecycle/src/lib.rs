//! tessera-lifecycle — the chaincode lifecycle lookup facade.
//!
//! Answers two questions about an installed chaincode on a channel:
//! which deployment artifact backs it (delegated to the injected
//! [`DeploymentStore`]) and what its active on-chain definition is
//! (an invocation of the lookup system chaincode through the injected
//! [`Executor`], decoded from the response payload).
//!
//! The facade is stateless: it holds only its two capability handles
//! and is safe for concurrent use whenever they are.

pub mod capability;
pub mod context;
pub mod error;
pub mod lifecycle;

pub use capability::{DeploymentStore, Executor};
pub use context::{CcContext, ExecContext};
pub use error::LifecycleError;
pub use lifecycle::Lifecycle;
