//! Capability contracts between the lifecycle facade and the peer.
//!
//! Intentionally minimal. The facade depends on these two traits and
//! never on concrete execution-engine or store types, so test doubles
//! substitute cleanly.

use anyhow::Result;

use tessera_core::chaincode::ChaincodeInvocationSpec;
use tessera_core::deployment::ChaincodeDeploymentSpec;
use tessera_core::response::{ChaincodeEvent, Response};

use crate::context::{CcContext, ExecContext};

/// Invokes chaincode on behalf of the facade.
///
/// Implementations must honor cancellation signaled through the
/// [`ExecContext`]: a canceled context is reported as an error, never
/// a hang. A non-OK [`Response`] is not an `Err` — it is a semantic
/// outcome the caller interprets.
#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    async fn execute(
        &self,
        ctx: &ExecContext,
        cc_ctx: &CcContext,
        spec: &ChaincodeInvocationSpec,
    ) -> Result<(Response, Option<ChaincodeEvent>)>;
}

/// Returns deployment artifacts for instantiated chaincodes.
pub trait DeploymentStore: Send + Sync {
    fn chaincode_deployment_spec(
        &self,
        channel_id: &str,
        chaincode_name: &str,
    ) -> Result<ChaincodeDeploymentSpec>;
}
