//! The lifecycle facade — deployment lookup and definition resolution.

use std::sync::Arc;

use tessera_core::chaincode::{lookup_ops, ChaincodeInvocationSpec};
use tessera_core::config::LifecycleSettings;
use tessera_core::definition::ChaincodeData;
use tessera_core::deployment::ChaincodeDeploymentSpec;
use tessera_core::proposal::{Proposal, SignedProposal};

use crate::capability::{DeploymentStore, Executor};
use crate::context::{CcContext, ExecContext};
use crate::error::LifecycleError;

/// Resolves chaincode metadata through two injected capabilities.
///
/// Holds no state between calls; cloning shares the capability handles.
#[derive(Clone)]
pub struct Lifecycle {
    executor: Arc<dyn Executor>,
    store: Arc<dyn DeploymentStore>,
    settings: LifecycleSettings,
}

impl Lifecycle {
    pub fn new(executor: Arc<dyn Executor>, store: Arc<dyn DeploymentStore>) -> Self {
        Self::with_settings(executor, store, LifecycleSettings::default())
    }

    pub fn with_settings(
        executor: Arc<dyn Executor>,
        store: Arc<dyn DeploymentStore>,
        settings: LifecycleSettings,
    ) -> Self {
        Self {
            executor,
            store,
            settings,
        }
    }

    /// Retrieve the deployment spec backing `chaincode_name` on
    /// `channel_id`. Pass-through to the store, with call context
    /// attached to any failure.
    pub fn get_chaincode_deployment_spec(
        &self,
        channel_id: &str,
        chaincode_name: &str,
    ) -> Result<ChaincodeDeploymentSpec, LifecycleError> {
        self.store
            .chaincode_deployment_spec(channel_id, chaincode_name)
            .map_err(|source| LifecycleError::StoreLookup {
                channel_id: channel_id.to_string(),
                chaincode_name: chaincode_name.to_string(),
                source,
            })
    }

    /// Resolve the active on-chain definition of `chaincode_id` on
    /// `channel_id` by invoking the lookup system chaincode.
    ///
    /// The invocation runs under `tx_id` with the supplied proposal
    /// material as authorization context. A fresh invocation spec is
    /// built per call; nothing is cached or retried.
    pub async fn get_chaincode_definition(
        &self,
        ctx: &ExecContext,
        tx_id: &str,
        signed_proposal: Option<SignedProposal>,
        proposal: Option<Proposal>,
        channel_id: &str,
        chaincode_id: &str,
    ) -> Result<ChaincodeData, LifecycleError> {
        let cc_ctx = CcContext::new(
            channel_id,
            &self.settings.lookup_chaincode,
            self.settings.resolved_syscc_version(),
            tx_id,
            true,
            signed_proposal,
            proposal,
        );

        let spec = ChaincodeInvocationSpec::native(
            &self.settings.lookup_chaincode,
            [lookup_ops::GET_CC_DATA, channel_id, chaincode_id],
        );

        tracing::debug!(
            channel = channel_id,
            chaincode = chaincode_id,
            target = %self.settings.lookup_chaincode,
            "resolving chaincode definition"
        );

        let (response, _event) = self
            .executor
            .execute(ctx, &cc_ctx, &spec)
            .await
            .map_err(|source| LifecycleError::Execution {
                channel_id: channel_id.to_string(),
                chaincode_id: chaincode_id.to_string(),
                source,
            })?;

        if !response.is_ok() {
            return Err(LifecycleError::Application {
                channel_id: channel_id.to_string(),
                chaincode_id: chaincode_id.to_string(),
                status: response.status,
                message: response.message,
            });
        }

        let definition: ChaincodeData =
            serde_json::from_slice(&response.payload).map_err(|source| {
                LifecycleError::Decode {
                    channel_id: channel_id.to_string(),
                    chaincode_id: chaincode_id.to_string(),
                    source,
                }
            })?;

        tracing::debug!(
            chaincode = chaincode_id,
            version = %definition.version,
            id = %hex::encode(&definition.id),
            "chaincode definition resolved"
        );

        Ok(definition)
    }
}
