//! Per-call context values threaded through the executor.
//!
//! `ExecContext` carries cancellation: the facade forwards it untouched
//! and imposes no timeout of its own. `CcContext` binds one invocation
//! to its target identity and authorization material; it is built fresh
//! per call and never cached.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tessera_core::proposal::{Proposal, SignedProposal};

/// Cancellation handle for one executor call.
///
/// Clones share the same flag. Executors are expected to poll
/// [`ExecContext::is_cancelled`] (or check it at suspension points) and
/// abandon work once it reports true.
#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl ExecContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that reports cancelled once `deadline` has passed.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Signal cancellation to every clone of this context.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return true;
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Identity and authorization binding for one chaincode invocation.
#[derive(Debug, Clone)]
pub struct CcContext {
    /// Channel the invocation runs against.
    pub channel_id: String,
    /// Target chaincode name.
    pub name: String,
    /// Target chaincode version tag.
    pub version: String,
    /// Transaction id the invocation executes under.
    pub tx_id: String,
    /// True when the target is a system chaincode.
    pub syscc: bool,
    /// The client's signed proposal, when one exists.
    pub signed_proposal: Option<SignedProposal>,
    /// The raw proposal, when one exists.
    pub proposal: Option<Proposal>,
}

impl CcContext {
    pub fn new(
        channel_id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        tx_id: impl Into<String>,
        syscc: bool,
        signed_proposal: Option<SignedProposal>,
        proposal: Option<Proposal>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            name: name.into(),
            version: version.into(),
            tx_id: tx_id.into(),
            syscc,
            signed_proposal,
            proposal,
        }
    }
}
