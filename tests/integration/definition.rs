//! Definition resolution — success and the three failure conditions.

use crate::*;
use std::error::Error as _;
use tessera_lifecycle::LifecycleError;

/// Decoded fields come back exactly as the lookup chaincode committed
/// them.
#[tokio::test]
async fn decoded_definition_matches_committed_state() {
    let (facade, ledger, _) = harness();
    let mut committed = definition("inventory", "v7");
    committed.policy = vec![1, 2, 3];
    ledger.commit("trade", "inventory", committed.clone());

    let cd = facade
        .get_chaincode_definition(&ExecContext::new(), "tx9", None, None, "trade", "inventory")
        .await
        .unwrap();

    assert_eq!(cd, committed);
    // Trait view agrees with the struct.
    use tessera_core::definition::ChaincodeDefinition;
    assert_eq!(cd.cc_version(), "v7");
    assert_eq!(cd.validation(), ("vscc", &[1u8, 2, 3][..]));
}

/// An uncommitted chaincode is a semantic failure, reported through the
/// Application variant with the lookup chaincode's message verbatim.
#[tokio::test]
async fn unknown_chaincode_is_application_error() {
    let (facade, _, _) = harness();

    let err = facade
        .get_chaincode_definition(&ExecContext::new(), "tx1", None, None, "trade", "ghost")
        .await
        .unwrap_err();

    match &err {
        LifecycleError::Application { message, .. } => {
            assert!(message.contains("does not exist"));
        }
        other => panic!("expected Application, got {other:?}"),
    }
    assert!(err.to_string().contains("trade/ghost"));
}

/// A definition committed on one channel is invisible on another.
#[tokio::test]
async fn definitions_are_scoped_per_channel() {
    let (facade, ledger, _) = harness();
    ledger.commit("ch-a", "cc", definition("cc", "v1"));

    assert!(facade
        .get_chaincode_definition(&ExecContext::new(), "tx", None, None, "ch-a", "cc")
        .await
        .is_ok());

    let err = facade
        .get_chaincode_definition(&ExecContext::new(), "tx", None, None, "ch-b", "cc")
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::Application { .. }));
}

/// A payload that claims success but does not parse is a Decode error,
/// never an Application error.
#[tokio::test]
async fn corrupt_payload_is_decode_error() {
    struct CorruptExecutor;

    #[async_trait::async_trait]
    impl Executor for CorruptExecutor {
        async fn execute(
            &self,
            _ctx: &ExecContext,
            _cc_ctx: &CcContext,
            _spec: &ChaincodeInvocationSpec,
        ) -> anyhow::Result<(Response, Option<ChaincodeEvent>)> {
            Ok((Response::ok(b"\xff\xfe garbage".to_vec()), None))
        }
    }

    let facade = Lifecycle::new(
        std::sync::Arc::new(CorruptExecutor),
        std::sync::Arc::new(StoreDouble::new()),
    );
    let err = facade
        .get_chaincode_definition(&ExecContext::new(), "tx", None, None, "ch", "cc")
        .await
        .unwrap_err();

    assert!(matches!(err, LifecycleError::Decode { .. }));
    assert!(err.source().is_some(), "decode cause must be preserved");
}

/// Executor transport failure surfaces as Execution with the cause
/// chained, distinguishable from both Application and Decode.
#[tokio::test]
async fn transport_failure_is_execution_error() {
    struct DownExecutor;

    #[async_trait::async_trait]
    impl Executor for DownExecutor {
        async fn execute(
            &self,
            _ctx: &ExecContext,
            _cc_ctx: &CcContext,
            _spec: &ChaincodeInvocationSpec,
        ) -> anyhow::Result<(Response, Option<ChaincodeEvent>)> {
            Err(anyhow!("engine unavailable"))
        }
    }

    let facade = Lifecycle::new(
        std::sync::Arc::new(DownExecutor),
        std::sync::Arc::new(StoreDouble::new()),
    );
    let err = facade
        .get_chaincode_definition(&ExecContext::new(), "tx", None, None, "ch", "cc")
        .await
        .unwrap_err();

    match &err {
        LifecycleError::Execution { .. } => {}
        other => panic!("expected Execution, got {other:?}"),
    }
    assert_eq!(err.source().unwrap().to_string(), "engine unavailable");
}
