//! Concurrent callers against shared capability handles.
//!
//! The facade is stateless, so independent (channel, chaincode) pairs
//! resolved in parallel must never interleave or corrupt each other's
//! results.

use crate::*;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_lookups_resolve_independently() {
    let (facade, ledger, _) = harness();

    const CALLERS: usize = 32;
    for i in 0..CALLERS {
        ledger.commit(
            &format!("ch-{i}"),
            &format!("cc-{i}"),
            definition(&format!("cc-{i}"), &format!("v{i}")),
        );
    }

    let mut handles = Vec::new();
    for i in 0..CALLERS {
        let facade = facade.clone();
        handles.push(tokio::spawn(async move {
            let cd = facade
                .get_chaincode_definition(
                    &ExecContext::new(),
                    &format!("tx-{i}"),
                    None,
                    None,
                    &format!("ch-{i}"),
                    &format!("cc-{i}"),
                )
                .await
                .expect("each pair was committed");
            (i, cd)
        }));
    }

    for handle in handles {
        let (i, cd) = handle.await.unwrap();
        // Every caller got exactly its own pair's definition back.
        assert_eq!(cd.name, format!("cc-{i}"));
        assert_eq!(cd.version, format!("v{i}"));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn mixed_hits_and_misses_stay_isolated() {
    let (facade, ledger, _) = harness();
    ledger.commit("ch", "present", definition("present", "v1"));

    let hit = {
        let facade = facade.clone();
        tokio::spawn(async move {
            facade
                .get_chaincode_definition(&ExecContext::new(), "tx", None, None, "ch", "present")
                .await
        })
    };
    let miss = {
        let facade = facade.clone();
        tokio::spawn(async move {
            facade
                .get_chaincode_definition(&ExecContext::new(), "tx", None, None, "ch", "missing")
                .await
        })
    };

    assert_eq!(hit.await.unwrap().unwrap().version, "v1");
    assert!(miss.await.unwrap().is_err());
}
