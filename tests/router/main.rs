//! Router integration tests: the request/response surface end to end.

#[path = "../support/mod.rs"]
mod support;

use custody_ledger::{
    HandlerError, InMemoryLedgerStore, LedgerStore, Operation, Record, Request, Router,
    RouterConfig, SeedMode, INIT_ACK, RECORD_ACK,
};
use serde_json::{json, Value};
use support::ScriptedStore;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// --- Scenarios ---

#[test]
fn init_seeds_fixtures() {
    let router = Router::new(InMemoryLedgerStore::new());
    assert_eq!(router.dispatch("init", &[]).unwrap(), INIT_ACK);

    let payload = router.dispatch("query", &args(&["A"])).unwrap();
    assert_eq!(
        Record::deserialize(&payload).unwrap(),
        Record::build("A", "LUX", "FEED", "2018-10-25")
    );
}

#[test]
fn record_then_query_returns_persisted_layout() {
    let router = Router::new(InMemoryLedgerStore::new());
    assert_eq!(
        router
            .dispatch("record", &args(&["D", "ACME", "WEIGH", "2020-01-01"]))
            .unwrap(),
        RECORD_ACK
    );

    let payload = router.dispatch("query", &args(&["D"])).unwrap();
    let value: Value = serde_json::from_slice(&payload).unwrap();
    assert_eq!(
        value,
        json!({"pigid":"D","timestamp":"2020-01-01","company":"ACME","actionname":"WEIGH"})
    );
}

#[test]
fn history_after_single_record() {
    let router = Router::new(InMemoryLedgerStore::new());
    router
        .dispatch("record", &args(&["D", "ACME", "WEIGH", "2020-01-01"]))
        .unwrap();

    let payload = router.dispatch("history", &args(&["D"])).unwrap();
    let doc: Value = serde_json::from_slice(&payload).unwrap();
    let entries = doc.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0]["value"],
        json!({"pigid":"D","timestamp":"2020-01-01","company":"ACME","actionname":"WEIGH"})
    );
    let commit_time = entries[0]["commitTime"].as_str().unwrap();
    assert!(commit_time.ends_with(" +0000 UTC"), "{}", commit_time);
    assert!(!entries[0]["commitId"].as_str().unwrap().is_empty());
}

#[test]
fn history_tracks_every_record_while_query_sees_the_last() {
    let router = Router::new(InMemoryLedgerStore::new());
    let events = [
        ("LUX", "FEED", "2018-10-25"),
        ("NTUB", "WEIGH", "2018-10-24"),
        ("TEST", "SHIP", "2018-10-30"),
    ];
    for (custodian, action, timestamp) in events {
        router
            .dispatch("record", &args(&["P", custodian, action, timestamp]))
            .unwrap();
    }

    let doc: Value =
        serde_json::from_slice(&router.dispatch("history", &args(&["P"])).unwrap()).unwrap();
    let companies: Vec<&str> = doc
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["value"]["company"].as_str().unwrap())
        .collect();
    assert_eq!(companies, vec!["LUX", "NTUB", "TEST"]);

    let current =
        Record::deserialize(&router.dispatch("query", &args(&["P"])).unwrap()).unwrap();
    assert_eq!(current, Record::build("P", "TEST", "SHIP", "2018-10-30"));
}

#[test]
fn history_of_known_empty_key_is_literal_empty_array() {
    let store = ScriptedStore::new();
    store.script_history("E", Vec::new());
    let router = Router::new(store);

    assert_eq!(router.dispatch("history", &args(&["E"])).unwrap(), b"[]");
}

#[test]
fn query_reads_records_stored_without_action() {
    let store = InMemoryLedgerStore::new();
    store
        .put_state(
            "B",
            br#"{"pigid":"B","timestamp":"2018-10-26","company":"NTUB"}"#.to_vec(),
        )
        .unwrap();
    let router = Router::new(store);

    let query = router.invoke(&Request::new("query", ["B"]));
    assert!(query.is_ok(), "{}", query.message);
    assert_eq!(
        Record::deserialize(&query.payload).unwrap(),
        Record::build("B", "NTUB", "", "2018-10-26")
    );

    let history = router.invoke(&Request::new("history", ["B"]));
    assert!(history.is_ok());
}

// --- Failures ---

#[test]
fn query_never_written_is_not_found() {
    let router = Router::new(InMemoryLedgerStore::new());
    let err = router.dispatch("query", &args(&["nope"])).unwrap_err();
    assert_eq!(
        err,
        HandlerError::NotFound {
            operation: Operation::Query,
            id: "nope".into()
        }
    );
}

#[test]
fn history_never_written_is_not_found() {
    let router = Router::new(InMemoryLedgerStore::new());
    let err = router.dispatch("history", &args(&["nope"])).unwrap_err();
    assert!(matches!(
        err,
        HandlerError::NotFound {
            operation: Operation::History,
            ..
        }
    ));
}

#[test]
fn wrong_arity_touches_nothing() {
    let store = ScriptedStore::new();
    let router = Router::new(store);

    let cases: [(&str, Vec<String>); 6] = [
        ("record", args(&["D", "ACME", "WEIGH"])),
        ("record", args(&["D", "ACME", "WEIGH", "2020-01-01", "extra"])),
        ("query", args(&[])),
        ("query", args(&["A", "B"])),
        ("history", args(&[])),
        ("init", args(&["A"])),
    ];
    for (function, arguments) in &cases {
        let err = router.dispatch(function, arguments).unwrap_err();
        match err {
            HandlerError::ArgumentCount {
                operation,
                expected,
                actual,
            } => {
                assert_eq!(operation.name(), *function);
                assert_eq!(expected, operation.arity());
                assert_eq!(actual, arguments.len());
            }
            other => panic!("unexpected error: {}", other),
        }
    }
    assert_eq!(router.store().store_calls(), 0);
}

#[test]
fn unknown_operation_touches_nothing() {
    let router = Router::new(ScriptedStore::new());
    for name in ["delete", "QUERY", ""] {
        assert_eq!(
            router.dispatch(name, &args(&["A"])).unwrap_err(),
            HandlerError::UnknownOperation(name.to_string())
        );
    }
    assert_eq!(router.store().store_calls(), 0);
}

#[test]
fn record_store_failure_is_failure_response() {
    let store = ScriptedStore::new();
    store.fail_puts();
    let router = Router::new(store);

    let response = router.invoke(&Request::new("record", ["D", "ACME", "WEIGH", "2020-01-01"]));
    assert!(!response.is_ok());
    assert_eq!(response.status, 500);
    assert!(response.payload.is_empty());
    assert!(response.message.contains("record"));
    assert!(response.message.contains("D"));
}

#[test]
fn history_iteration_failure_returns_no_document() {
    let store = ScriptedStore::new();
    store.put_state("A", b"{}".to_vec()).unwrap();
    store.put_state("A", b"{}".to_vec()).unwrap();
    store.fail_next_at(1);
    let router = Router::new(store);

    let response = router.invoke(&Request::new("history", ["A"]));
    assert_eq!(response.status, 500);
    assert!(response.payload.is_empty());
    assert_eq!(router.store().closed(), 1);
}

#[test]
fn query_of_corrupt_value_is_serialization_error() {
    let store = InMemoryLedgerStore::new();
    store.put_state("X", b"\xff\xfe".to_vec()).unwrap();
    let router = Router::new(store);

    assert!(matches!(
        router.dispatch("query", &args(&["X"])).unwrap_err(),
        HandlerError::Serialization { ref id, .. } if id == "X"
    ));
}

// --- Request surface and configuration ---

#[test]
fn legacy_names_route_to_the_same_operations() {
    let router = Router::new(InMemoryLedgerStore::new());
    let init = router.invoke(&Request::from_args(args(&["initLedger"])));
    assert_eq!(init.payload, INIT_ACK);

    let add = router.invoke(&Request::from_args(args(&[
        "recordPig",
        "D",
        "ACME",
        "WEIGH",
        "2020-01-01",
    ])));
    assert!(add.is_ok());

    let query = router.invoke(&Request::from_args(args(&["queryPig", "D"])));
    assert_eq!(
        Record::deserialize(&query.payload).unwrap().custodian,
        "ACME"
    );

    let history = router.invoke(&Request::from_args(args(&["queryPigHistory", "A"])));
    assert!(history.is_ok());
}

#[test]
fn empty_request_is_unknown_operation() {
    let router = Router::new(InMemoryLedgerStore::new());
    let response = router.invoke(&Request::from_args(Vec::new()));
    assert_eq!(response.status, 400);
}

#[test]
fn init_without_seeding() {
    let config = RouterConfig::from_json(r#"{"seed":"skip"}"#).unwrap();
    assert_eq!(config.seed, SeedMode::Skip);
    let router = Router::with_config(InMemoryLedgerStore::new(), config);

    assert_eq!(router.dispatch("init", &[]).unwrap(), INIT_ACK);
    assert!(matches!(
        router.dispatch("query", &args(&["A"])).unwrap_err(),
        HandlerError::NotFound { .. }
    ));
}
