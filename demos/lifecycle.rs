//! Walks one unit through a few custodians and prints its provenance.
//!
//! Run with `RUST_LOG=debug` to see each dispatch.

use custody_ledger::{InMemoryLedgerStore, Request, Router};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let router = Router::new(InMemoryLedgerStore::new());

    let requests = [
        Request::new("init", Vec::<String>::new()),
        Request::new("record", ["D", "ACME", "BIRTH", "2020-01-01"]),
        Request::new("record", ["D", "ACME", "WEIGH", "2020-02-01"]),
        Request::new("record", ["D", "HAULCO", "SHIP", "2020-03-15"]),
        Request::new("query", ["D"]),
        Request::new("history", ["D"]),
        Request::new("query", ["nobody"]),
    ];

    for request in &requests {
        let response = router.invoke(request);
        if response.is_ok() {
            println!(
                "{} {:?} -> {}",
                request.function,
                request.args,
                String::from_utf8_lossy(&response.payload)
            );
        } else {
            println!(
                "{} {:?} -> error {}: {}",
                request.function, request.args, response.status, response.message
            );
        }
    }
}
