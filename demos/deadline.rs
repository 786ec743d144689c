//! A timeout race: the timer wins against a stalled upstream.
//!
//! Run with
//!
//! ```not_rust
//! cargo run --example deadline
//! ```

use ensure::prelude::*;
use std::time::Duration;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let invoker = Invoker::default();

    let outcome = invoker
        .invoke(
            || async {
                // Upstream never answers.
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok::<_, String>("unreachable")
            },
            InvokeOptions::new()
                .with_tag("stalled-upstream")
                .with_timeout(Duration::from_millis(250))
                .with_max_retries(1),
        )
        .await;

    let error = outcome.error().expect("the timer always wins here");
    println!(
        "timed out as expected ({} retries): {error}",
        outcome.retry_count()
    );
    assert!(error.is_timeout());
}
