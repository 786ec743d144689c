//! The simplest invocation: retry a flaky call with exponential backoff.
//!
//! Run with
//!
//! ```not_rust
//! cargo run --example basic
//! ```

use ensure::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let invoker = Invoker::new(InvokerConfig::new());

    // Fails twice, then delivers.
    let calls = Arc::new(AtomicU32::new(0));
    let calls_clone = calls.clone();

    let outcome = invoker
        .invoke(
            move || {
                let calls = calls_clone.clone();
                async move {
                    let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
                    if call < 3 {
                        Err(format!("exchange rate service unavailable (call {call})"))
                    } else {
                        Ok(1.0843_f64)
                    }
                }
            },
            InvokeOptions::new()
                .with_tag("eur-usd")
                .with_max_retries(4)
                .with_retry_delay(Duration::from_millis(50))
                .with_backoff(Backoff::Exponential)
                .with_on_retry(|attempt, cause| {
                    println!("retry {attempt} scheduled after: {cause}");
                }),
        )
        .await;

    match outcome {
        InvokeOutcome::Success { data, retry_count } => {
            println!("rate {data} obtained after {retry_count} retries");
        }
        InvokeOutcome::Failure { error, retry_count } => {
            println!("gave up after {retry_count} retries: {error}");
        }
    }
}
