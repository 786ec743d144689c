//! Fire-and-forget error notification with a process-wide default hook.
//!
//! The hook runs detached from the invocation: the failure outcome is
//! available immediately, while the notification (here a fake pager call)
//! completes on its own. A per-call hook would take precedence.
//!
//! Run with
//!
//! ```not_rust
//! cargo run --example error_hook
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

    let invoker = Invoker::new(
        InvokerConfig::new()
            .with_environment(Environment::Development)
            .with_on_error(|ctx| async move {
                // Pretend to page someone; failures here are contained.
                tokio::time::sleep(Duration::from_millis(100)).await;
                println!(
                    "paged on-call: {:?} failed after {} retries: {}",
                    ctx.tag, ctx.retry_count, ctx.error
                );
                Ok(())
            }),
    );

    let outcome = invoker
        .invoke(
            || async { Err::<(), _>("replica lag above threshold".to_string()) },
            InvokeOptions::new()
                .with_tag("replication-probe")
                .with_max_retries(2)
                .with_retry_delay(Duration::from_millis(50)),
        )
        .await;

    println!(
        "outcome settled first: failure with {} retries",
        outcome.retry_count()
    );

    // Give the detached notification a moment before the process exits.
    tokio::time::sleep(Duration::from_millis(200)).await;
}
