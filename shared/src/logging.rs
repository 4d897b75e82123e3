//! Shared logging utilities for consistent tracing across both binaries

use tracing_subscriber::{fmt, EnvFilter};

/// Build the default per-crate filter string for a service
///
/// Noisy HTTP internals are pinned to warn so request logs stay readable
/// at debug level.
pub fn default_filter(service: &str, base_level: &str) -> String {
    match service {
        "webserver" => {
            format!("webserver={base_level},planner={base_level},shared={base_level},tower=warn,hyper=warn,axum={base_level}")
        }
        _ => format!("planner={base_level},shared={base_level}"),
    }
}

/// Initialize the stdout tracing subscriber for a service
///
/// `RUST_LOG` overrides the computed filter when set, matching the usual
/// tracing-subscriber behavior.
pub fn init_tracing(service: &str, log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(service, base_level));

    fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
