//! # Observability & Tracing
//!
//! Structured logging for the whole system, built on `tracing`.
//!
//! ## What Gets Traced
//!
//! - **Shard lifecycle**: startup and shutdown with final record counts
//! - **Store operations**: Create, Get, Update, Delete, List per shard
//! - **Service operations**: one span per call (`create`, `transition`, ...) with
//!   the resource kind as a field
//! - **Failures**: rejected transitions and version conflicts with ids and reasons
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and outcomes
//! RUST_LOG=debug cargo run     # full payloads
//! RUST_LOG=resource_framework=debug,order_links=info cargo run
//! ```
//!
//! With `RUST_LOG=info`, cancelling an order reads:
//!
//! ```text
//! INFO transition{kind="order" id=ResourceId(2) action=Cancel}: Updated kind="order" shard=2 id=2 version=2 status=CANCELLED
//! INFO transition{kind="order" id=ResourceId(2) action=Cancel}: Transitioned id=2 action=cancel status=CANCELLED
//! ```
//!
//! The module path is hidden (`with_target(false)`); the `kind` field identifies
//! which resource a line belongs to.

/// Initializes the global subscriber. Filtering comes from `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
