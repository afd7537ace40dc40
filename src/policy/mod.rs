//! Remote-content decision pipeline.
//!
//! Each newly arrived message flows through:
//! 1. Idempotency guard — messages that already carry a decision are skipped
//! 2. `matcher` — folder-name regex tests for the configured rules
//! 3. Decision write — the winning rule's policy is persisted via the host
//!
//! The engine holds no durable state of its own; everything lives in the
//! host's per-message property store and configuration store.

pub mod engine;
pub mod matcher;
pub mod types;
