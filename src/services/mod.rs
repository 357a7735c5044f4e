//! Service layer containing business logic.
//!
//! ## Service map
//! - `reference.rs` — lexical classification of channel references.
//! - `resolver.rs` — extract → search → backfill resolution chain.
//! - `diagnostics.rs` — probe + resolve orchestration into a report.
//! - `masking.rs` — API key display masking.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - The transport and the configured key are parameters, never globals.
//! - Keep command handlers thin; delegate to services.

pub mod diagnostics;
pub mod masking;
pub mod output;
pub mod reference;
pub mod resolver;

#[cfg(test)]
pub mod testing;
