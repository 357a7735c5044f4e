//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — channel info, checks and the diagnostics envelope.
//! - `constants.rs` — well-known channel IDs, endpoints and env var names.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no network side effects.
//!
//! ## Compatibility note
//! Field names here are the `--json` contract of `diagnose`.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
