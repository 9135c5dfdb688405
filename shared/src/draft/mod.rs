//! Match-entry draft types
//!
//! Types for the administrative match-entry workflow:
//! - Inputs: what the entry forms capture
//! - Drafted entries: inputs plus a client-generated draft id
//! - Snapshot: the [`MatchDraft`] aggregate consumed by the validator and
//!   the submission pipeline
//! - Events: change notifications for subscribed UI surfaces

pub mod event;
pub mod snapshot;
pub mod types;

// Re-exports
pub use event::DraftEvent;
pub use snapshot::MatchDraft;
pub use types::*;
