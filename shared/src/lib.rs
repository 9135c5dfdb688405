//! Shared types for the match-entry core
//!
//! Common types used across the match-entry pipeline and its UI and
//! backend collaborators: draft entities, the draft aggregate, change
//! events, validation reports, and store record types.

pub mod draft;
pub mod models;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Draft re-exports (for convenient access)
pub use draft::{DraftEvent, MatchDraft};
pub use validation::{EntryCategory, ValidationReport};
