//! Match-Entry Draft Pipeline
//!
//! This module implements the staging pipeline for the administrative
//! match-entry workflow:
//!
//! - **manager**: in-memory DraftManager holding one match's unsubmitted
//!   events, with referential cleanup on removal
//! - **validator**: pure whole-draft consistency check, partitioned by
//!   event category
//! - **submit**: SubmissionPipeline flushing a validated draft into the
//!   backing store as an ordered sequence of dependent writes
//!
//! # Data Flow
//!
//! ```text
//! Operator action → DraftManager → DraftEvent broadcast
//!                        ↓
//!                    snapshot()
//!                        ↓
//!                  validate(&draft) ──→ ValidationReport (UI gates submit)
//!                        ↓
//!            SubmissionPipeline::submit ──→ MatchStore writes
//!                                             ↓
//!                                       ReadViews refresh
//! ```

pub mod manager;
pub mod submit;
pub mod validator;

// Re-exports
pub use manager::DraftManager;
pub use submit::{SubmissionPipeline, SubmissionSummary, SubmitError, SubmitResult};
pub use validator::validate;

// Re-export shared types for convenience
pub use shared::draft::{DraftEvent, MatchDraft};
pub use shared::validation::{EntryCategory, ValidationReport};
