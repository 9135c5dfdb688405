//! Match-entry core for the league site
//!
//! In-process pipeline behind the administrative match-entry workflow: an
//! operator stages a finished match's events in a local draft, the draft
//! is validated as a whole, and on final submit it is flushed to the
//! backing store as an ordered sequence of dependent writes. The UI layer
//! and the storage layer are external collaborators; see [`store`] for the
//! boundaries this crate consumes.

pub mod draft;
pub mod store;

// Re-exports
pub use draft::{
    DraftManager, SubmissionPipeline, SubmissionSummary, SubmitError, SubmitResult, validate,
};
pub use store::{MatchStore, MatchView, ReadViews, StoreError, StoreResult};
