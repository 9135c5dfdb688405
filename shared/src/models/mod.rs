//! Data models
//!
//! Store-side records and create/update payloads shared between the
//! match-entry core and the backend services. All store-issued IDs are
//! `i64`; draft-local references never appear in these types.

pub mod assist;
pub mod coach;
pub mod fixture;
pub mod goal;
pub mod lineup;
pub mod penalty;
pub mod substitution;

// Re-exports
pub use assist::*;
pub use coach::*;
pub use fixture::*;
pub use goal::*;
pub use lineup::*;
pub use penalty::*;
pub use substitution::*;
