//! # hireline-shared
//!
//! Domain types shared by every crate of the candidate pipeline client:
//! the [`Candidate`] record with its draft and patch payloads, the closed
//! status enumeration, the pre-submit field checks, and the sample data
//! set used for development seeding.

pub mod constants;
pub mod sample;
pub mod types;
pub mod validation;

pub use types::{
    Candidate, CandidateDraft, CandidateId, CandidatePatch, CandidateStatus, StatusFilter,
};
pub use validation::{validate_draft, validate_patch, FieldError, ValidationErrors};
