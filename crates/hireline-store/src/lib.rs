//! # hireline-store
//!
//! Session-scoped state layer for the candidate pipeline client: the
//! in-memory cache and mutation coordinator ([`CandidateStore`]), the
//! pure derived-view computations (filtering, pagination, statistics),
//! and the CSV export surface.
//!
//! The store talks to the remote record store exclusively through the
//! [`CandidateApi`](hireline_api::CandidateApi) trait, so tests and
//! tools can swap the HTTP client for an in-memory double.

pub mod export;
pub mod store;
pub mod views;

mod error;

pub use error::StoreError;
pub use store::CandidateStore;
pub use views::{
    candidate_stats, filter_candidates, page_numbers, paginate, CandidateStats, PageMark, PageView,
};
