//! # hireline-api
//!
//! Access layer for the remote candidate store. One method per remote
//! operation, each performing exactly one HTTP exchange: no cache, no
//! retry, no deduplication of in-flight requests. An optional
//! process-wide artificial delay simulates network latency so callers
//! can exercise their loading states.

pub mod client;
pub mod config;
pub mod delay;

mod error;

pub use client::{ApiClient, CandidateApi};
pub use config::ApiConfig;
pub use delay::{api_delay, set_api_delay};
pub use error::{ApiError, Result};
