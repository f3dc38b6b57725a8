//! In-memory candidate cache and mutation coordinator.
//!
//! One [`CandidateStore`] is constructed per application session and owns
//! the authoritative candidate snapshot for that session. Every mutation
//! goes to the remote store first; on success the cache adopts the
//! server's returned payload, on failure the cache stays untouched, so
//! observers never see a partially applied change.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use hireline_api::CandidateApi;
use hireline_shared::{
    validate_draft, validate_patch, Candidate, CandidateDraft, CandidateId, CandidatePatch,
    StatusFilter,
};

use crate::error::{Result, StoreError};

#[derive(Debug, Default)]
struct PendingFlags {
    create: bool,
    update: bool,
    remove: bool,
}

#[derive(Default)]
struct StoreState {
    candidates: Vec<Candidate>,
    loading: bool,
    last_error: Option<String>,
    pending: PendingFlags,
}

/// Session-scoped candidate cache, synchronized with the remote store.
///
/// All reads hand out snapshots; the cached list is mutated only by the
/// store itself. Mutations are not serialized against each other: if
/// two updates target the same record, the cache reflects whichever
/// server response resolves last. A second mutation of the same kind
/// while one is still in flight is rejected with
/// [`StoreError::MutationInFlight`].
pub struct CandidateStore {
    api: Arc<dyn CandidateApi>,
    state: Mutex<StoreState>,
}

impl CandidateStore {
    /// Create an empty store backed by the given access layer.
    pub fn new(api: Arc<dyn CandidateApi>) -> Self {
        Self {
            api,
            state: Mutex::new(StoreState::default()),
        }
    }

    // The lock is only held for short, non-async critical sections.
    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the cache with a fresh snapshot from the remote store.
    ///
    /// This is the only full-replace path. On failure the previous list
    /// is kept and the error is recorded but not returned, since nothing
    /// awaits the mount-time load for a result.
    pub async fn load(&self) {
        {
            let mut state = self.state();
            state.loading = true;
            state.last_error = None;
        }

        let result = self.api.fetch_all().await;

        let mut state = self.state();
        state.loading = false;
        match result {
            Ok(candidates) => {
                info!(count = candidates.len(), "Loaded candidates");
                state.candidates = candidates;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load candidates");
                state.last_error = Some(e.to_string());
            }
        }
    }

    /// Alias for [`load`](Self::load), for explicit refresh actions.
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Create a candidate remotely and append the confirmed record.
    ///
    /// Field checks run first; a validation failure never reaches the
    /// access layer.
    pub async fn add(&self, draft: CandidateDraft) -> Result<Candidate> {
        validate_draft(&draft)?;

        {
            let mut state = self.state();
            if state.pending.create {
                return Err(StoreError::MutationInFlight("create"));
            }
            state.pending.create = true;
            state.last_error = None;
        }

        let result = self.api.create(&draft).await;

        let mut state = self.state();
        state.pending.create = false;
        match result {
            Ok(candidate) => {
                info!(id = %candidate.id, name = %candidate.name, "Candidate created");
                state.candidates.push(candidate.clone());
                Ok(candidate)
            }
            Err(e) => {
                warn!(error = %e, "Failed to create candidate");
                state.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Apply a partial update and adopt the server's returned record,
    /// preserving the candidate's position in the list.
    pub async fn update(&self, id: CandidateId, patch: CandidatePatch) -> Result<Candidate> {
        validate_patch(&patch)?;

        {
            let mut state = self.state();
            if state.pending.update {
                return Err(StoreError::MutationInFlight("update"));
            }
            state.pending.update = true;
            state.last_error = None;
        }

        let result = self.api.update(id, &patch).await;

        let mut state = self.state();
        state.pending.update = false;
        match result {
            Ok(candidate) => {
                info!(id = %id, "Candidate updated");
                if let Some(slot) = state.candidates.iter_mut().find(|c| c.id == id) {
                    *slot = candidate.clone();
                }
                Ok(candidate)
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Failed to update candidate");
                state.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Delete a candidate remotely, then drop it from the cache.
    pub async fn remove(&self, id: CandidateId) -> Result<()> {
        {
            let mut state = self.state();
            if state.pending.remove {
                return Err(StoreError::MutationInFlight("delete"));
            }
            state.pending.remove = true;
            state.last_error = None;
        }

        let result = self.api.delete(id).await;

        let mut state = self.state();
        state.pending.remove = false;
        match result {
            Ok(()) => {
                info!(id = %id, "Candidate deleted");
                state.candidates.retain(|c| c.id != id);
                Ok(())
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Failed to delete candidate");
                state.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Cache lookup by identifier. No network round-trip.
    pub fn get_by_id(&self, id: CandidateId) -> Option<Candidate> {
        self.state().candidates.iter().find(|c| c.id == id).cloned()
    }

    /// Cache filter by status. [`StatusFilter::All`] returns the full
    /// list in order.
    pub fn get_by_status(&self, filter: StatusFilter) -> Vec<Candidate> {
        self.state()
            .candidates
            .iter()
            .filter(|c| filter.matches(c.status))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search against name, email and
    /// position. A blank term returns the full list.
    pub fn search_local(&self, term: &str) -> Vec<Candidate> {
        let term = term.trim().to_lowercase();
        let state = self.state();
        if term.is_empty() {
            return state.candidates.clone();
        }
        state
            .candidates
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term)
                    || c.email.to_lowercase().contains(&term)
                    || c.position.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    /// Resolve a candidate for a detail view: cache first, then a direct
    /// remote fetch. The fallback result is not merged into the cache;
    /// this path serves records the session never listed.
    pub async fn resolve(&self, id: CandidateId) -> Option<Candidate> {
        if let Some(candidate) = self.get_by_id(id) {
            return Some(candidate);
        }
        match self.api.fetch_by_id(id).await {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                debug!(id = %id, error = %e, "Point lookup missed cache and remote");
                None
            }
        }
    }

    /// Export the full, unfiltered cache snapshot as a dated CSV file
    /// under `dir`, returning the path of the written file.
    pub fn export_to(&self, dir: &std::path::Path) -> Result<std::path::PathBuf> {
        crate::export::write_export(dir, &self.candidates())
    }

    /// Snapshot of the cached list, in fetch/insertion order.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.state().candidates.clone()
    }

    /// Whether a bulk load is in flight.
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Message of the most recent failed operation, if any.
    pub fn last_error(&self) -> Option<String> {
        self.state().last_error.clone()
    }
}
