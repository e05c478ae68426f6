use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::{debug, warn};

use super::error::SessionError;
use crate::models::User;

/// Point-in-time view of the session handed to guards and the router.
///
/// Guards are pure functions over this value; they never see the live store,
/// so a render pass observes one consistent state from start to finish.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<SessionError>,
}

impl SessionSnapshot {
    /// True when bootstrap has resolved and an account is present.
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    loading: bool,
    error: Option<SessionError>,
}

/// The process-wide session store.
///
/// Exactly one writer path exists per field: bootstrap success or login sets
/// `user`, logout clears it, and `loading`/`error` belong to bootstrap. All
/// writes are tagged with a generation; a write whose generation is no longer
/// current is discarded, so a slow in-flight bootstrap response cannot
/// resurrect a user after an explicit logout.
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<SessionState>,
    generation: AtomicU64,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Take an immutable snapshot of the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().expect("session lock poisoned");
        SessionSnapshot {
            user: state.user.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    /// Start a new write-initiating action (bootstrap attempt, login, logout)
    /// and return its generation. Any write tagged with an older generation
    /// is stale from this point on.
    pub fn advance_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Mark the bootstrap fetch as in flight.
    pub fn mark_loading(&self, generation: u64) {
        if !self.is_current(generation) {
            warn!(generation, "discarding stale loading transition");
            return;
        }
        let mut state = self.state.write().expect("session lock poisoned");
        state.loading = true;
    }

    /// Resolve the bootstrap fetch, success or failure. Always clears the
    /// loading flag for the current generation.
    pub fn resolve_bootstrap(&self, generation: u64, result: Result<User, SessionError>) {
        if !self.is_current(generation) {
            warn!(generation, "discarding stale bootstrap result");
            return;
        }
        let mut state = self.state.write().expect("session lock poisoned");
        state.loading = false;
        match result {
            Ok(user) => {
                debug!(user_id = user.id, role = user.role.as_str(), "session populated");
                state.user = Some(user);
                state.error = None;
            }
            Err(err) => {
                state.user = None;
                state.error = Some(err);
            }
        }
    }

    /// Install the account produced by an explicit login.
    pub fn apply_login(&self, generation: u64, user: User) {
        if !self.is_current(generation) {
            warn!(generation, "discarding stale login");
            return;
        }
        let mut state = self.state.write().expect("session lock poisoned");
        state.user = Some(user);
        state.loading = false;
        state.error = None;
    }

    /// Clear the account on explicit logout.
    pub fn apply_logout(&self, generation: u64) {
        if !self.is_current(generation) {
            warn!(generation, "discarding stale logout");
            return;
        }
        let mut state = self.state.write().expect("session lock poisoned");
        state.user = None;
        state.loading = false;
        state.error = None;
    }
}
