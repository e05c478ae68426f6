//! Shared application state.
//!
//! Contains what the app shell threads through its lifetime: configuration,
//! the session store and its manager, and the router.

use std::sync::Arc;

use crate::config::ConfigV1;
use crate::nav::Router;
use crate::session::{Session, SessionManager};

/// Application state assembled at startup.
///
/// The session is read through snapshots only; the manager owns every
/// write path (bootstrap, login, logout).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// The process-wide session store.
    pub session: Arc<Session>,
    /// Owner of the session write paths and the token lifecycle.
    pub manager: Arc<SessionManager>,
    /// The navigation tree interpreter.
    pub router: Arc<Router>,
}
