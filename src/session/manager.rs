use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::session::Session;
use crate::backend::BackendClient;
use crate::models::User;
use crate::store::{StoreError, TokenStore};

/// Owns the session write paths: the one-shot bootstrap plus explicit
/// login and logout. Guards and the router only ever read snapshots.
pub struct SessionManager {
    session: Arc<Session>,
    store: Arc<dyn TokenStore>,
    backend: BackendClient,
    clear_token_on_rejection: bool,
    bootstrapped: AtomicBool,
}

impl SessionManager {
    pub fn new(
        session: Arc<Session>,
        store: Arc<dyn TokenStore>,
        backend: BackendClient,
        clear_token_on_rejection: bool,
    ) -> Self {
        SessionManager {
            session,
            store,
            backend,
            clear_token_on_rejection,
            bootstrapped: AtomicBool::new(false),
        }
    }

    pub fn session(&self) -> Arc<Session> {
        self.session.clone()
    }

    /// Restores the session from the persisted token, once per process.
    ///
    /// All failure modes resolve into session state; nothing escapes this
    /// boundary. With no persisted token there is no network call and no
    /// loading window at all.
    pub async fn bootstrap(&self) {
        if self.bootstrapped.swap(true, Ordering::SeqCst) {
            debug!("bootstrap already ran; ignoring repeat call");
            return;
        }

        let generation = self.session.advance_generation();

        let token = match self.store.load().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                info!("no persisted token; starting logged out");
                return;
            }
            Err(e) => {
                // An unreadable store is treated like an absent token; the
                // user can still log in manually.
                warn!("failed to read token store: {}; starting logged out", e);
                return;
            }
        };

        debug!("persisted token found; fetching current user");
        self.session.mark_loading(generation);

        match self.backend.fetch_current_user(&token).await {
            Ok(user) => {
                info!(user_id = user.id, role = user.role.as_str(), "session restored");
                self.session.resolve_bootstrap(generation, Ok(user));
            }
            Err(err) => {
                warn!("bootstrap failed: {}", err);
                if err.is_credential_rejection() && self.clear_token_on_rejection {
                    // Only an explicit rejection removes the token; transient
                    // failures leave it in place.
                    if let Err(e) = self.store.clear().await {
                        warn!("failed to clear rejected token: {}", e);
                    }
                }
                self.session.resolve_bootstrap(generation, Err(err));
            }
        }
    }

    /// Installs a freshly authenticated account and persists its token.
    pub async fn login(&self, user: User, token: &str) -> Result<(), StoreError> {
        let generation = self.session.advance_generation();
        self.store.save(token).await?;
        info!(user_id = user.id, role = user.role.as_str(), "logged in");
        self.session.apply_login(generation, user);
        Ok(())
    }

    /// Clears the account and deletes the persisted token. Advancing the
    /// generation first fences off any still-in-flight bootstrap response.
    pub async fn logout(&self) -> Result<(), StoreError> {
        let generation = self.session.advance_generation();
        self.store.clear().await?;
        info!("logged out");
        self.session.apply_logout(generation);
        Ok(())
    }
}
