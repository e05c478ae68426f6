use std::sync::Arc;

use careergate::backend::BackendClient;
use careergate::config::BackendConfig;
use careergate::nav::{default_tree, Router};
use careergate::session::{Session, SessionManager};
use careergate::store::TokenStore;

pub const CURRENT_USER_PATH: &str = "/users/current";

pub fn backend_config(base_url: String) -> BackendConfig {
    BackendConfig {
        base_url,
        current_user_path: CURRENT_USER_PATH.to_string(),
        timeout_in_ms: 3000,
        clear_token_on_rejection: true,
    }
}

pub struct TestApp {
    pub session: Arc<Session>,
    pub manager: SessionManager,
    pub store: Arc<dyn TokenStore>,
    pub router: Router,
}

/// Assemble the session core against a given backend URL and token store,
/// the way startup wires it for the real binary.
pub fn build_app(base_url: String, store: Arc<dyn TokenStore>) -> TestApp {
    let config = backend_config(base_url);
    let session = Arc::new(Session::new());
    let backend = BackendClient::new(&config).expect("client should build");
    let manager = SessionManager::new(
        session.clone(),
        store.clone(),
        backend,
        config.clear_token_on_rejection,
    );
    let router = Router::new(default_tree().expect("default tree is valid"));

    TestApp {
        session,
        manager,
        store,
        router,
    }
}
