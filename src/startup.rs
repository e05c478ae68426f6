//! Application startup and wiring.
//!
//! This module assembles the session core from configuration: token store,
//! backend client, session, manager and router, then runs the one-shot
//! bootstrap and resolves whatever paths the caller asked about.

use std::sync::Arc;

use tracing::info;

use crate::backend::BackendClient;
use crate::config::ConfigV1;
use crate::nav::{default_tree, Resolution, Router};
use crate::session::{Session, SessionManager};
use crate::state::AppState;
use crate::store::create_store;

/// Initializes the session core and resolves the requested paths.
///
/// Bootstrap always runs to completion before any path is resolved, so the
/// resolutions printed here never observe the loading window; an embedding
/// UI would instead re-render on session change and hit the Loading branch.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the navigation
/// tree is invalid.
pub async fn run(
    config: Arc<ConfigV1>,
    requested_paths: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let store = create_store(&config.store);
    let backend = BackendClient::new(&config.backend)?;
    let session = Arc::new(Session::new());
    let manager = Arc::new(SessionManager::new(
        session.clone(),
        store,
        backend,
        config.backend.clear_token_on_rejection,
    ));
    let router = Arc::new(Router::new(default_tree()?));

    info!("Bootstrapping session against {}", config.backend.base_url);
    manager.bootstrap().await;

    let state = AppState {
        config,
        session,
        manager,
        router,
    };

    let snapshot = state.session.snapshot();
    match (&snapshot.user, &snapshot.error) {
        (Some(user), _) => println!("session: {} #{}", user.role.as_str(), user.id),
        (None, Some(err)) => println!("session: logged out ({})", err),
        (None, None) => println!("session: logged out"),
    }

    for path in requested_paths {
        let resolution = state.router.settle(path, &snapshot);
        println!("{} -> {}", path, describe(&resolution));
    }

    Ok(())
}

fn describe(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Render { page } => format!("render {}", page.as_str()),
        Resolution::Redirect { to, from } => match from {
            Some(from) => format!("redirect {} (from {})", to, from),
            None => format!("redirect {}", to),
        },
        Resolution::Loading => "loading".to_string(),
        Resolution::NotFound => "not found".to_string(),
    }
}
