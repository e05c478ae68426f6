use tracing::{debug, warn};

use super::pages::Page;
use super::tree::NavigationTree;
use crate::guards::GuardOutcome;
use crate::session::SessionSnapshot;

/// How many redirects `settle` will follow before giving up. The default
/// tree needs at most two; anything near the cap means a miswired table.
const MAX_REDIRECT_HOPS: usize = 8;

/// The terminal answer for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Render this page.
    Render { page: Page },
    /// Navigate to `to`; `from` is the originally-requested path when the
    /// target is the login page.
    Redirect { to: String, from: Option<String> },
    /// Bootstrap still in flight; show the interim indicator.
    Loading,
    /// No route matches the path.
    NotFound,
}

/// Interprets guard outcomes against the navigation tree.
///
/// This is the single place a guard decision turns into an actual
/// navigation; guards themselves stay pure. The router is handed an
/// immutable snapshot per navigation, so one resolution never observes two
/// different session states.
pub struct Router {
    tree: NavigationTree,
}

impl Router {
    pub fn new(tree: NavigationTree) -> Self {
        Router { tree }
    }

    pub fn tree(&self) -> &NavigationTree {
        &self.tree
    }

    /// Resolve one navigation step: look up the route, evaluate its guard.
    pub fn resolve(&self, path: &str, snapshot: &SessionSnapshot) -> Resolution {
        let Some(matched) = self.tree.resolve(path) else {
            debug!(%path, "no route matched");
            return Resolution::NotFound;
        };

        match matched.route.guard.evaluate(snapshot, path) {
            GuardOutcome::Render => Resolution::Render {
                page: matched.route.page,
            },
            GuardOutcome::Redirect { to, from } => {
                debug!(%path, %to, "guard redirected");
                Resolution::Redirect { to, from }
            }
            GuardOutcome::Loading => Resolution::Loading,
        }
    }

    /// Follow redirects until the navigation settles on a render, loading
    /// or not-found answer. Capped so a miswired tree cannot loop forever;
    /// on hitting the cap the last redirect is returned as-is.
    pub fn settle(&self, path: &str, snapshot: &SessionSnapshot) -> Resolution {
        let mut current = path.to_string();
        for _ in 0..MAX_REDIRECT_HOPS {
            match self.resolve(&current, snapshot) {
                Resolution::Redirect { to, from } => {
                    if to == current {
                        warn!(%current, "route redirects to itself");
                        return Resolution::Redirect { to, from };
                    }
                    current = to;
                }
                terminal => return terminal,
            }
        }
        warn!(%path, "navigation did not settle after {} hops", MAX_REDIRECT_HOPS);
        self.resolve(&current, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guards::RouteGuard;
    use crate::models::{Role, User};
    use crate::nav::tree::Route;
    use crate::nav::{default_tree, paths};

    fn router() -> Router {
        Router::new(default_tree().expect("default tree is valid"))
    }

    fn logged_in(role: Role) -> SessionSnapshot {
        SessionSnapshot {
            user: Some(User::new(7, role)),
            ..SessionSnapshot::default()
        }
    }

    /// Unauthenticated private navigation settles on the login page, and the
    /// single-step resolution carries the originally-requested path.
    #[test]
    fn test_private_route_settles_on_login() {
        let router = router();
        let snapshot = SessionSnapshot::default();

        assert_eq!(
            router.resolve("/chat", &snapshot),
            Resolution::Redirect {
                to: paths::LOGIN.to_string(),
                from: Some("/chat".to_string()),
            }
        );
        assert_eq!(
            router.settle("/chat", &snapshot),
            Resolution::Render { page: Page::Login }
        );
    }

    /// A logged-in employer on an admin route settles on unauthorized.
    #[test]
    fn test_wrong_role_settles_on_unauthorized() {
        let router = router();
        let resolution = router.settle("/admin/users", &logged_in(Role::Employer));
        assert_eq!(
            resolution,
            Resolution::Render {
                page: Page::Unauthorized
            }
        );
    }

    /// A logged-in admin asking for the login page settles on the admin home.
    #[test]
    fn test_public_only_settles_on_role_landing() {
        let router = router();
        let resolution = router.settle("/login", &logged_in(Role::Admin));
        assert_eq!(
            resolution,
            Resolution::Render {
                page: Page::AdminDashboard
            }
        );
    }

    #[test]
    fn test_loading_is_surfaced_not_redirected() {
        let router = router();
        let snapshot = SessionSnapshot {
            loading: true,
            ..SessionSnapshot::default()
        };
        assert_eq!(router.resolve("/posts", &snapshot), Resolution::Loading);
        assert_eq!(router.settle("/posts", &snapshot), Resolution::Loading);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let router = router();
        assert_eq!(
            router.resolve("/definitely/not/here", &SessionSnapshot::default()),
            Resolution::NotFound
        );
    }

    /// A deliberately miswired tree (login requires auth) cycles between
    /// login and itself; settle must still terminate.
    #[test]
    fn test_settle_terminates_on_redirect_cycle() {
        let tree = NavigationTree::new(vec![Route::new(
            paths::LOGIN,
            RouteGuard::Private,
            Page::Login,
        )])
        .expect("tree is valid");
        let router = Router::new(tree);

        let resolution = router.settle(paths::LOGIN, &SessionSnapshot::default());
        assert!(matches!(resolution, Resolution::Redirect { .. }));
    }
}
