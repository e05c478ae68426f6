use crate::models::Role;
use crate::nav::paths;
use crate::session::SessionSnapshot;

/// What a guard decided for one navigation. The guard itself performs no
/// side effect; the router interprets this value into an actual
/// render/redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the wrapped page.
    Render,
    /// Navigate elsewhere. `from` carries the originally-requested path when
    /// the target is the login page, so login can return the user afterward.
    Redirect { to: String, from: Option<String> },
    /// Bootstrap is still in flight; show the interim indicator.
    Loading,
}

/// The guard variants the navigation tree can attach to a branch.
///
/// `Private` and the three role guards share one decision procedure,
/// parameterized by the required role. `PublicOnly` inverts it: it exists
/// for the logged-out states and sends authenticated users to their
/// landing page instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    /// No gating at all.
    Open,
    /// Only sensible while logged out (login, register).
    PublicOnly,
    /// Any authenticated account.
    Private,
    AdminOnly,
    ItianOnly,
    EmployerOnly,
}

/// Where each role lands after login or when bounced off a public-only page.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => paths::ADMIN_HOME,
        Role::Itian => paths::ITIAN_HOME,
        Role::Employer => paths::EMPLOYER_HOME,
        Role::Unknown => paths::ROOT,
    }
}

impl RouteGuard {
    /// The role this guard requires, if it is role-specific.
    fn required_role(&self) -> Option<Role> {
        match self {
            RouteGuard::AdminOnly => Some(Role::Admin),
            RouteGuard::ItianOnly => Some(Role::Itian),
            RouteGuard::EmployerOnly => Some(Role::Employer),
            _ => None,
        }
    }

    /// Decide what happens for a navigation to `requested` given the current
    /// session snapshot. Pure: same inputs, same outcome, no mutation.
    pub fn evaluate(&self, snapshot: &SessionSnapshot, requested: &str) -> GuardOutcome {
        match self {
            RouteGuard::Open => GuardOutcome::Render,
            RouteGuard::PublicOnly => evaluate_public_only(snapshot),
            _ => evaluate_required(self.required_role(), snapshot, requested),
        }
    }
}

/// Shared decision procedure for `Private` and the role guards.
fn evaluate_required(
    required: Option<Role>,
    snapshot: &SessionSnapshot,
    requested: &str,
) -> GuardOutcome {
    if snapshot.loading {
        return GuardOutcome::Loading;
    }
    let Some(user) = &snapshot.user else {
        return GuardOutcome::Redirect {
            to: paths::LOGIN.to_string(),
            from: Some(requested.to_string()),
        };
    };
    match required {
        None => GuardOutcome::Render,
        Some(role) if user.role == role => GuardOutcome::Render,
        // Wrong or unrecognized role: always the unauthorized page, never a
        // generic not-found.
        Some(_) => GuardOutcome::Redirect {
            to: paths::UNAUTHORIZED.to_string(),
            from: None,
        },
    }
}

fn evaluate_public_only(snapshot: &SessionSnapshot) -> GuardOutcome {
    if snapshot.loading {
        return GuardOutcome::Loading;
    }
    match &snapshot.user {
        // Already logged in; don't show the login form again.
        Some(user) => GuardOutcome::Redirect {
            to: landing_path(user.role).to_string(),
            from: None,
        },
        None => GuardOutcome::Render,
    }
}
