//! The navigation tree and the router that interprets guard decisions.
//!
//! Routes are grouped into branches, each wrapped by exactly one guard
//! variant: the public-only pages, the open pages, the any-authenticated
//! branch, and one branch per role.

pub mod pages;
pub mod router;
pub mod tree;

pub use pages::{paths, Page};
pub use router::{Resolution, Router};
pub use tree::{NavError, NavigationTree, Route, RouteMatch};

use crate::guards::RouteGuard;

/// The marketplace navigation table.
pub fn default_tree() -> Result<NavigationTree, NavError> {
    NavigationTree::new(vec![
        // Reachable without authentication.
        Route::new(paths::ROOT, RouteGuard::Open, Page::Home),
        Route::new(paths::UNAUTHORIZED, RouteGuard::Open, Page::Unauthorized),
        // Only sensible while logged out.
        Route::new(paths::LOGIN, RouteGuard::PublicOnly, Page::Login),
        Route::new(paths::REGISTER, RouteGuard::PublicOnly, Page::Register),
        // Any authenticated account. Profile viewing is registered once
        // here; the page itself adapts to whose profile is shown.
        Route::new("/posts", RouteGuard::Private, Page::PostFeed),
        Route::new("/posts/:id", RouteGuard::Private, Page::PostDetails),
        Route::new("/chat", RouteGuard::Private, Page::Chat),
        Route::new("/profiles/:id", RouteGuard::Private, Page::ProfileView),
        // Admin branch.
        Route::new(paths::ADMIN_HOME, RouteGuard::AdminOnly, Page::AdminDashboard),
        Route::new("/admin/users", RouteGuard::AdminOnly, Page::AdminUsers),
        Route::new("/admin/jobs", RouteGuard::AdminOnly, Page::AdminJobs),
        // Itian branch.
        Route::new(paths::ITIAN_HOME, RouteGuard::ItianOnly, Page::ItianProfile),
        Route::new(
            "/itian/applications",
            RouteGuard::ItianOnly,
            Page::ItianApplications,
        ),
        // Employer branch.
        Route::new(
            paths::EMPLOYER_HOME,
            RouteGuard::EmployerOnly,
            Page::EmployerProfile,
        ),
        Route::new("/employer/jobs", RouteGuard::EmployerOnly, Page::EmployerJobs),
        Route::new(
            "/employer/jobs/:id/applicants",
            RouteGuard::EmployerOnly,
            Page::EmployerJobApplicants,
        ),
    ])
}
