use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::pages::Page;
use crate::guards::RouteGuard;

/// Errors detected while building a navigation tree.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavError {
    /// The same path would be reachable under two guards.
    #[error("route pattern '{0}' is registered more than once")]
    DuplicateRoute(String),

    #[error("route pattern '{0}' must start with '/'")]
    InvalidPattern(String),
}

/// One entry of the navigation table: a path pattern wrapped by exactly one
/// guard, pointing at one page. Segments starting with ':' are parameters.
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: &'static str,
    pub guard: RouteGuard,
    pub page: Page,
}

impl Route {
    pub fn new(pattern: &'static str, guard: RouteGuard, page: Page) -> Self {
        Route { pattern, guard, page }
    }
}

/// A successful lookup: the matched route plus any captured parameters.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: HashMap<String, String>,
}

/// The static, declarative mapping from paths to (guard, page) pairs.
///
/// Construction enforces the table invariant: no pattern may be registered
/// twice, so no path is ever reachable under two different guards.
#[derive(Debug)]
pub struct NavigationTree {
    routes: Vec<Route>,
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Collapse parameter names so "/jobs/:id" and "/jobs/:job_id" count as the
/// same shape for duplicate detection.
fn normalized(pattern: &str) -> String {
    let parts: Vec<&str> = segments(pattern)
        .into_iter()
        .map(|s| if s.starts_with(':') { ":" } else { s })
        .collect();
    format!("/{}", parts.join("/"))
}

impl NavigationTree {
    pub fn new(routes: Vec<Route>) -> Result<Self, NavError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !route.pattern.starts_with('/') {
                return Err(NavError::InvalidPattern(route.pattern.to_string()));
            }
            if !seen.insert(normalized(route.pattern)) {
                return Err(NavError::DuplicateRoute(route.pattern.to_string()));
            }
        }
        Ok(NavigationTree { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the route matching `path`, capturing `:param` segments.
    /// Literal segments win over parameters when both could match.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path_segments = segments(path);

        let mut best: Option<(usize, RouteMatch<'_>)> = None;
        for route in &self.routes {
            let pattern_segments = segments(route.pattern);
            if pattern_segments.len() != path_segments.len() {
                continue;
            }

            let mut params = HashMap::new();
            let mut literal_count = 0;
            let mut matched = true;
            for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
                if let Some(name) = pattern_segment.strip_prefix(':') {
                    params.insert(name.to_string(), (*path_segment).to_string());
                } else if pattern_segment == path_segment {
                    literal_count += 1;
                } else {
                    matched = false;
                    break;
                }
            }
            if !matched {
                continue;
            }

            let candidate = RouteMatch { route, params };
            match &best {
                Some((best_literals, _)) if *best_literals >= literal_count => {}
                _ => best = Some((literal_count, candidate)),
            }
        }
        best.map(|(_, m)| m)
    }
}
