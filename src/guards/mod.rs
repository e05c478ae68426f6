pub mod guard;

pub use guard::{landing_path, GuardOutcome, RouteGuard};
