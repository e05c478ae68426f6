use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The role a marketplace account carries. The backend owns this vocabulary;
/// anything it sends outside the three known values lands in `Unknown` and
/// fails every role predicate instead of failing deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Itian,
    Employer,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Human-readable name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Itian => "itian",
            Role::Employer => "employer",
            Role::Unknown => "unknown",
        }
    }
}

/// The User struct represents the authenticated account as returned by the
/// backend's current-user endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub role: Role,
    /// Any extra profile fields the backend sends are carried opaquely.
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    /// Construct a new User with an empty profile.
    pub fn new(id: u64, role: Role) -> Self {
        User {
            id,
            role,
            profile: Map::new(),
        }
    }
}
