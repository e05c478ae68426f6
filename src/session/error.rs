use thiserror::Error;

/// Why a session bootstrap attempt failed.
///
/// The absence of a persisted token is deliberately not represented here:
/// starting logged out is the normal path, not a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The backend rejected the credential outright (401/403).
    #[error("credential rejected by backend (status {status})")]
    InvalidCredential { status: u16 },

    /// Network or server trouble unrelated to credential validity.
    #[error("transient failure fetching current user: {reason}")]
    TransientFailure { reason: String },

    /// The backend answered 2xx but the body was not a usable user payload.
    #[error("malformed current-user payload: {reason}")]
    MalformedPayload { reason: String },
}

impl SessionError {
    /// True when the failure means the persisted token itself is bad.
    pub fn is_credential_rejection(&self) -> bool {
        matches!(self, SessionError::InvalidCredential { .. })
    }
}
