use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::config::BackendConfig;
use crate::models::User;
use crate::session::SessionError;

/// HTTP client for the marketplace backend's current-user endpoint.
///
/// This is the only network surface of the session core. Guards never call
/// it; only bootstrap does, once per process.
pub struct BackendClient {
    config: BackendConfig,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_in_ms))
            .build()?;
        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    /// Exchanges the persisted bearer token for the account it belongs to.
    ///
    /// Status classification follows the backend contract: 2xx with a user
    /// payload is success, 401/403 mean the credential itself was rejected,
    /// anything else is transient trouble that says nothing about the token.
    pub async fn fetch_current_user(&self, token: &str) -> Result<User, SessionError> {
        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.current_user_path
        );

        debug!(%url, "fetching current user");
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SessionError::TransientFailure {
                reason: format!("error sending request: {}", e),
            })?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| SessionError::TransientFailure {
                    reason: format!("error reading response body: {}", e),
                })?;
            serde_json::from_str::<User>(&body).map_err(|e| SessionError::MalformedPayload {
                reason: e.to_string(),
            })
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(SessionError::InvalidCredential {
                status: status.as_u16(),
            })
        } else {
            Err(SessionError::TransientFailure {
                reason: format!("unexpected status code: {}", status),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use mockito::Server;

    fn test_config(base_url: String) -> BackendConfig {
        BackendConfig {
            base_url,
            current_user_path: "/users/current".to_string(),
            timeout_in_ms: 3000,
            clear_token_on_rejection: true,
        }
    }

    /// Test that a valid token returns the expected user.
    #[tokio::test]
    async fn test_fetch_current_user_success() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/users/current")
            .match_header("authorization", "Bearer valid_token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 42, "role": "itian", "name": "Aya"}"#)
            .create_async()
            .await;

        let client = BackendClient::new(&test_config(server.url())).expect("client should build");
        let result = client.fetch_current_user("valid_token").await;

        m.assert_async().await;
        let user = result.expect("fetch should succeed");
        assert_eq!(user.id, 42);
        assert_eq!(user.role, Role::Itian);
        assert_eq!(user.profile["name"], "Aya");
    }

    /// Test that a rejected token (401) is classified as a credential error.
    #[tokio::test]
    async fn test_fetch_current_user_rejected() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/users/current")
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let client = BackendClient::new(&test_config(server.url())).expect("client should build");
        let result = client.fetch_current_user("bad_token").await;

        m.assert_async().await;
        assert_eq!(
            result.unwrap_err(),
            SessionError::InvalidCredential { status: 401 }
        );
    }

    /// Test that a server error is transient, not a credential rejection.
    #[tokio::test]
    async fn test_fetch_current_user_server_error() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/users/current")
            .with_status(503)
            .create_async()
            .await;

        let client = BackendClient::new(&test_config(server.url())).expect("client should build");
        let result = client.fetch_current_user("token").await;

        m.assert_async().await;
        let err = result.unwrap_err();
        assert!(matches!(err, SessionError::TransientFailure { .. }));
        assert!(!err.is_credential_rejection());
    }

    /// Test that a 2xx with an unusable body is a malformed payload.
    #[tokio::test]
    async fn test_fetch_current_user_malformed_payload() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/users/current")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "hello"}"#)
            .create_async()
            .await;

        let client = BackendClient::new(&test_config(server.url())).expect("client should build");
        let result = client.fetch_current_user("token").await;

        m.assert_async().await;
        assert!(matches!(
            result.unwrap_err(),
            SessionError::MalformedPayload { .. }
        ));
    }

    /// An unrecognized role is still a successful fetch.
    #[tokio::test]
    async fn test_fetch_current_user_unknown_role() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/users/current")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 9, "role": "superuser"}"#)
            .create_async()
            .await;

        let client = BackendClient::new(&test_config(server.url())).expect("client should build");
        let result = client.fetch_current_user("token").await;

        m.assert_async().await;
        assert_eq!(result.unwrap().role, Role::Unknown);
    }
}
