//! Authentication service client
//!
//! Thin wrapper over the hosted auth endpoints. Rejection messages from
//! the service are passed through verbatim; hosts decide how to present
//! them.

use serde::Deserialize;
use shared::error::{AppError, AppResult};

use crate::config::Config;

/// An authenticated session
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
    pub token: String,
    /// Unix seconds; `None` when the service sent no expiry
    pub expires_at: Option<u64>,
}

impl AuthSession {
    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            return now > expires_at;
        }
        false
    }
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    user_id: String,
    #[serde(default)]
    email: String,
    token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Client for the hosted authentication service
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.auth_url.clone())
    }

    /// Sign in with email and password
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        self.request("sign-in", email, password).await
    }

    /// Register a new account
    pub async fn sign_up(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        self.request("sign-up", email, password).await
    }

    async fn request(&self, action: &str, email: &str, password: &str) -> AppResult<AuthSession> {
        let response = self
            .http
            .post(format!("{}/api/auth/{}", self.base_url, action))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(action, "Authentication rejected");
            return Err(AppError::auth_rejected(rejection_message(&body)));
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| AppError::network(format!("malformed auth response: {e}")))?;

        let expires_at = session.expires_in.map(|secs| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
                + secs
        });

        Ok(AuthSession {
            user_id: session.user_id,
            email: if session.email.is_empty() {
                email.to_string()
            } else {
                session.email
            },
            token: session.token,
            expires_at,
        })
    }
}

/// Pull the `message` field out of a JSON error body, else keep the raw
/// body so nothing the service said is lost
fn rejection_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.to_string())
}
