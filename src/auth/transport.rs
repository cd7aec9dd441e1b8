use std::fmt;
use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::error::AuthError;

pub const LOGIN_PATH: &str = "/api/login";

/// Whatever the backend sends back about the user. Must be a JSON object.
pub type User = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Carries a login request to the backend.
pub trait LoginTransport {
    fn post_login(&self, request: &LoginRequest) -> impl Future<Output = Result<LoginResponse, AuthError>>;
}

/// POSTs JSON credentials to `<base_url>/api/login`.
#[derive(Debug, Clone)]
pub struct HttpLoginTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpLoginTransport {
    pub fn new(base_url: &str) -> Result<Self, AuthError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Same as `new`, sending through a caller-configured client.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, AuthError> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(LOGIN_PATH))
            .map_err(|e| AuthError::InvalidEndpoint(format!("{base_url}: {e}")))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl LoginTransport for HttpLoginTransport {
    async fn post_login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let body = serde_json::to_vec(request)?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
