use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::engine;
use crate::error::{Error, Result};
use crate::schema::Credentials;

/// Opaque token handed out by `/authenticate`, sent back verbatim as the
/// `Authorization` header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        AuthToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Exchanges the configured email/password for an auth token.
///
/// Any 2xx status is a grant; any other status is returned as
/// [`Error::AuthenticationRejected`] without looking at the body. A granted
/// reply that lacks `auth_token`, or is not JSON at all, gives an empty token
/// rather than an error.
pub async fn authenticate(client: &Client, config: &Config) -> Result<AuthToken> {
    let url = engine::endpoint(&config.host, "/authenticate");
    info!("Requesting auth token from {url} ...");

    let response = client
        .post(&url)
        .json(&Credentials::from(config))
        .send()
        .await?;
    let (status, body) = engine::drain(response).await?;

    if !status.is_success() {
        return Err(Error::AuthenticationRejected(status.as_u16()));
    }

    let token = extract_token(&body);
    if token.is_empty() {
        warn!("Authentication succeeded but no auth_token was returned");
    } else {
        info!("Authentication token granted");
        debug!("Your authentication token is {}", token.as_str());
    }

    Ok(token)
}

// lenient: an undecodable body or a missing/non-string auth_token is an empty token
fn extract_token(body: &[u8]) -> AuthToken {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring undecodable authentication reply: {e}");
            Value::Null
        }
    };
    let token = value
        .get("auth_token")
        .and_then(Value::as_str)
        .unwrap_or_default();

    AuthToken::new(token)
}
