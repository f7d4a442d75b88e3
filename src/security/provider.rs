use crate::security::errors::AuthError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the delegated identity provider. Tokens are exchanged
/// via authorization code + PKCE and re-checked against the provider
/// on every request; validity is never cached locally.
#[derive(Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    domain: String,
    client_id: String,
}

#[derive(Debug, Serialize)]
struct CodeExchangeForm<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    code: &'a str,
    code_verifier: &'a str,
    redirect_uri: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenExchange {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Identity returned by the provider's introspection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderIdentity {
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl ProviderClient {
    pub fn new(
        domain: impl Into<String>,
        client_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;

        Ok(ProviderClient {
            http,
            domain: domain.into(),
            client_id: client_id.into(),
        })
    }

    /// PKCE authorization-code exchange. The verifier stands in for a
    /// client secret, so nothing confidential is sent.
    pub async fn exchange_code(
        &self,
        code: &str,
        code_verifier: &str,
        redirect_uri: &str,
    ) -> Result<TokenExchange, AuthError> {
        let url = format!("https://{}/oauth/token", self.domain);
        let form = CodeExchangeForm {
            grant_type: "authorization_code",
            client_id: &self.client_id,
            code,
            code_verifier,
            redirect_uri,
        };

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::ProviderUnavailable(format!(
                "token endpoint answered {}",
                response.status()
            )));
        }

        response
            .json::<TokenExchange>()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))
    }

    /// Forwards the bearer token to the provider. Any non-success
    /// answer, timeout or network failure counts as an invalid token;
    /// there is no retry.
    pub async fn introspect(&self, token: &str) -> Result<ProviderIdentity, AuthError> {
        let url = format!("https://{}/oauth/userinfo", self.domain);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Provider introspection failed: {e}");
                AuthError::InvalidToken
            })?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidToken);
        }

        response
            .json::<ProviderIdentity>()
            .await
            .map_err(|_| AuthError::InvalidToken)
    }
}
