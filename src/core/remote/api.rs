//! GitHub REST API backend.
//!
//! Fetches the repository's Actions public key, seals each value client-side
//! and upserts it. Plaintext never leaves the process on this path.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use super::SecretsStore;
use crate::core::seal;
use crate::core::types::RemotePublicKey;
use crate::error::{RemoteError, Result};

const ACCEPT: &str = "application/vnd.github.v3+json";

/// Body of `PUT /repos/{repo}/actions/secrets/{name}`.
#[derive(Debug, Serialize)]
struct SecretPayload<'a> {
    encrypted_value: &'a str,
    key_id: &'a str,
}

/// Page size requested when listing; the API maximum.
const PER_PAGE: usize = 100;

/// One page of `GET /repos/{repo}/actions/secrets`.
#[derive(Debug, Deserialize)]
struct SecretList {
    total_count: usize,
    secrets: Vec<SecretMeta>,
}

#[derive(Debug, Deserialize)]
struct SecretMeta {
    name: String,
}

/// Secrets store backed by direct API calls.
pub struct GithubApi {
    client: Client,
    base_url: String,
    repo: String,
    token: Zeroizing<String>,
    public_key: Option<RemotePublicKey>,
}

impl GithubApi {
    /// Create a client for `repo` (`owner/name`) at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Request` if the HTTP client cannot be built.
    pub fn new(token: &str, repo: &str, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(concat!("envseal/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(RemoteError::Request)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
            token: Zeroizing::new(token.to_string()),
            public_key: None,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/repos/{}/actions/secrets{}", self.base_url, self.repo, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(header::AUTHORIZATION, format!("token {}", self.token.as_str()))
    }

    /// Turn a non-matching status into `RemoteError::Http`.
    fn expect_status(response: Response, accepted: &[u16]) -> Result<Response> {
        let status = response.status().as_u16();
        if accepted.contains(&status) {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(RemoteError::Http { status, body }.into())
    }

    /// Fetch the repository's public key.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Http` with status and body unless the API
    /// answers 200.
    pub fn get_public_key(&self) -> Result<RemotePublicKey> {
        let response = self
            .authorize(self.client.get(self.url("/public-key")))
            .send()
            .map_err(RemoteError::Request)?;

        let key: RemotePublicKey = Self::expect_status(response, &[200])?
            .json()
            .map_err(RemoteError::Request)?;

        debug!(key_id = %key.key_id, repo = %self.repo, "fetched public key");
        Ok(key)
    }

    /// Seal `value` with `public_key` and upsert it as `name`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError` if sealing fails (nothing is sent), or
    /// `RemoteError::Http` unless the API answers 201 or 204.
    pub fn create_or_update_secret(
        &self,
        name: &str,
        value: &str,
        public_key: &RemotePublicKey,
    ) -> Result<()> {
        let encrypted_value = seal::seal(public_key, value)?;
        let payload = SecretPayload {
            encrypted_value: &encrypted_value,
            key_id: &public_key.key_id,
        };

        let response = self
            .authorize(self.client.put(self.url(&format!("/{}", name))))
            .json(&payload)
            .send()
            .map_err(RemoteError::Request)?;

        Self::expect_status(response, &[201, 204])?;
        debug!(%name, "upserted secret via api");
        Ok(())
    }

    /// Public key, fetched on first use.
    fn cached_public_key(&mut self) -> Result<RemotePublicKey> {
        if let Some(key) = &self.public_key {
            return Ok(key.clone());
        }
        let key = self.get_public_key()?;
        self.public_key = Some(key.clone());
        Ok(key)
    }
}

impl SecretsStore for GithubApi {
    fn name(&self) -> &'static str {
        "api"
    }

    fn set_secret(&mut self, name: &str, value: &str) -> Result<()> {
        let key = self.cached_public_key()?;
        self.create_or_update_secret(name, value, &key)
    }

    /// Walks every page until `total_count` names are collected.
    fn list_secrets(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for page in 1.. {
            let request = self
                .client
                .get(self.url(""))
                .query(&[("per_page", PER_PAGE), ("page", page)]);
            let response = self
                .authorize(request)
                .send()
                .map_err(RemoteError::Request)?;

            let list: SecretList = Self::expect_status(response, &[200])?
                .json()
                .map_err(RemoteError::Request)?;

            let received = list.secrets.len();
            names.extend(list.secrets.into_iter().map(|s| s.name));
            debug!(page, received, total = list.total_count, "listed secrets page");

            if received == 0 || names.len() >= list.total_count {
                break;
            }
        }

        Ok(names)
    }

    fn delete_secret(&mut self, name: &str) -> Result<()> {
        let response = self
            .authorize(self.client.delete(self.url(&format!("/{}", name))))
            .send()
            .map_err(RemoteError::Request)?;

        Self::expect_status(response, &[204])?;
        debug!(%name, "deleted secret via api");
        Ok(())
    }
}

impl std::fmt::Debug for GithubApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubApi")
            .field("base_url", &self.base_url)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}
