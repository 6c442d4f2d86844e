// # Authenticated API Client
//
// Thin wrapper around an HTTP client that stamps every outgoing request
// with the Basic-Auth and JSON content headers the UOL API expects.
//
// The client is deliberately dumb:
// - one request per call, no retry, no backoff
// - bodies are forwarded unchanged after serialization
// - responses are returned unparsed; status-code policy belongs to the
//   resource handlers
// - transport failures are propagated verbatim

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Method;
use serde::Serialize;
use std::time::Duration;

use crate::config::Credentials;
use crate::error::Result;

/// UOL API base URL (test environment)
pub const DEFAULT_API_BASE: &str = "https://test.ucetnictvi.uol.cz/api/v1";

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated HTTP client for the UOL REST API
///
/// Created once at provider configure time and shared read-only by all
/// resource handlers for the process lifetime.
pub struct ApiClient {
    /// API credentials
    /// ⚠️ NEVER log this value
    credentials: Credentials,

    /// API base URL, without a trailing slash
    base_url: String,

    /// Underlying HTTP transport
    http: reqwest::Client,
}

// Credentials carry their own redacting Debug
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a client against the default UOL API base
    ///
    /// Validates the credentials first; no client is constructed from
    /// empty credentials.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, DEFAULT_API_BASE)
    }

    /// Create a client against an explicit API base (staging servers, tests)
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Result<Self> {
        credentials.validate()?;

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| crate::Error::config(format!("failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            credentials,
            base_url,
            http,
        })
    }

    /// The API base this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Header value for `Authorization`: `Basic base64(email:token)`
    fn auth_value(&self) -> String {
        let pair = format!("{}:{}", self.credentials.email, self.credentials.token);
        format!("Basic {}", BASE64.encode(pair))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a single request with the auth and JSON headers applied
    async fn send(&self, method: Method, path: &str, body: Vec<u8>) -> Result<reqwest::Response> {
        let url = self.endpoint(path);
        tracing::debug!("{} {}", method, url);

        let response = self
            .http
            .request(method, &url)
            .header(reqwest::header::AUTHORIZATION, self.auth_value())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(response)
    }

    /// POST a JSON body to a path under the API base
    ///
    /// The body is serialized before dispatch so a marshal failure is
    /// reported as a JSON error, distinct from transport errors.
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<reqwest::Response> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::POST, path, body).await
    }

    /// PATCH a JSON body to a path under the API base
    pub async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<reqwest::Response> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::PATCH, path, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Credentials::new("a@b.com", "t1")).unwrap()
    }

    #[test]
    fn test_auth_value_encodes_email_and_token() {
        assert_eq!(client().auth_value(), "Basic YUBiLmNvbTp0MQ==");
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let result = ApiClient::new(Credentials::new("a@b.com", ""));
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let client =
            ApiClient::with_base_url(Credentials::new("a@b.com", "t1"), "http://localhost:8080/")
                .unwrap();

        assert_eq!(client.endpoint("contacts"), "http://localhost:8080/contacts");
        assert_eq!(
            client.endpoint("/contacts/42"),
            "http://localhost:8080/contacts/42"
        );
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(client().base_url(), "https://test.ucetnictvi.uol.cz/api/v1");
    }

    #[test]
    fn test_token_not_exposed_in_debug() {
        let debug_str = format!("{:?}", client());
        assert!(!debug_str.contains("t1\""));
        assert!(debug_str.contains("<REDACTED>"));
    }
}
