//! Configuration types for the UOL provider
//!
//! This module defines the credential structures built at provider
//! configure time.

use serde::{Deserialize, Serialize};

/// API credentials for the UOL accounting service
///
/// Immutable once configured; owned exclusively by the [`ApiClient`].
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the token.
///
/// [`ApiClient`]: crate::client::ApiClient
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Email for API authentication
    pub email: String,

    /// API token for authentication
    /// ⚠️ NEVER log this value
    pub token: String,
}

impl Credentials {
    /// Create new credentials
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    /// Validate the credentials
    ///
    /// Both fields must be non-empty before any request is issued. Absence
    /// is a fatal configuration error, not a retryable condition.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.email.is_empty() {
            return Err(crate::Error::config("the 'email' attribute cannot be empty"));
        }
        if self.token.is_empty() {
            return Err(crate::Error::config("the 'token' attribute cannot be empty"));
        }
        Ok(())
    }
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("token", &"<REDACTED>")
            .finish()
    }
}

/// Raw provider settings as delivered by the orchestration host
///
/// Fields are optional at this stage so a missing or null attribute can be
/// reported as a configuration error instead of a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    /// Email for API authentication
    pub email: Option<String>,

    /// API token for authentication
    pub token: Option<String>,
}

impl ProviderSettings {
    /// Convert raw settings into validated credentials
    ///
    /// Fails if either attribute is missing, null, or empty. No
    /// partial/default credentials are permitted.
    pub fn into_credentials(self) -> Result<Credentials, crate::Error> {
        let email = self.email.ok_or_else(|| {
            crate::Error::config("the provider configuration is missing the 'email' attribute")
        })?;
        let token = self.token.ok_or_else(|| {
            crate::Error::config("the provider configuration is missing the 'token' attribute")
        })?;

        let credentials = Credentials::new(email, token);
        credentials.validate()?;
        Ok(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(Credentials::new("", "t1").validate().is_err());
        assert!(Credentials::new("a@b.com", "").validate().is_err());
        assert!(Credentials::new("a@b.com", "t1").validate().is_ok());
    }

    #[test]
    fn test_settings_missing_token() {
        let settings: ProviderSettings =
            serde_json::from_value(serde_json::json!({ "email": "a@b.com" })).unwrap();

        let err = settings.into_credentials().unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_settings_null_token() {
        let settings: ProviderSettings =
            serde_json::from_value(serde_json::json!({ "email": "a@b.com", "token": null }))
                .unwrap();

        assert!(settings.into_credentials().is_err());
    }

    #[test]
    fn test_token_not_exposed_in_debug() {
        let credentials = Credentials::new("a@b.com", "secret_token_12345");

        let debug_str = format!("{:?}", credentials);
        assert!(!debug_str.contains("secret_token_12345"));
        assert!(debug_str.contains("a@b.com"));
    }
}
