// # uol-provider
//
// Host-facing provider for the UOL accounting API.
//
// This is a THIN wiring layer only:
// 1. Validating host-supplied credentials
// 2. Constructing the shared API client
// 3. Registering resource types and building their handlers
//
// Lifecycle semantics live in the resource crates. Plan diffing, state
// persistence, and the plugin transport are owned by the external
// orchestration host.

use serde_json::Value;
use std::sync::Arc;

use uol_core::config::ProviderSettings;
use uol_core::schema::{Attribute, Schema};
use uol_core::traits::{Provider, ResourceHandler};
use uol_core::{ApiClient, ResourceRegistry, Result};

/// Provider type name the host dispatches on
pub const TYPE_NAME: &str = "uol";

/// Provider for the UOL accounting system
///
/// One instance per host session. `configure` runs once and produces the
/// API client every resource handler shares; the client is never mutated
/// afterwards, so handlers need no locking.
pub struct UolProvider {
    /// Registered resource types
    registry: ResourceRegistry,

    /// API base handlers will talk to
    api_base: String,

    /// Shared client, present once configure has succeeded
    client: Option<Arc<ApiClient>>,
}

impl UolProvider {
    /// Create a provider against the default UOL API base
    pub fn new() -> Self {
        Self::with_api_base(uol_core::client::DEFAULT_API_BASE)
    }

    /// Create a provider against an explicit API base (staging servers, tests)
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let registry = ResourceRegistry::new();
        uol_resource_contact::register(&registry);

        Self {
            registry,
            api_base: api_base.into(),
            client: None,
        }
    }

    /// Whether configure has produced a usable client
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }
}

impl Default for UolProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for UolProvider {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            Attribute::string("email", "Email for API authentication").required(),
            Attribute::string("token", "API token for authentication")
                .required()
                .sensitive(),
        ])
    }

    fn configure(&mut self, settings: Value) -> Result<()> {
        let settings: ProviderSettings = serde_json::from_value(settings)?;
        let credentials = settings.into_credentials()?;

        let client = ApiClient::with_base_url(credentials, &self.api_base)?;
        self.client = Some(Arc::new(client));

        tracing::info!("provider configured for {}", self.api_base);
        Ok(())
    }

    fn resources(&self) -> Result<Vec<Box<dyn ResourceHandler>>> {
        self.registry.create_all(self.client.clone())
    }
}

/// Construct a handler for one resource type by name
///
/// Convenience for hosts that dispatch on a single type instead of
/// enumerating the full listing.
pub fn resource(provider: &UolProvider, type_name: &str) -> Result<Box<dyn ResourceHandler>> {
    provider.registry.create(type_name, provider.client.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uol_core::Error;

    #[test]
    fn test_type_name() {
        assert_eq!(UolProvider::new().type_name(), "uol");
    }

    #[test]
    fn test_schema_marks_token_sensitive() {
        let schema = UolProvider::new().schema();

        assert!(schema.attribute("email").unwrap().required);
        let token = schema.attribute("token").unwrap();
        assert!(token.required);
        assert!(token.sensitive);
    }

    #[test]
    fn test_new_provider_is_unconfigured() {
        let provider = UolProvider::new();
        assert!(!provider.is_configured());
    }

    #[test]
    fn test_resources_lists_the_contact_type() {
        let provider = UolProvider::new();

        let handlers = provider.resources().unwrap();
        assert_eq!(handlers.len(), 1);
        assert_eq!(handlers[0].type_name(), "uol_contact");
    }

    #[test]
    fn test_data_sources_are_empty() {
        let provider = UolProvider::new();
        assert!(provider.data_sources().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_resource_type() {
        let provider = UolProvider::new();

        let err = resource(&provider, "uol_invoice").err().unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
