// # Contact Resource
//
// Lifecycle implementation for contact records in the UOL accounting API.
//
// ## Endpoint mapping
//
// - Create: `POST /contacts`, success = 201 Created
// - Update: `PATCH /contacts/{id}`, success = 200 OK
// - Read: pass-through of the host-persisted state, no API call
// - Delete: rejected, the contact API offers no removal endpoint
//
// ## Constraints
//
// - One HTTP request per operation, no retry (failures are terminal for
//   the operation and surfaced to the host as-is)
// - No caching and no drift detection; the host owns plan/state persistence

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use uol_core::schema::{Attribute, Schema};
use uol_core::traits::{ResourceHandler, ResourceHandlerFactory};
use uol_core::{ApiClient, Error, Result};

/// Resource type name the host dispatches on
pub const TYPE_NAME: &str = "uol_contact";

/// Collection endpoint, relative to the API base
const CONTACTS_PATH: &str = "contacts";

/// Fixed message for the rejected delete operation
const DELETE_UNSUPPORTED: &str =
    "the delete operation is not supported for the contact resource; the remote record is left in place";

/// One contact record as the host persists it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Name of the contact
    pub name: String,

    /// ID of the contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Wire payload for create/update calls
///
/// Separate from [`Contact`] so the request body is exactly
/// `{"name": <value>}` and the id never leaks into it.
#[derive(Debug, Serialize)]
struct ContactPayload<'a> {
    name: &'a str,
}

/// Resource handler for UOL contacts
///
/// Stateless apart from the shared, read-only API client; safe to drive
/// concurrently across independent entities.
pub struct ContactResource {
    client: Option<Arc<ApiClient>>,
}

impl ContactResource {
    /// Create a contact handler
    ///
    /// `client` is `None` when provider configuration has not run (or
    /// failed); network operations then report a configuration error.
    pub fn new(client: Option<Arc<ApiClient>>) -> Self {
        Self { client }
    }

    fn client(&self) -> Result<&ApiClient> {
        self.client.as_deref().ok_or_else(|| {
            Error::config(
                "the API client is not initialized; provider configuration must succeed before contact operations",
            )
        })
    }
}

#[async_trait]
impl ResourceHandler for ContactResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            Attribute::string("name", "Name of the contact").required(),
            Attribute::string("id", "ID of the contact"),
        ])
    }

    async fn create(&self, plan: Value) -> Result<Value> {
        let contact: Contact = serde_json::from_value(plan)?;
        let client = self.client()?;

        tracing::info!("creating contact '{}'", contact.name);

        let response = client
            .post(CONTACTS_PATH, &ContactPayload { name: &contact.name })
            .await?;

        let status = response.status().as_u16();
        if status != 201 {
            tracing::warn!("contact create failed with status {}", status);
            return Err(Error::api(status, "error creating contact"));
        }

        tracing::info!("created contact '{}'", contact.name);

        // The create response body is not parsed: the submitted plan is
        // persisted as the new state.
        // TODO: capture the server-assigned contact id from the create
        // response once its payload shape is confirmed against the live API.
        Ok(serde_json::to_value(&contact)?)
    }

    async fn read(&self, state: Value) -> Result<Value> {
        // The remote system is never queried here; the host-persisted state
        // is returned unchanged, so remote drift stays invisible.
        tracing::debug!("returning contact state unchanged");
        Ok(state)
    }

    async fn update(&self, plan: Value) -> Result<Value> {
        let contact: Contact = serde_json::from_value(plan)?;
        let id = contact
            .id
            .as_deref()
            .ok_or_else(|| Error::invalid_input("contact update requires an 'id' in the plan"))?;
        let client = self.client()?;

        tracing::info!("updating contact '{}' (id: {})", contact.name, id);

        let response = client
            .patch(
                &format!("{}/{}", CONTACTS_PATH, id),
                &ContactPayload { name: &contact.name },
            )
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            tracing::warn!("contact update failed with status {}", status);
            return Err(Error::api(status, "error updating contact"));
        }

        tracing::info!("updated contact '{}' (id: {})", contact.name, id);
        Ok(serde_json::to_value(&contact)?)
    }

    async fn delete(&self, _state: Value) -> Result<()> {
        // Deliberate policy, not an oversight: callers must not assume the
        // remote record can be removed through this resource.
        Err(Error::unsupported(DELETE_UNSUPPORTED))
    }
}

/// Factory for contact resource handlers
pub struct ContactFactory;

impl ResourceHandlerFactory for ContactFactory {
    fn create(&self, client: Option<Arc<ApiClient>>) -> Result<Box<dyn ResourceHandler>> {
        Ok(Box::new(ContactResource::new(client)))
    }
}

/// Register the contact resource with a registry
///
/// Called during provider construction to make the contact resource
/// available to the host.
pub fn register(registry: &uol_core::ResourceRegistry) {
    registry.register(TYPE_NAME, Arc::new(ContactFactory));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_name() {
        let resource = ContactResource::new(None);
        assert_eq!(resource.type_name(), "uol_contact");
    }

    #[test]
    fn test_schema_attributes() {
        let schema = ContactResource::new(None).schema();

        assert!(schema.attribute("name").unwrap().required);
        assert!(!schema.attribute("id").unwrap().required);
    }

    #[test]
    fn test_payload_is_name_only() {
        let payload = ContactPayload { name: "Acme" };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "name": "Acme" })
        );
    }

    #[test]
    fn test_contact_state_omits_absent_id() {
        let contact = Contact {
            name: "Acme".to_string(),
            id: None,
        };
        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            json!({ "name": "Acme" })
        );
    }

    #[tokio::test]
    async fn test_create_without_client_is_config_error() {
        let resource = ContactResource::new(None);

        let err = resource.create(json!({ "name": "Acme" })).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_update_without_client_is_config_error() {
        let resource = ContactResource::new(None);

        let err = resource
            .update(json!({ "name": "Acme", "id": "42" }))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_update_without_id_is_invalid_input() {
        // Rejected before the client is even consulted
        let resource = ContactResource::new(None);

        let err = resource.update(json!({ "name": "Acme" })).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_read_is_passthrough_without_client() {
        let resource = ContactResource::new(None);
        let state = json!({ "name": "Acme", "id": "42" });

        let result = resource.read(state.clone()).await.unwrap();
        assert_eq!(result, state);
    }

    #[tokio::test]
    async fn test_delete_message_is_fixed_for_any_state() {
        let resource = ContactResource::new(None);

        let a = resource.delete(json!({ "name": "Acme" })).await.unwrap_err();
        let b = resource
            .delete(json!({ "name": "Beta", "id": "42" }))
            .await
            .unwrap_err();

        assert!(matches!(a, Error::Unsupported(_)));
        assert_eq!(a.to_string(), b.to_string());
    }

    #[tokio::test]
    async fn test_malformed_plan_is_json_error() {
        let resource = ContactResource::new(None);

        let err = resource.create(json!({ "name": 42 })).await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
