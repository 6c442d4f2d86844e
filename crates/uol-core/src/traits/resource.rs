// # Resource Handler Trait
//
// Defines the lifecycle interface for one manageable resource type.
//
// ## Implementations
//
// - Contacts: `uol-resource-contact` crate
//
// ## Plan/State Model
//
// Plan and state values cross this boundary as raw JSON values: the host
// owns the persisted state and speaks untyped attribute maps. Handlers
// deserialize into their typed models, operate, and serialize the result
// back. The state a successful operation returns is what the host persists.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::client::ApiClient;
use crate::schema::Schema;

/// Trait for resource lifecycle implementations
///
/// Each operation is self-contained and stateless apart from the shared,
/// read-only API client: it builds at most one request, issues at most one
/// HTTP call, and checks the status code. Failures are terminal for the
/// operation; retry policy (if any) is the host's.
///
/// # Thread Safety
///
/// The host may drive operations on independent entities concurrently, so
/// implementations must be `Send + Sync`.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    /// Resource type name the host dispatches on (e.g. "uol_contact")
    fn type_name(&self) -> &'static str;

    /// Schema for this resource type
    fn schema(&self) -> Schema;

    /// Create the remote record described by `plan`
    ///
    /// # Returns
    ///
    /// - `Ok(Value)`: the state the host should persist
    /// - `Err(Error)`: the operation failed; no state change
    async fn create(&self, plan: Value) -> Result<Value, crate::Error>;

    /// Refresh the recorded `state`
    ///
    /// # Returns
    ///
    /// - `Ok(Value)`: the (possibly updated) state to persist
    /// - `Err(Error)`: the refresh failed
    async fn read(&self, state: Value) -> Result<Value, crate::Error>;

    /// Reconcile the remote record with `plan`
    ///
    /// # Returns
    ///
    /// - `Ok(Value)`: the state the host should persist
    /// - `Err(Error)`: the operation failed; no state change
    async fn update(&self, plan: Value) -> Result<Value, crate::Error>;

    /// Remove the remote record described by `state`
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the record was removed
    /// - `Err(Error)`: the operation failed or is not supported
    async fn delete(&self, state: Value) -> Result<(), crate::Error>;
}

/// Helper trait for constructing resource handlers
///
/// The client is optional: the host may enumerate handlers before provider
/// configuration has run (or after it failed). Handlers built without a
/// client must exist, and report a configuration error when a network
/// operation is attempted.
pub trait ResourceHandlerFactory: Send + Sync {
    /// Create a ResourceHandler instance
    ///
    /// # Parameters
    ///
    /// - `client`: the shared API client, if the provider is configured
    fn create(
        &self,
        client: Option<Arc<ApiClient>>,
    ) -> Result<Box<dyn ResourceHandler>, crate::Error>;
}
