//! Plugin-based resource registry
//!
//! The registry allows resource types to be registered dynamically at
//! runtime, avoiding hardcoded dispatch chains.
//!
//! ## Registration
//!
//! Implementations should register themselves during provider construction:
//!
//! ```rust,ignore
//! // In uol-resource-contact crate
//! pub fn register(registry: &ResourceRegistry) {
//!     registry.register(TYPE_NAME, Arc::new(ContactFactory));
//! }
//! ```

use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::traits::{ResourceHandler, ResourceHandlerFactory};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Registry mapping resource type names to handler factories
///
/// ## Thread Safety
///
/// The registry uses interior mutability with RwLock, allowing concurrent
/// reads and exclusive writes.
#[derive(Default)]
pub struct ResourceRegistry {
    /// Registered resource handler factories
    factories: RwLock<HashMap<String, Arc<dyn ResourceHandlerFactory>>>,
}

impl ResourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource handler factory under a type name
    ///
    /// # Parameters
    ///
    /// - `name`: resource type name (e.g. "uol_contact")
    /// - `factory`: factory object for creating handler instances
    pub fn register(&self, name: impl Into<String>, factory: Arc<dyn ResourceHandlerFactory>) {
        let name = name.into();
        let mut factories = self.factories.write().unwrap();
        factories.insert(name, factory);
    }

    /// Construct a handler for a registered type
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn ResourceHandler>)`: a fresh handler instance
    /// - `Err(Error::NotFound)`: no factory registered under `name`
    pub fn create(
        &self,
        name: &str,
        client: Option<Arc<ApiClient>>,
    ) -> Result<Box<dyn ResourceHandler>> {
        let factories = self.factories.read().unwrap();
        let factory = factories
            .get(name)
            .ok_or_else(|| Error::not_found(format!("no resource type registered under '{}'", name)))?;
        factory.create(client)
    }

    /// Construct one handler per registered type
    pub fn create_all(
        &self,
        client: Option<Arc<ApiClient>>,
    ) -> Result<Vec<Box<dyn ResourceHandler>>> {
        let factories = self.factories.read().unwrap();
        factories
            .values()
            .map(|factory| factory.create(client.clone()))
            .collect()
    }

    /// Registered type names
    pub fn type_names(&self) -> Vec<String> {
        let factories = self.factories.read().unwrap();
        factories.keys().cloned().collect()
    }
}
