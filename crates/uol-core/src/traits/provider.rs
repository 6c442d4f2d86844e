// # Provider Trait
//
// Host-facing provider lifecycle. The capability set the host drives is
// {type_name, schema, configure, resources, data_sources}; everything else
// about the plugin protocol (transport, plan diffing, state persistence)
// stays with the host.

use serde_json::Value;

use crate::schema::Schema;
use crate::traits::resource::ResourceHandler;

/// Trait for provider implementations
///
/// One concrete type implements this per remote system. The host calls
/// `configure` exactly once before dispatching lifecycle operations; the
/// client built there is shared read-only by every handler for the process
/// lifetime, so no locking is needed downstream.
pub trait Provider: Send + Sync {
    /// Provider type name the host dispatches on (e.g. "uol")
    fn type_name(&self) -> &'static str;

    /// Provider-level configuration schema
    fn schema(&self) -> Schema;

    /// Configure the provider from raw host settings
    ///
    /// Builds the shared API client. A missing, null, or empty credential
    /// attribute is a fatal configuration error: no client is constructed
    /// and setup aborts.
    fn configure(&mut self, settings: Value) -> Result<(), crate::Error>;

    /// Resource handlers this provider exposes
    fn resources(&self) -> Result<Vec<Box<dyn ResourceHandler>>, crate::Error>;

    /// Data source handlers this provider exposes
    ///
    /// None today; the listing exists so the host-facing capability set is
    /// complete.
    fn data_sources(&self) -> Result<Vec<Box<dyn ResourceHandler>>, crate::Error> {
        Ok(Vec::new())
    }
}
