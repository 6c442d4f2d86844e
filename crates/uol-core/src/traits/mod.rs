//! Core traits for the provider plugin
//!
//! This module defines the interfaces the orchestration host drives.
//!
//! - [`Provider`]: provider lifecycle (configure, schema, handler listing)
//! - [`ResourceHandler`]: Create/Read/Update/Delete over one resource type

pub mod provider;
pub mod resource;

pub use provider::Provider;
pub use resource::{ResourceHandler, ResourceHandlerFactory};
