// # uol-core
//
// Core library for the UOL accounting provider plugin.
//
// ## Architecture Overview
//
// This library provides the shared vocabulary for the provider:
// - **ApiClient**: authenticated HTTP client for the UOL REST API
// - **Provider**: host-facing provider lifecycle (configure, schema, handler listing)
// - **ResourceHandler**: Create/Read/Update/Delete over one resource type
// - **ResourceRegistry**: plugin-based registry for resource types
// - **Schema**: attribute descriptions consumed by the orchestration host
//
// ## Design Principles
//
// 1. **Separation of Concerns**: lifecycle semantics live in resource crates,
//    wiring lives in the provider crate, plumbing lives here
// 2. **Plugin-Based**: resource types are registered dynamically, no
//    hard-coded dispatch chains
// 3. **Host-Owned State**: plan/state persistence, diffing, and scheduling
//    belong to the external orchestration host, never to this library
// 4. **Single-Shot Operations**: one HTTP call per lifecycle operation, no
//    retry or backoff (failures are surfaced to the host as-is)

pub mod client;
pub mod config;
pub mod error;
pub mod registry;
pub mod schema;
pub mod traits;

// Re-export core types for convenience
pub use client::ApiClient;
pub use config::{Credentials, ProviderSettings};
pub use error::{Error, Result};
pub use registry::ResourceRegistry;
pub use schema::{Attribute, AttributeKind, Schema};
pub use traits::{Provider, ResourceHandler, ResourceHandlerFactory};
