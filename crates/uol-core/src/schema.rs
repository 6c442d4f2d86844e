//! Host-facing schema descriptions
//!
//! The orchestration host consumes these to validate plans before
//! dispatching lifecycle operations. Validation machinery itself is owned
//! by the host; this module only describes the attribute surface.

use serde::{Deserialize, Serialize};

/// Attribute value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// UTF-8 string value
    String,
}

/// A single schema attribute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name as it appears in plan/state values
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Value type
    pub kind: AttributeKind,

    /// Whether the host must supply this attribute
    #[serde(default)]
    pub required: bool,

    /// Sensitive attributes must never be echoed into logs or diagnostics
    #[serde(default)]
    pub sensitive: bool,
}

impl Attribute {
    /// Create an optional string attribute
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: AttributeKind::String,
            required: false,
            sensitive: false,
        }
    }

    /// Mark the attribute as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the attribute as sensitive
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Schema for a provider or resource type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Attributes in declaration order
    pub attributes: Vec<Attribute>,
}

impl Schema {
    /// Create a schema from a list of attributes
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_builder() {
        let attr = Attribute::string("token", "API token").required().sensitive();

        assert_eq!(attr.name, "token");
        assert!(attr.required);
        assert!(attr.sensitive);
        assert_eq!(attr.kind, AttributeKind::String);
    }

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::new(vec![
            Attribute::string("name", "Name of the contact").required(),
            Attribute::string("id", "ID of the contact"),
        ]);

        assert!(schema.attribute("name").unwrap().required);
        assert!(!schema.attribute("id").unwrap().required);
        assert!(schema.attribute("missing").is_none());
    }
}
