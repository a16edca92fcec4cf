//! Presentation metadata attached to a declared characteristic.

use serde::{Deserialize, Serialize};

/// Describes how a characteristic should be presented.
///
/// The curator never interprets these fields; it only pairs the descriptor
/// with raw values so that renderers further out can.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicDescriptor {
    /// Characteristic name, unique within a registry.
    pub name: String,

    /// Human-readable label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// What the characteristic means.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Format hint for renderers (e.g., "currency", "date", "percent").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Unit of measure (e.g., "years", "kg").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl CharacteristicDescriptor {
    /// Create a descriptor with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            description: None,
            format: None,
            unit: None,
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the format hint.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// The label, or the name with underscores spaced out and the first
    /// letter capitalized.
    pub fn label(&self) -> String {
        if let Some(ref label) = self.label {
            return label.clone();
        }

        let spaced = self.name.replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
