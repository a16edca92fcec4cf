//! The wrapper pairing a raw characteristic value with its descriptor.

use std::sync::Arc;

use serde_json::Value;

use crate::characterization::CharacteristicDescriptor;

/// Anything that wraps a raw characteristic value.
///
/// Loose equality and hashing only ever look through this accessor.
pub trait RawValued {
    /// The unwrapped value.
    fn raw_value(&self) -> &Value;
}

/// A raw characteristic value together with the descriptor it was resolved
/// against, if any.
#[derive(Debug, Clone)]
pub struct Curation {
    raw_value: Value,
    descriptor: Option<Arc<CharacteristicDescriptor>>,
}

impl Curation {
    /// Wrap a raw value.
    pub fn new(raw_value: Value, descriptor: Option<Arc<CharacteristicDescriptor>>) -> Self {
        Self {
            raw_value,
            descriptor,
        }
    }

    /// Wrap the empty value, as served for declared but unset characteristics.
    pub fn empty(descriptor: Option<Arc<CharacteristicDescriptor>>) -> Self {
        Self::new(Value::Null, descriptor)
    }

    /// The unwrapped value.
    pub fn raw_value(&self) -> &Value {
        &self.raw_value
    }

    /// Consume the wrapper, returning the raw value.
    pub fn into_raw_value(self) -> Value {
        self.raw_value
    }

    /// The descriptor this value was resolved against.
    pub fn descriptor(&self) -> Option<&CharacteristicDescriptor> {
        self.descriptor.as_deref()
    }

    /// Shared handle to the descriptor.
    pub fn descriptor_arc(&self) -> Option<&Arc<CharacteristicDescriptor>> {
        self.descriptor.as_ref()
    }

    /// Whether the raw value is null.
    pub fn is_empty(&self) -> bool {
        self.raw_value.is_null()
    }
}

impl RawValued for Curation {
    fn raw_value(&self) -> &Value {
        &self.raw_value
    }
}
