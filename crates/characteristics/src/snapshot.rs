//! Plain exported form of a curator.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A subject and its stored raw characteristic values.
///
/// Descriptors are deliberately absent; they are re-resolved from the
/// subject type's registry when a curator is imported.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot<S> {
    /// The curated subject.
    pub subject: Arc<S>,

    /// Raw values by characteristic name, in store order.
    pub characteristics: IndexMap<String, Value>,
}

impl<S> Snapshot<S> {
    /// Create a snapshot.
    pub fn new(subject: Arc<S>, characteristics: IndexMap<String, Value>) -> Self {
        Self {
            subject,
            characteristics,
        }
    }
}

impl<S> Clone for Snapshot<S> {
    fn clone(&self) -> Self {
        Self {
            subject: Arc::clone(&self.subject),
            characteristics: self.characteristics.clone(),
        }
    }
}
