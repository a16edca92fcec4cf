//! Characteristics: per-instance caches of derived, presentation-aware
//! attributes.
//!
//! A subject type declares which of its values count as characteristics and
//! how each should be presented. A [`Curator`] reads those values once,
//! memoizes them alongside their descriptors, and exposes them through a
//! single ordered store.
//!
//! # Core Principles
//!
//! - **Memoized**: Characteristics are read from the subject once, at construction
//! - **Lazy defaults**: Declared but unset characteristics read as empty without being stored
//! - **Loose equality**: Stores compare by raw values, never by wrapper or descriptor
//! - **Plain export**: Snapshots carry raw values only; descriptors are re-resolved on import
//!
//! # Example
//!
//! ```
//! use once_cell::sync::Lazy;
//!
//! use characteristics::{CharacteristicDescriptor, Characterization, Characterized, Curator};
//! use serde_json::{json, Value};
//!
//! struct Person {
//!     name: String,
//! }
//!
//! impl Characterized for Person {
//!     fn characterization() -> &'static Characterization {
//!         static REGISTRY: Lazy<Characterization> = Lazy::new(|| {
//!             Characterization::new()
//!                 .with(CharacteristicDescriptor::new("name"))
//!                 .with(CharacteristicDescriptor::new("age").with_unit("years"))
//!         });
//!         &REGISTRY
//!     }
//!
//!     fn characteristic(&self, name: &str) -> Option<Value> {
//!         match name {
//!             "name" => Some(json!(self.name)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut curator = Curator::new(Person { name: "Ada".to_string() });
//! assert_eq!(curator.keys().collect::<Vec<_>>(), vec!["name"]);
//!
//! curator.set("age", 30);
//! assert_eq!(curator.get_raw("age"), Some(json!(30)));
//! ```

pub mod characterization;
pub mod config;
pub mod curation;
pub mod equality;
pub mod error;
pub mod store;

mod curator;
mod persistence;
mod snapshot;

pub use curator::Curator;
pub use characterization::{CharacteristicDescriptor, Characterization, Characterized};
pub use config::CuratorConfig;
pub use curation::{Curation, RawValued};
pub use equality::{loose_eq, loose_hash};
pub use error::{CharacteristicsError, Result};
pub use snapshot::Snapshot;
pub use store::CharacteristicStore;
