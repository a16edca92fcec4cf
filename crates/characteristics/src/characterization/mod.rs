//! Type-level declarations of which characteristics a subject exposes.
//!
//! A subject type implements [`Characterized`] to hand the curator two things:
//! its [`Characterization`] (the ordered registry of declared names and their
//! descriptors) and a way to read each characteristic off an instance.
//!
//! ```
//! use once_cell::sync::Lazy;
//!
//! use characteristics::{CharacteristicDescriptor, Characterization, Characterized};
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
//! ```

mod descriptor;
mod registry;

use serde_json::Value;

pub use descriptor::CharacteristicDescriptor;
pub use registry::Characterization;

/// A type whose instances expose declared characteristics.
pub trait Characterized {
    /// The registry shared by every instance of this type.
    fn characterization() -> &'static Characterization;

    /// Read the characteristic `name` from this instance.
    ///
    /// Returns `None` when the instance does not provide an accessor for
    /// `name`. A provided accessor with nothing to report may return either
    /// `None` or `Some(Value::Null)`.
    fn characteristic(&self, name: &str) -> Option<Value>;

    /// Name used for this subject type in errors and log events.
    fn subject_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
