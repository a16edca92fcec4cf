//! The per-instance characteristic cache.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use serde_json::Value;
use tracing::{debug, trace};

use crate::characterization::Characterized;
use crate::config::CuratorConfig;
use crate::curation::Curation;
use crate::error::{CharacteristicsError, Result};
use crate::snapshot::Snapshot;
use crate::store::CharacteristicStore;

/// Computes, memoizes, copies, and compares the characteristics of one
/// subject.
///
/// Construction reads every declared characteristic the subject provides and
/// stores the non-empty ones. Reads of declared characteristics that were not
/// stored get an empty default that is never written back.
///
/// A curator is not `Sync`. Callers that share one across threads must wrap
/// it in a lock.
///
/// # Example
///
/// ```
/// # use once_cell::sync::Lazy;
/// # use characteristics::{CharacteristicDescriptor, Characterization, Characterized};
/// # use serde_json::{json, Value};
/// # struct Person;
/// # impl Characterized for Person {
/// #     fn characterization() -> &'static Characterization {
/// #         static R: Lazy<Characterization> = Lazy::new(|| Characterization::new()
/// #             .with(CharacteristicDescriptor::new("name"))
/// #             .with(CharacteristicDescriptor::new("age")));
/// #         &R
/// #     }
/// #     fn characteristic(&self, name: &str) -> Option<Value> {
/// #         (name == "name").then(|| json!("Ada"))
/// #     }
/// # }
/// use characteristics::Curator;
///
/// let mut curator = Curator::new(Person);
/// assert_eq!(curator.to_plain()["name"], json!("Ada"));
/// assert!(curator.get("age").unwrap().is_empty());
///
/// curator.set("age", 36);
/// assert_eq!(curator.keys().collect::<Vec<_>>(), vec!["name", "age"]);
/// ```
#[derive(Debug)]
pub struct Curator<S: Characterized> {
    subject: Arc<S>,
    config: CuratorConfig,
    store: OnceCell<CharacteristicStore>,
}

impl<S: Characterized> Curator<S> {
    /// Curate `subject` with the default configuration.
    pub fn new(subject: S) -> Self {
        Self::with_config(Arc::new(subject), CuratorConfig::default())
    }

    /// Curate a subject that is already shared.
    pub fn from_arc(subject: Arc<S>) -> Self {
        Self::with_config(subject, CuratorConfig::default())
    }

    /// Curate `subject` with a custom configuration.
    pub fn with_config(subject: Arc<S>, config: CuratorConfig) -> Self {
        let mut curator = Self {
            subject,
            config,
            store: OnceCell::new(),
        };

        if config.eager {
            let populated = curator.populate();
            debug!(
                subject = S::subject_name(),
                declared = S::characterization().len(),
                populated,
                "curated subject"
            );
        }

        curator
    }

    /// Rebuild a curator from an exported snapshot.
    ///
    /// Descriptors are resolved against the subject type's current registry;
    /// undeclared names are accepted with no descriptor.
    pub fn import(snapshot: Snapshot<S>) -> Self {
        let Snapshot {
            subject,
            characteristics,
        } = snapshot;

        let mut curator = Self {
            subject,
            config: CuratorConfig::default(),
            store: OnceCell::new(),
        };
        curator.store();

        for (name, value) in characteristics {
            curator.set(name, value);
        }

        debug!(
            subject = S::subject_name(),
            imported = curator.len(),
            "imported characteristics"
        );
        curator
    }

    /// Rebuild a curator from a snapshot under `config`.
    ///
    /// With `strict` set, the import fails on the first undeclared name.
    /// `eager` is ignored: the snapshot is the source of truth.
    pub fn import_with_config(snapshot: Snapshot<S>, config: CuratorConfig) -> Result<Self> {
        let Snapshot {
            subject,
            characteristics,
        } = snapshot;

        let mut curator = Self {
            subject,
            config,
            store: OnceCell::new(),
        };
        curator.store();

        for (name, value) in characteristics {
            curator.try_set(name, value)?;
        }

        debug!(
            subject = S::subject_name(),
            imported = curator.len(),
            strict = config.strict,
            "imported characteristics"
        );
        Ok(curator)
    }

    /// Export the subject and the stored raw values.
    pub fn export(&self) -> Snapshot<S> {
        Snapshot::new(Arc::clone(&self.subject), self.to_plain())
    }

    /// The curated subject.
    pub fn subject(&self) -> &Arc<S> {
        &self.subject
    }

    /// The configuration this curator was built with.
    pub fn config(&self) -> &CuratorConfig {
        &self.config
    }

    /// The backing store, created on first access.
    pub fn store(&self) -> &CharacteristicStore {
        self.store
            .get_or_init(|| CharacteristicStore::new(S::characterization()))
    }

    fn store_mut(&mut self) -> &mut CharacteristicStore {
        self.store();
        self.store.get_mut().expect("store initialized above")
    }

    /// Re-read every declared characteristic from the subject.
    ///
    /// Non-empty values overwrite what is stored; characteristics the subject
    /// no longer provides keep their stored value. Returns the number of
    /// characteristics written.
    pub fn refresh(&mut self) -> usize {
        let refreshed = self.populate();
        debug!(subject = S::subject_name(), refreshed, "refreshed characteristics");
        refreshed
    }

    fn populate(&mut self) -> usize {
        let subject = Arc::clone(&self.subject);
        let mut populated = 0;

        for name in S::characterization().names() {
            match subject.characteristic(name) {
                None => trace!(characteristic = name, "subject provides no accessor"),
                Some(Value::Null) if self.config.skip_null => {
                    trace!(characteristic = name, "accessor returned null")
                }
                Some(value) => {
                    self.set(name, value);
                    populated += 1;
                }
            }
        }

        // An empty population still leaves a store behind.
        self.store();
        populated
    }

    /// Store `value` under `name`, returning the wrapper it replaced.
    ///
    /// The descriptor is resolved from the subject type's registry. Names
    /// the registry does not declare are stored without one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Curation> {
        let name = name.into();
        let descriptor = S::characterization().descriptor(&name);
        if descriptor.is_none() {
            debug!(
                characteristic = %name,
                subject = S::subject_name(),
                "storing undeclared characteristic"
            );
        }

        self.store_mut()
            .insert(name, Curation::new(value.into(), descriptor))
    }

    /// Like [`set`](Self::set), but fails for undeclared names when the
    /// curator is strict.
    pub fn try_set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Curation>> {
        let name = name.into();
        if self.config.strict && !S::characterization().is_declared(&name) {
            return Err(CharacteristicsError::Undeclared {
                name,
                subject: S::subject_name(),
            });
        }
        Ok(self.set(name, value))
    }

    /// The wrapper stored under `name`, or an empty default when `name` is
    /// declared but unset.
    pub fn get(&self, name: &str) -> Option<Cow<'_, Curation>> {
        self.store().fetch(name)
    }

    /// The raw value under `name`, with the same defaulting as [`get`](Self::get).
    pub fn get_raw(&self, name: &str) -> Option<Value> {
        self.get(name).map(|curation| curation.into_owned().into_raw_value())
    }

    /// Remove a stored characteristic. Later reads fall back to the default.
    pub fn remove(&mut self, name: &str) -> Option<Curation> {
        self.store_mut().remove(name)
    }

    /// Whether `name` is stored.
    pub fn contains_key(&self, name: &str) -> bool {
        self.store().contains_key(name)
    }

    /// Stored names, in store order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.store().keys()
    }

    /// Stored `(name, wrapper)` pairs, in store order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Curation> {
        self.store().iter()
    }

    /// Number of stored characteristics.
    pub fn len(&self) -> usize {
        self.store().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    /// The stored subset of `names`, in the order requested.
    pub fn slice<I, N>(&self, names: I) -> CharacteristicStore
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        self.store().slice(names)
    }

    /// Stored raw values with wrappers and descriptors stripped.
    pub fn to_plain(&self) -> IndexMap<String, Value> {
        self.store().to_plain()
    }
}

impl<S: Characterized> Clone for Curator<S> {
    /// Shares the subject and copies the store one level deep.
    fn clone(&self) -> Self {
        Self {
            subject: Arc::clone(&self.subject),
            config: self.config,
            store: self.store.clone(),
        }
    }
}

impl<S: Characterized, T: Characterized> PartialEq<Curator<T>> for Curator<S> {
    fn eq(&self, other: &Curator<T>) -> bool {
        self.store() == other.store()
    }
}

impl<S: Characterized> Eq for Curator<S> {}

impl<S: Characterized> Hash for Curator<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.store().hash(state);
    }
}

impl<'a, S: Characterized> IntoIterator for &'a Curator<S> {
    type Item = (&'a String, &'a Curation);
    type IntoIter = indexmap::map::Iter<'a, String, Curation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characterization::{CharacteristicDescriptor, Characterization};
    use serde_json::json;
    use once_cell::sync::Lazy;

    #[derive(Debug)]
    struct Person {
        name: &'static str,
        nickname: Option<&'static str>,
    }

    impl Characterized for Person {
        fn characterization() -> &'static Characterization {
            static REGISTRY: Lazy<Characterization> = Lazy::new(|| {
                Characterization::new()
                    .with(CharacteristicDescriptor::new("name"))
                    .with(CharacteristicDescriptor::new("age").with_unit("years"))
                    .with(CharacteristicDescriptor::new("nickname"))
            });
            &REGISTRY
        }

        fn characteristic(&self, name: &str) -> Option<Value> {
            match name {
                "name" => Some(json!(self.name)),
                "nickname" => Some(self.nickname.map_or(Value::Null, |n| json!(n))),
                _ => None,
            }
        }

        fn subject_name() -> &'static str {
            "Person"
        }
    }

    fn ada() -> Person {
        Person {
            name: "Ada",
            nickname: None,
        }
    }

    #[test]
    fn test_construction_stores_non_empty_characteristics() {
        let curator = Curator::new(ada());

        assert_eq!(curator.keys().collect::<Vec<_>>(), vec!["name"]);
        assert_eq!(curator.get("name").unwrap().raw_value(), &json!("Ada"));
    }

    #[test]
    fn test_store_is_created_once() {
        let curator = Curator::new(ada());
        let first: *const CharacteristicStore = curator.store();
        let second: *const CharacteristicStore = curator.store();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_from_arc_keeps_shared_subject() {
        let subject = Arc::new(ada());
        let curator = Curator::from_arc(Arc::clone(&subject));

        assert!(Arc::ptr_eq(curator.subject(), &subject));
        assert_eq!(curator.config(), &CuratorConfig::default());
        assert_eq!(curator.get_raw("name"), Some(json!("Ada")));
    }

    #[test]
    fn test_config_is_retained() {
        let config = CuratorConfig::new().strict().keep_null();
        let curator = Curator::with_config(Arc::new(ada()), config);
        assert_eq!(*curator.config(), config);
        assert_eq!(*curator.clone().config(), config);
    }

    #[test]
    fn test_lazy_config_leaves_store_empty() {
        let mut curator = Curator::with_config(Arc::new(ada()), CuratorConfig::new().lazy());
        assert!(curator.is_empty());
        assert!(curator.get("name").unwrap().is_empty());

        assert_eq!(curator.refresh(), 1);
        assert_eq!(curator.get_raw("name"), Some(json!("Ada")));
    }

    #[test]
    fn test_keep_null_stores_null_accessor_results() {
        let curator = Curator::with_config(Arc::new(ada()), CuratorConfig::new().keep_null());
        assert_eq!(curator.keys().collect::<Vec<_>>(), vec!["name", "nickname"]);
        assert!(curator.get("nickname").unwrap().is_empty());
    }

    #[test]
    fn test_set_resolves_descriptor() {
        let mut curator = Curator::new(ada());
        assert!(curator.set("age", 36).is_none());

        let age = curator.get("age").unwrap();
        assert_eq!(age.raw_value(), &json!(36));
        assert_eq!(age.descriptor().unwrap().unit.as_deref(), Some("years"));
    }

    #[test]
    fn test_set_returns_replaced_wrapper() {
        let mut curator = Curator::new(ada());
        let replaced = curator.set("name", "Augusta").unwrap();
        assert_eq!(replaced.raw_value(), &json!("Ada"));
    }

    #[test]
    fn test_undeclared_set_is_accepted() {
        let mut curator = Curator::new(ada());
        curator.set("shoe_size", 38);

        let shoe = curator.get("shoe_size").unwrap();
        assert_eq!(shoe.raw_value(), &json!(38));
        assert!(shoe.descriptor().is_none());
    }

    #[test]
    fn test_strict_try_set_rejects_undeclared() {
        let mut curator = Curator::with_config(Arc::new(ada()), CuratorConfig::new().strict());

        let err = curator.try_set("shoe_size", 38).unwrap_err();
        assert!(matches!(err, CharacteristicsError::Undeclared { ref name, subject: "Person" } if name == "shoe_size"));
        assert!(!curator.contains_key("shoe_size"));

        assert!(curator.try_set("age", 36).unwrap().is_none());
    }

    #[test]
    fn test_lenient_try_set_accepts_undeclared() {
        let mut curator = Curator::new(ada());
        assert!(curator.try_set("shoe_size", 38).is_ok());
    }

    #[test]
    fn test_remove_falls_back_to_default() {
        let mut curator = Curator::new(ada());
        assert!(curator.remove("name").is_some());
        assert!(curator.get("name").unwrap().is_empty());
        assert!(curator.is_empty());
    }

    #[test]
    fn test_clone_shares_subject_and_isolates_store() {
        let original = Curator::new(ada());
        let mut copy = original.clone();
        copy.set("age", 36);

        assert!(Arc::ptr_eq(original.subject(), copy.subject()));
        assert!(!original.contains_key("age"));
        assert!(original.get("age").unwrap().is_empty());
        assert_ne!(original, copy);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut curator = Curator::new(ada());
        curator.set("age", 36);
        curator.set("shoe_size", 38);

        let restored = Curator::import(curator.export());

        assert_eq!(restored.to_plain(), curator.to_plain());
        assert!(Arc::ptr_eq(restored.subject(), curator.subject()));
        assert_eq!(
            restored.get("age").unwrap().descriptor().unwrap().unit.as_deref(),
            Some("years")
        );
    }

    #[test]
    fn test_strict_import_rejects_undeclared() {
        let mut curator = Curator::new(ada());
        curator.set("shoe_size", 38);

        let result = Curator::import_with_config(curator.export(), CuratorConfig::new().strict());
        assert!(matches!(result, Err(CharacteristicsError::Undeclared { .. })));
    }
}
