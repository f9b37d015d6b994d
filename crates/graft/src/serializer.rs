use crate::Context;

use graft_core::{Record, Value};
use indexmap::IndexMap;
use std::sync::Arc;

/// Serializers keyed by caller role.
pub type Roles = IndexMap<String, Serializer>;

/// Shapes records before they are returned to a caller.
///
/// `only` and `exclude` filter the record's keys; `computed` adds derived
/// fields. Computed keys are recorded on the record so that
/// [`depopulate`](crate::depopulate) can strip them again.
#[derive(Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Serializer {
    /// Keys to keep. Empty keeps every key.
    #[serde(default)]
    pub only: Vec<String>,

    /// Keys to drop
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(skip)]
    pub computed: IndexMap<String, Arc<dyn Computed>>,
}

/// Derives a field value from a record.
pub trait Computed: Send + Sync + 'static {
    fn compute(&self, record: &Record, cx: &Context) -> Value;
}

impl<F> Computed for F
where
    F: Fn(&Record, &Context) -> Value + Send + Sync + 'static,
{
    fn compute(&self, record: &Record, cx: &Context) -> Value {
        self(record, cx)
    }
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn only(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.only = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn computed<F>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record, &Context) -> Value + Send + Sync + 'static,
    {
        self.computed.insert(key.into(), Arc::new(f));
        self
    }

    /// Applies this serializer to one record.
    pub(crate) fn apply(&self, record: &mut Record, cx: &Context) {
        if !self.only.is_empty() {
            record.retain(|key, _| self.only.iter().any(|only| only == key));
        }

        for key in &self.exclude {
            record.remove(key);
        }

        for (key, computed) in &self.computed {
            let value = computed.compute(record, cx);
            let prev = record.insert(key.clone(), value);

            let annotations = record.annotations_mut();
            let ours =
                annotations.computed().contains(key) || annotations.included().contains(key);
            if let Some(prev) = prev.filter(|_| !ours) {
                annotations.push_replaced(key.clone(), prev);
            }
            annotations.push_computed(key.clone());
        }
    }
}

impl std::fmt::Debug for Serializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serializer")
            .field("only", &self.only)
            .field("exclude", &self.exclude)
            .field("computed", &self.computed.keys().collect::<Vec<_>>())
            .finish()
    }
}
