use crate::{Annotations, Value};

use indexmap::IndexMap;
use std::ops;

/// A keyed record, as read from or written to a service.
///
/// Fields keep their insertion order. Population bookkeeping is stored in
/// [`Annotations`] next to the fields rather than in them, so the field map
/// only ever holds caller data and attached relations.
#[derive(Debug, Default, Clone)]
pub struct Record {
    fields: IndexMap<String, Value>,
    annotations: Annotations,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: IndexMap<String, Value>) -> Self {
        Self {
            fields,
            annotations: Annotations::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.fields.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Sets `key` to `value`, returning the previous value.
    ///
    /// Overwriting an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Removes `key`, preserving the order of the remaining fields.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    pub fn retain(&mut self, mut f: impl FnMut(&str, &Value) -> bool) {
        self.fields.retain(|key, value| f(key, value));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }

    pub fn into_fields(self) -> IndexMap<String, Value> {
        self.fields
    }
}

impl ops::Index<&str> for Record {
    type Output = Value;

    #[track_caller]
    fn index(&self, key: &str) -> &Value {
        match self.fields.get(key) {
            Some(value) => value,
            None => panic!("record has no field `{key}`"),
        }
    }
}

impl ops::IndexMut<&str> for Record {
    #[track_caller]
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.fields.get_mut(key) {
            Some(value) => value,
            None => panic!("record has no field `{key}`"),
        }
    }
}

/// Records compare by their fields; annotations are bookkeeping and do not
/// take part in equality.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_fields(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
