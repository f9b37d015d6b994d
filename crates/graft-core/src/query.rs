use crate::{Error, Predicate, Record, Value};

use indexmap::IndexMap;

/// A conjunction of per-field predicates sent to a service's `find`.
///
/// Field order is the order constraints were first set. Setting a field that
/// already has a constraint replaces it in place.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Query {
    constraints: IndexMap<String, Predicate>,
}

/// A find request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Find {
    pub query: Query,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// A query with a single equality constraint.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut query = Self::new();
        query.insert(field, Predicate::Eq(value.into()));
        query
    }

    /// Builder form of [`Query::insert`].
    pub fn with(mut self, field: impl Into<String>, predicate: impl Into<Predicate>) -> Self {
        self.insert(field, predicate);
        self
    }

    pub fn insert(
        &mut self,
        field: impl Into<String>,
        predicate: impl Into<Predicate>,
    ) -> Option<Predicate> {
        self.constraints.insert(field.into(), predicate.into())
    }

    /// Overlays every constraint of `other` onto `self`. On a shared field
    /// the constraint from `other` wins.
    pub fn merge(&mut self, other: Query) {
        for (field, predicate) in other.constraints {
            self.constraints.insert(field, predicate);
        }
    }

    pub fn get(&self, field: &str) -> Option<&Predicate> {
        self.constraints.get(field)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Predicate> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns `true` if `record` satisfies every constraint. Top-level
    /// fields only; a missing field is matched as `Null`.
    pub fn matches(&self, record: &Record) -> bool {
        self.constraints.iter().all(|(field, predicate)| {
            predicate.matches(record.get(field).unwrap_or(&Value::Null))
        })
    }
}

impl Find {
    pub fn new(query: Query) -> Self {
        Self { query }
    }
}

impl TryFrom<Value> for Query {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Record(record) => Ok(record
                .into_fields()
                .into_iter()
                .map(|(field, value)| (field, Predicate::from(value)))
                .collect()),
            _ => Err(crate::err!("query must be a record")),
        }
    }
}

impl From<Query> for Value {
    fn from(query: Query) -> Self {
        Value::Record(
            query
                .constraints
                .into_iter()
                .map(|(field, predicate)| (field, Value::from(predicate)))
                .collect(),
        )
    }
}

impl<K: Into<String>, P: Into<Predicate>> FromIterator<(K, P)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (field, predicate) in iter {
            query.insert(field, predicate);
        }
        query
    }
}
