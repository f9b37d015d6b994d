use super::{Include, SchemaNode, Select};
use crate::Context;

use graft_core::{Query, Record, Result};
use std::{future::Future, sync::Arc};

/// How to fetch and attach one related set of records.
///
/// The child service is queried for records whose `child_field` matches the
/// value at `parent_field` on the parent record. The result is attached to
/// the parent under `name_as`, or the relation name.
#[derive(Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Identifier of the service holding the related records
    pub service: String,

    /// Dotted path to the join value on the parent record
    pub parent_field: String,

    /// Field on the child records matched against the join value
    pub child_field: String,

    /// Static constraints added to every query for this relation
    #[serde(default)]
    pub query: Query,

    /// Per-record constraints, merged over `query`
    #[serde(skip)]
    pub select: Option<Arc<dyn Select>>,

    /// Key the result is attached under. Defaults to the relation name.
    #[serde(default)]
    pub name_as: Option<String>,

    /// Keep a single match as a one-element list instead of collapsing it
    #[serde(default)]
    pub as_array: bool,

    /// Relations to populate on the fetched records
    #[serde(default)]
    pub include: Option<SchemaNode>,
}

impl Relation {
    pub fn new(
        service: impl Into<String>,
        parent_field: impl Into<String>,
        child_field: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            parent_field: parent_field.into(),
            child_field: child_field.into(),
            query: Query::default(),
            select: None,
            name_as: None,
            as_array: false,
            include: None,
        }
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Sets a closure computing per-record constraints.
    pub fn select<F, Fut>(self, f: F) -> Self
    where
        F: Fn(&Context, &Record) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Query>> + Send,
    {
        self.select_with(f)
    }

    pub fn select_with(mut self, select: impl Select) -> Self {
        self.select = Some(Arc::new(select));
        self
    }

    pub fn name_as(mut self, key: impl Into<String>) -> Self {
        self.name_as = Some(key.into());
        self
    }

    pub fn as_array(mut self, as_array: bool) -> Self {
        self.as_array = as_array;
        self
    }

    pub fn include(mut self, include: impl Into<SchemaNode>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Replaces the per-record select. Useful to attach behaviour to a
    /// relation loaded from configuration.
    pub fn set_select<F, Fut>(&mut self, f: F)
    where
        F: Fn(&Context, &Record) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Query>> + Send,
    {
        self.select = Some(Arc::new(f));
    }

    /// The key this relation attaches under when declared as `name`.
    pub fn key<'a>(&'a self, name: &'a str) -> &'a str {
        self.name_as.as_deref().unwrap_or(name)
    }

    pub fn nested(&self) -> Option<&Include> {
        self.include.as_ref().map(SchemaNode::include)
    }
}

impl std::fmt::Debug for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relation")
            .field("service", &self.service)
            .field("parent_field", &self.parent_field)
            .field("child_field", &self.child_field)
            .field("query", &self.query)
            .field("select", &self.select.as_ref().map(|_| ".."))
            .field("name_as", &self.name_as)
            .field("as_array", &self.as_array)
            .field("include", &self.include)
            .finish()
    }
}
