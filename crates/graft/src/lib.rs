//! Declarative population of related records across services.
//!
//! A [`SchemaNode`] describes, per relation, which service holds the related
//! records and how parent and child fields join. [`populate`] walks the
//! records at a [`Location`] of a request [`Context`], fetches each
//! relation and attaches the result in place, recursing into nested
//! relations. [`depopulate`] removes exactly what population (and
//! [`serialize`]) added, so records can be persisted again.

pub mod context;
pub use context::{Context, Params, Permissions};

mod engine;
pub use engine::{depopulate, populate, select_schemas, serialize};

pub mod location;
pub use location::Location;

pub mod path;

pub mod registry;
pub use registry::Registry;

pub mod schema;
pub use schema::{Include, Relation, Root, SchemaNode, Select};

pub mod serializer;
pub use serializer::{Computed, Roles, Serializer};

pub use graft_core::{
    bail, err, Error, Find, FindResult, Page, Predicate, Query, Record, Result, Service,
    ServiceMap, Services, Value,
};
