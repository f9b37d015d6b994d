use crate::{Roles, SchemaNode};

use graft_core::{Error, Result, Service, Services, Value};
use indexmap::IndexMap;
use std::sync::Arc;

/// The request a population runs within.
///
/// Carries the payloads population can target (the incoming `data`, the
/// outgoing `result` and named parameters), the caller's grants, the schema
/// names the caller asked for, and the application's services.
#[derive(Debug)]
pub struct Context {
    /// Services relations are fetched from
    pub app: Arc<dyn Services>,

    pub params: Params,

    /// Payload sent to the data-access layer
    pub data: Option<Value>,

    /// Payload returned by the data-access layer. May be a paged envelope.
    pub result: Option<Value>,
}

#[derive(Debug, Default, Clone)]
pub struct Params {
    /// Name of the population schema requested by the caller
    pub populate: Option<String>,

    /// Name of the serializer requested by the caller
    pub serialize: Option<String>,

    pub permissions: Permissions,

    /// Named payloads, addressable with [`Location::Param`](crate::Location::Param)
    pub named: IndexMap<String, Value>,

    /// Population schema resolved from `populate` by [`select_schemas`](crate::select_schemas)
    pub populate_defn: Option<SchemaNode>,

    /// Serializers by role resolved from `serialize` by [`select_schemas`](crate::select_schemas)
    pub serializer_by_roles_defn: Option<Roles>,
}

/// What the caller has been granted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Permissions {
    /// Population token compared against a schema's `permissions` marker
    pub serialize: Option<String>,

    /// Role used to pick a serializer
    pub role: Option<String>,
}

impl Context {
    pub fn new(app: Arc<dyn Services>) -> Self {
        Self {
            app,
            params: Params::default(),
            data: None,
            result: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_result(mut self, result: impl Into<Value>) -> Self {
        self.result = Some(result.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.named.insert(name.into(), value.into());
        self
    }

    pub fn with_populate(mut self, name: impl Into<String>) -> Self {
        self.params.populate = Some(name.into());
        self
    }

    pub fn with_serialize(mut self, name: impl Into<String>) -> Self {
        self.params.serialize = Some(name.into());
        self
    }

    pub fn with_permission(mut self, token: impl Into<String>) -> Self {
        self.params.permissions.serialize = Some(token.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.params.permissions.role = Some(role.into());
        self
    }

    /// Looks up a service by identifier.
    pub fn service(&self, id: &str) -> Result<&dyn Service> {
        self.app
            .service(id)
            .ok_or_else(|| Error::service_not_found(id))
    }
}
