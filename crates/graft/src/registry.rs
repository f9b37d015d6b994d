use crate::{Roles, SchemaNode};

use graft_core::Result;
use indexmap::IndexMap;

/// Named population schemas and serializers.
///
/// Requests refer to entries by name (`Params::populate`,
/// `Params::serialize`); [`select_schemas`](crate::select_schemas) resolves
/// them onto the request. Build one in code with [`Registry::builder`] or
/// load it from JSON:
///
/// ```json
/// {
///   "populations": {
///     "post-with-author": {
///       "permissions": "author:read",
///       "include": {
///         "author": { "service": "users", "parentField": "userId", "childField": "id" }
///       }
///     }
///   },
///   "serializers": {
///     "public": { "default": { "exclude": ["password"] } }
///   }
/// }
/// ```
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registry {
    #[serde(default)]
    populations: IndexMap<String, SchemaNode>,

    #[serde(default)]
    serializers: IndexMap<String, Roles>,
}

#[derive(Debug, Default)]
pub struct Builder {
    registry: Registry,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn from_json(src: &str) -> Result<Registry> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Registry> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn population(&self, name: &str) -> Option<&SchemaNode> {
        self.populations.get(name)
    }

    /// Mutable access, e.g. to attach a `select` to a relation loaded from
    /// configuration.
    pub fn population_mut(&mut self, name: &str) -> Option<&mut SchemaNode> {
        self.populations.get_mut(name)
    }

    pub fn serializer(&self, name: &str) -> Option<&Roles> {
        self.serializers.get(name)
    }

    pub fn serializer_mut(&mut self, name: &str) -> Option<&mut Roles> {
        self.serializers.get_mut(name)
    }

    pub fn population_names(&self) -> impl Iterator<Item = &str> {
        self.populations.keys().map(String::as_str)
    }
}

impl Builder {
    pub fn population(&mut self, name: impl Into<String>, node: impl Into<SchemaNode>) -> &mut Self {
        self.registry.populations.insert(name.into(), node.into());
        self
    }

    pub fn serializer(&mut self, name: impl Into<String>, roles: Roles) -> &mut Self {
        self.registry.serializers.insert(name.into(), roles);
        self
    }

    pub fn build(&mut self) -> Registry {
        std::mem::take(&mut self.registry)
    }
}
