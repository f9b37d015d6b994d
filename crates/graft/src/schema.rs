mod include;
pub use include::Include;

mod relation;
pub use relation::Relation;

mod select;
pub use select::Select;

/// The root of a population schema.
///
/// Either a plain relation map, or a wrapper that carries root-only metadata
/// (the `permissions` marker) next to the relation map in `include`.
/// In configuration the wrapper is recognised by having an `include` key and
/// no keys other than `include` and `permissions`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Root(Root),
    Relations(Include),
}

#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Root {
    /// Permission the caller must hold to run this population. Empty means
    /// no check.
    #[serde(default)]
    pub permissions: Option<String>,

    pub include: Include,
}

impl SchemaNode {
    /// Canonicalises the node into its permission marker and relation map.
    ///
    /// An empty marker is reported as no marker.
    pub fn resolve(&self) -> (Option<&str>, &Include) {
        match self {
            Self::Root(root) => (
                root.permissions.as_deref().filter(|marker| !marker.is_empty()),
                &root.include,
            ),
            Self::Relations(include) => (None, include),
        }
    }

    pub fn include(&self) -> &Include {
        self.resolve().1
    }

    pub fn include_mut(&mut self) -> &mut Include {
        match self {
            Self::Root(root) => &mut root.include,
            Self::Relations(include) => include,
        }
    }

    pub fn permissions(&self) -> Option<&str> {
        self.resolve().0
    }
}

impl From<Include> for SchemaNode {
    fn from(include: Include) -> Self {
        Self::Relations(include)
    }
}

impl From<Root> for SchemaNode {
    fn from(root: Root) -> Self {
        Self::Root(root)
    }
}

impl Root {
    pub fn new(include: Include) -> Self {
        Self {
            permissions: None,
            include,
        }
    }

    pub fn permissions(mut self, marker: impl Into<String>) -> Self {
        self.permissions = Some(marker.into());
        self
    }
}
