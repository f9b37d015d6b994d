use super::Relation;

use indexmap::IndexMap;

/// An ordered map from relation name to [`Relation`].
///
/// Relations are populated in the order they were added.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(transparent)]
pub struct Include {
    relations: IndexMap<String, Relation>,
}

impl Include {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Include::insert`].
    pub fn relation(mut self, name: impl Into<String>, relation: Relation) -> Self {
        self.insert(name, relation);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, relation: Relation) -> Option<Relation> {
        self.relations.insert(name.into(), relation)
    }

    pub fn get(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Relation> {
        self.relations.get_mut(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.relations.keys().map(String::as_str)
    }

    /// The keys relations attach under, in population order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.relations
            .iter()
            .map(|(name, relation)| relation.key(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Relation)> {
        self.relations
            .iter()
            .map(|(name, relation)| (name.as_str(), relation))
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}
