//! The fetch collaborator: services that can find records by query, and the
//! application-level lookup from service identifier to service.

use crate::{async_trait, Find, FindResult};

use indexmap::IndexMap;
use std::{fmt::Debug, sync::Arc};

#[async_trait]
pub trait Service: Debug + Send + Sync + 'static {
    /// Find the records matching `params.query`.
    ///
    /// The query may contain set (`In`) and range predicates as well as
    /// equality. Implementations own timeouts and retries.
    async fn find(&self, params: Find) -> crate::Result<FindResult>;
}

/// Looks up services by identifier.
pub trait Services: Debug + Send + Sync + 'static {
    fn service(&self, id: &str) -> Option<&dyn Service>;
}

/// A [`Services`] backed by a map of shared services.
#[derive(Debug, Default, Clone)]
pub struct ServiceMap {
    services: IndexMap<String, Arc<dyn Service>>,
}

impl ServiceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, service: impl Service) -> &mut Self {
        self.services.insert(id.into(), Arc::new(service));
        self
    }

    pub fn register_shared(&mut self, id: impl Into<String>, service: Arc<dyn Service>) -> &mut Self {
        self.services.insert(id.into(), service);
        self
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }
}

impl Services for ServiceMap {
    fn service(&self, id: &str) -> Option<&dyn Service> {
        self.services.get(id).map(|service| &**service)
    }
}
