use crate::Context;

use async_trait::async_trait;
use graft_core::{Query, Record, Result};
use std::future::Future;

/// Computes per-record query constraints for a relation.
///
/// The returned query is merged over the relation's static query, so a
/// select can narrow or override it for each parent record. Implemented for
/// closures returning a future:
///
/// ```
/// # use graft::{Query, Relation};
/// let relation = Relation::new("comments", "id", "postId").select(|_cx: &_, post: &graft::Record| {
///     let archived = post.get("archived").cloned();
///     async move { Ok(Query::eq("archived", archived)) }
/// });
/// ```
#[async_trait]
pub trait Select: Send + Sync + 'static {
    async fn select(&self, cx: &Context, parent: &Record) -> Result<Query>;
}

#[async_trait]
impl<F, Fut> Select for F
where
    F: Fn(&Context, &Record) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Query>> + Send,
{
    async fn select(&self, cx: &Context, parent: &Record) -> Result<Query> {
        self(cx, parent).await
    }
}
