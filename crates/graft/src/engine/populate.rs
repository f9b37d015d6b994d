use super::{normalize, permission, query};
use crate::{path, Context, Include, Location, Relation, SchemaNode};

use async_recursion::async_recursion;
use graft_core::{Error, Find, Query, Record, Result, Value};

/// Populates the records at `location` with their related records.
///
/// Uses `schema` when given, otherwise the schema attached to the request by
/// [`select_schemas`](crate::select_schemas). Records are mutated in place:
/// each gains one key per relation, holding the related record, or a list of
/// them, and remembers which keys were added so that
/// [`depopulate`](crate::depopulate) can remove exactly those.
///
/// Work is strictly sequential. Each record of a list is populated, nested
/// relations included, before the next one starts, and relations are
/// fetched in schema order. The first error aborts the whole population;
/// records and relations populated before it stay populated.
///
/// While the population runs, the payload at `location` is detached from
/// `cx`; a [`Select`](crate::Select) sees the rest of the context.
pub async fn populate(
    cx: &mut Context,
    schema: Option<&SchemaNode>,
    location: &Location,
) -> Result<()> {
    let mut payload = location.take(cx);

    let res = Populate { cx: &*cx }
        .run(schema, payload.as_mut(), location)
        .await;

    location.restore(cx, payload);
    res
}

struct Populate<'a> {
    cx: &'a Context,
}

impl<'a> Populate<'a> {
    async fn run(
        &self,
        schema: Option<&SchemaNode>,
        payload: Option<&mut Value>,
        location: &Location,
    ) -> Result<()> {
        let Some(schema) = schema.or(self.cx.params.populate_defn.as_ref()) else {
            return Err(Error::schema_missing());
        };

        let (marker, include) = schema.resolve();
        permission::check(marker, self.cx)?;

        let Some(payload) = payload else {
            tracing::debug!(%location, "nothing to populate");
            return Ok(());
        };

        let records = location.records(payload);
        tracing::debug!(
            %location,
            count = records.as_list().map_or(1, <[graft_core::Value]>::len),
            "populate"
        );

        self.populate_value(records, include, 0).await
    }

    /// Populates a record, or each record of a list in order. Other values
    /// have nothing to populate.
    #[async_recursion]
    async fn populate_value(
        &self,
        value: &mut Value,
        include: &Include,
        depth: usize,
    ) -> Result<()> {
        match value {
            Value::Record(record) => self.populate_record(record, include, depth).await,
            Value::List(items) => {
                for (i, item) in items.iter_mut().enumerate() {
                    tracing::trace!(depth, index = i, "populate list element");

                    match item {
                        Value::Record(record) => {
                            self.populate_record(record, include, depth).await?
                        }
                        _ => tracing::trace!(depth, index = i, "skipping non-record element"),
                    }
                }
                Ok(())
            }
            _ => {
                tracing::trace!(depth, "skipping non-record value");
                Ok(())
            }
        }
    }

    async fn populate_record(
        &self,
        record: &mut Record,
        include: &Include,
        depth: usize,
    ) -> Result<()> {
        // Written before fetching so that a failed population still records
        // every key it meant to attach.
        let mut keys = include.keys().map(str::to_string).collect::<Vec<_>>();
        tracing::trace!(depth, ?keys, "save relation keys for depopulate");

        let attached = record.annotations_mut().take_included();

        for key in &keys {
            if attached.contains(key) {
                continue;
            }

            if let Some(value) = record.get(key).cloned() {
                tracing::trace!(depth, key, "save caller value overwritten by relation");
                record.annotations_mut().push_replaced(key.clone(), value);
            }
        }

        // Keys attached by an earlier population stay undoable.
        for key in attached {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        record.annotations_mut().set_included(keys);

        for (name, relation) in include.iter() {
            self.populate_relation(record, name, relation, depth).await?;
        }

        Ok(())
    }

    async fn populate_relation(
        &self,
        record: &mut Record,
        name: &str,
        relation: &Relation,
        depth: usize,
    ) -> Result<()> {
        let parent_value = path::get(record, &relation.parent_field)
            .cloned()
            .unwrap_or_default();

        let dynamic = match &relation.select {
            Some(select) => {
                tracing::trace!(depth, relation = name, "evaluate select");
                select.select(self.cx, record).await?
            }
            None => Query::new(),
        };

        let query = query::build(relation, &parent_value, dynamic);
        let service = self.cx.service(&relation.service)?;

        tracing::debug!(
            depth,
            relation = name,
            service = %relation.service,
            ?query,
            "find"
        );

        let result = service.find(Find::new(query)).await?;
        tracing::trace!(depth, relation = name, found = result.len(), "results found");

        let key = relation.key(name);
        record.insert(key, normalize::apply(result, relation.as_array));

        if let Some(nested) = relation.nested() {
            if let Some(attached) = record.get_mut(key) {
                self.populate_value(attached, nested, depth + 1).await?;
            }
        }

        Ok(())
    }
}
