use crate::Relation;

use graft_core::{Predicate, Query, Value};

/// Builds the query for one relation of one parent record.
///
/// Starts from a copy of the relation's static query, constrains
/// `child_field` to the parent value (any member of it, when the parent value
/// is a list) and overlays the per-record `dynamic` constraints, which win on
/// a shared field.
pub(crate) fn build(relation: &Relation, parent_value: &Value, dynamic: Query) -> Query {
    let mut query = relation.query.clone();

    let predicate = match parent_value {
        Value::List(values) => Predicate::In(values.clone()),
        value => Predicate::Eq(value.clone()),
    };
    query.insert(relation.child_field.clone(), predicate);

    query.merge(dynamic);
    query
}
