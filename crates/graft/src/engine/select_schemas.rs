use crate::{Context, Registry};

/// Resolves the population schema and serializers a request names.
///
/// Attaches `registry.population(params.populate)` as
/// `params.populate_defn` and `registry.serializer(params.serialize)` as
/// `params.serializer_by_roles_defn`. An unknown name resolves to `None`;
/// [`populate`](crate::populate) reports the missing schema when it runs.
pub fn select_schemas(registry: &Registry, cx: &mut Context) {
    if let Some(name) = &cx.params.populate {
        cx.params.populate_defn = registry.population(name).cloned();
        tracing::trace!(
            name,
            found = cx.params.populate_defn.is_some(),
            "resolved population schema"
        );
    }

    if let Some(name) = &cx.params.serialize {
        cx.params.serializer_by_roles_defn = registry.serializer(name).cloned();
        tracing::trace!(
            name,
            found = cx.params.serializer_by_roles_defn.is_some(),
            "resolved serializers"
        );
    }
}
