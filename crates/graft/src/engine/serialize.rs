use crate::{Context, Location, Serializer};

use graft_core::Value;

const DEFAULT_ROLE: &str = "default";

/// Applies the serializer for the caller's role to the records at
/// `location`.
///
/// The serializer is picked from `params.serializer_by_roles_defn` by
/// `params.permissions.role`, falling back to the `"default"` role. With no
/// matching serializer the records are left as they are.
pub fn serialize(cx: &mut Context, location: &Location) {
    let mut payload = location.take(cx);

    if let Some(payload) = payload.as_mut() {
        Serialize { cx: &*cx }.run(payload, location);
    }

    location.restore(cx, payload);
}

struct Serialize<'a> {
    cx: &'a Context,
}

impl Serialize<'_> {
    fn run(&self, payload: &mut Value, location: &Location) {
        let Some(serializer) = self.serializer() else {
            tracing::debug!(%location, "no serializer for role");
            return;
        };

        match location.records(payload) {
            Value::Record(record) => serializer.apply(record, self.cx),
            Value::List(items) => {
                for record in items.iter_mut().filter_map(Value::as_record_mut) {
                    serializer.apply(record, self.cx);
                }
            }
            _ => {}
        }
    }

    fn serializer(&self) -> Option<&Serializer> {
        let roles = self.cx.params.serializer_by_roles_defn.as_ref()?;
        let role = self.cx.params.permissions.role.as_deref();

        role.and_then(|role| roles.get(role))
            .or_else(|| roles.get(DEFAULT_ROLE))
    }
}
