use crate::{Context, Location};

use graft_core::{Record, Value};

/// Removes what population and serialization added to the records at
/// `location`.
///
/// For each record, the computed keys recorded by
/// [`serialize`](crate::serialize) and the relation keys recorded by
/// [`populate`](crate::populate) are removed when present, and the
/// bookkeeping is cleared. The two are independent; either, both or neither
/// may apply to a record. A key that overwrote one of the caller's fields
/// gets the caller's value back, in its original position.
pub fn depopulate(cx: &mut Context, location: &Location) {
    let Some(payload) = location.payload_mut(cx) else {
        tracing::debug!(%location, "nothing to depopulate");
        return;
    };

    match location.records(payload) {
        Value::Record(record) => depopulate_record(record),
        Value::List(items) => {
            for record in items.iter_mut().filter_map(Value::as_record_mut) {
                depopulate_record(record);
            }
        }
        _ => {}
    }
}

fn depopulate_record(record: &mut Record) {
    let mut annotations = std::mem::take(record.annotations_mut());
    let mut undone = Vec::new();

    for key in annotations
        .take_computed()
        .into_iter()
        .chain(annotations.take_included())
    {
        if undone.contains(&key) {
            continue;
        }

        match annotations.take_replaced(&key) {
            Some(prev) => {
                record.insert(key.as_str(), prev);
            }
            None => {
                record.remove(&key);
            }
        }

        undone.push(key);
    }
}
