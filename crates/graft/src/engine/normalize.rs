use graft_core::{FindResult, Value};

/// Shapes a find result for attaching to a parent record.
///
/// A page is unwrapped to its data. A single match collapses to the record
/// itself unless `as_array` is set; any other count, zero included, stays a
/// list.
pub(crate) fn apply(result: FindResult, as_array: bool) -> Value {
    let mut items = result.into_data();

    if !as_array && items.len() == 1 {
        if let Some(item) = items.pop() {
            return item;
        }
    }

    Value::List(items)
}
