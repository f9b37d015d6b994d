//! Dotted field paths into records, e.g. `"author.companyId"`.

use graft_core::{Record, Value};

/// Reads the value at a dotted `path` in `record`.
///
/// Each segment but the last must name a nested record. Returns `None` when
/// a segment is missing, empty, or crosses a non-record value (lists
/// included).
pub fn get<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');

    let first = segments.next().filter(|segment| !segment.is_empty())?;
    let mut value = record.get(first)?;

    for segment in segments {
        if segment.is_empty() {
            return None;
        }
        value = value.as_record()?.get(segment)?;
    }

    Some(value)
}
