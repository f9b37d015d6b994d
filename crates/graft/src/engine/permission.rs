use crate::Context;

use graft_core::{Error, Result};

/// Checks the root permission marker against the caller's granted token.
///
/// No marker means the population is open. A marker requires an exact match
/// with `params.permissions.serialize`.
pub(crate) fn check(marker: Option<&str>, cx: &Context) -> Result<()> {
    let Some(required) = marker.filter(|marker| !marker.is_empty()) else {
        return Ok(());
    };

    match cx.params.permissions.serialize.as_deref() {
        Some(granted) if granted == required => {
            tracing::debug!(required, "permissions verified for this population");
            Ok(())
        }
        granted => {
            tracing::debug!(required, ?granted, "population not permitted");
            Err(Error::permission_denied())
        }
    }
}
