//! Merge rules: defaults fill gaps, loaded values win.

use std::collections::HashMap;

/// Insert every default pair whose key is absent from `target`. Existing
/// entries are never overwritten, even when their value differs from the
/// default; keys unknown to the defaults are left alone.
pub(super) fn fill_missing(
    target: &mut HashMap<String, String>,
    defaults: &HashMap<String, String>,
) {
    for (key, value) in defaults {
        if !target.contains_key(key) {
            target.insert(key.clone(), value.clone());
        }
    }
}
