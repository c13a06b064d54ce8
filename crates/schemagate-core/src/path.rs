//! Dotted-path lookup over JSON data
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Separator between path segments
pub const PATH_SEPARATOR: char = '.';

/// Resolve a dotted path such as `address.city` or `items.0.sku`.
///
/// Object segments are looked up by key, array segments by decimal index.
/// Anything that cannot be followed (missing key, out-of-range index,
/// scalar intermediate, absent root) resolves to `None`.
pub fn resolve<'a>(data: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    path.split(PATH_SEPARATOR)
        .try_fold(data?, |current, segment| step(current, segment))
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
