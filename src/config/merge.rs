// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered document merging.
//!
//! ```text
//! base:    { dependencies: { hdf5: { version: 1.14 } }, cc: gcc }
//! overlay: { dependencies: { hdf5: { configure_options: [..] } }, cc: cc }
//!                          |
//!                          v
//! merged:  { dependencies: { hdf5: { version: 1.14, configure_options: [..] } }, cc: cc }
//! ```
//!
//! Mappings present on both sides merge key by key. Anything else (scalars,
//! sequences, a mapping meeting a scalar) is replaced by the overlay value.

use serde_yaml::Value;

/// Deep-merges `overlay` onto `base`, returning a new value.
///
/// Neither input is modified. Key order follows `base`, with keys that only
/// exist in `overlay` appended in overlay order.
#[must_use]
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, overlay_value) in overlay_map {
                let value = match merged.get(key) {
                    Some(existing @ Value::Mapping(_)) if overlay_value.is_mapping() => {
                        deep_merge(existing, overlay_value)
                    }
                    _ => overlay_value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            Value::Mapping(merged)
        }
        _ => overlay.clone(),
    }
}
