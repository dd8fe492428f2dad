use crate::config::ConfigMap;
use crate::error::ConfigError;

/// Merge `overlay` into `base`, RFC 7396 style: mappings merge recursively,
/// while scalar and sequence leaves in the overlay replace the base value.
pub fn merge(base: &ConfigMap, overlay: &ConfigMap) -> Result<ConfigMap, ConfigError> {
    let mut merged = base.to_json();
    json_patch::merge(&mut merged, &overlay.to_json());
    ConfigMap::from_json(&merged)
}
