//! Tree configuration
//!
//! Options controlling how element ids are generated when none is given.

use serde::{Deserialize, Serialize};

/// Id generation options for a [`FormTree`](crate::FormTree)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Base used when an element has an empty name
    pub auto_name: String,
    /// Prefix for ids whose first token is all digits
    pub numeric_prefix: String,
    /// Joins name tokens and the disambiguating index
    pub separator: String,
    /// Always append an index, even to the first id generated for a name
    pub force_append_index: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            auto_name: "qfauto".to_string(),
            numeric_prefix: "qf".to_string(),
            separator: "-".to_string(),
            force_append_index: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TreeConfig::default();
        assert_eq!(config.auto_name, "qfauto");
        assert_eq!(config.numeric_prefix, "qf");
        assert_eq!(config.separator, "-");
        assert!(!config.force_append_index);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TreeConfig =
            serde_json::from_str(r#"{ "force_append_index": true }"#).unwrap();
        assert!(config.force_append_index);
        assert_eq!(config.auto_name, "qfauto");
        assert_eq!(config.separator, "-");
    }

    #[test]
    fn test_config_json_shape() {
        let config = TreeConfig {
            separator: "_".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["separator"], "_");
        assert_eq!(value["numeric_prefix"], "qf");
    }
}
