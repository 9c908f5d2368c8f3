//! Configuration for the registration driver.

use pins_types::ACTION_TYPE_NAME;
use serde::{Deserialize, Serialize};

/// Which edge label becomes the action label when several qualify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionLabelPolicy {
    /// The first qualifying edge label in index order.
    #[default]
    FirstMatch,
    /// The last qualifying edge label in index order.
    LastMatch,
}

/// Configuration for a registration pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Type name marking the edge label that carries the action identity.
    pub action_type_name: String,

    /// Tie-break when several edge labels have that type.
    pub action_label_policy: ActionLabelPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            action_type_name: ACTION_TYPE_NAME.to_string(),
            action_label_policy: ActionLabelPolicy::FirstMatch,
        }
    }
}

impl LoaderConfig {
    /// Use a different type name to detect the action label.
    pub fn with_action_type_name(mut self, name: impl Into<String>) -> Self {
        self.action_type_name = name.into();
        self
    }

    /// Set the action label tie-break.
    pub fn with_action_label_policy(mut self, policy: ActionLabelPolicy) -> Self {
        self.action_label_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LoaderConfig =
            serde_json::from_str(r#"{ "action_label_policy": "last_match" }"#).unwrap();
        assert_eq!(config.action_type_name, "statement");
        assert_eq!(config.action_label_policy, ActionLabelPolicy::LastMatch);
    }
}
