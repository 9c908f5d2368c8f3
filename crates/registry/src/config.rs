//! Configuration for the model registry.

use serde::{Deserialize, Serialize};

/// How the registry fills in facts a model did not report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Use edge label 0 as action label when none was reported.
    pub default_action_label: bool,

    /// Take the action count from the row count of `noAccord` or
    /// `actionRead` when no positive count was reported.
    pub infer_action_count: bool,

    /// Largest slot, label or action count a call may declare.
    pub max_count: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_action_label: true,
            infer_action_count: true,
            max_count: 1 << 24,
        }
    }
}

impl RegistryConfig {
    /// Enable or disable the action label default.
    pub fn with_default_action_label(mut self, enabled: bool) -> Self {
        self.default_action_label = enabled;
        self
    }

    /// Enable or disable action count inference.
    pub fn with_infer_action_count(mut self, enabled: bool) -> Self {
        self.infer_action_count = enabled;
        self
    }

    /// Set the largest count a call may declare.
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }
}
