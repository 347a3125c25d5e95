//! Configuration for the normalizer

use serde::Deserialize;

/// Configuration options for normalization
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Re-parent siblings that sit inside an earlier rectangle or vector
    pub regroup_backgrounds: bool,

    /// Replace a group holding a single child by that child
    pub unwrap_single_child_groups: bool,

    /// Export containers made only of shapes as one image leaf
    pub export_vector_only_containers: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            regroup_backgrounds: true,
            unwrap_single_child_groups: true,
            export_vector_only_containers: true,
        }
    }
}

impl NormalizeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable containment regrouping
    pub fn with_regroup_backgrounds(mut self, enabled: bool) -> Self {
        self.regroup_backgrounds = enabled;
        self
    }

    /// Enable or disable single-child group unwrapping
    pub fn with_unwrap_single_child_groups(mut self, enabled: bool) -> Self {
        self.unwrap_single_child_groups = enabled;
        self
    }

    /// Enable or disable image export of shape-only containers
    pub fn with_export_vector_only_containers(mut self, enabled: bool) -> Self {
        self.export_vector_only_containers = enabled;
        self
    }
}
