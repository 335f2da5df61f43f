//! Hook pipeline configuration.

use serde::{Deserialize, Serialize};

/// Which registered list the after phase of a trigger runs.
///
/// The lifecycle this pipeline models historically re-ran the `before`
/// list in the after phase, leaving `after` registrations unused by
/// triggers. `MirrorBefore` keeps that behavior for callers that depend
/// on it; `After` runs the hooks registered for the after phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterPhaseSource {
    /// Run the `after` list.
    #[default]
    After,
    /// Run the `before` list a second time.
    MirrorBefore,
}

/// Settings for registries, runners and triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookConfig {
    /// Action name that is routed to the entity's validation capability
    /// instead of the registry.
    #[serde(default = "default_validation_action")]
    pub validation_action: String,
    /// List the after phase runs for non-validation actions.
    #[serde(default)]
    pub after_phase: AfterPhaseSource,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            validation_action: default_validation_action(),
            after_phase: AfterPhaseSource::default(),
        }
    }
}

fn default_validation_action() -> String {
    "validate".to_string()
}
