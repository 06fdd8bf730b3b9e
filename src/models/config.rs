use serde::{Deserialize, Serialize};

/// Preferred camera facing.
///
/// Applied as an *ideal* constraint, never exact: a device without the
/// preferred camera still resolves with whatever it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Rear-facing camera, the usual choice for scanning goods.
    #[default]
    Environment,
    /// Front-facing camera.
    User,
}

/// Visual theme hint for hosts that render scanner chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light chrome.
    #[default]
    Light,
    /// Dark chrome.
    Dark,
}

/// Scanner configuration. Every field has a default, so hosts can
/// deserialize a partial settings object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Preferred camera facing.
    pub facing: Facing,
    /// Whether the torch toggle is offered at all. Even when `true` the
    /// toggle only works if the active track reports torch support.
    pub torch_toggle: bool,
    /// Whether hosts should start capture immediately on mount instead of
    /// waiting for an explicit start action.
    pub auto_start: bool,
    /// Visual theme hint.
    pub theme: Theme,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            facing: Facing::Environment,
            torch_toggle: true,
            auto_start: true,
            theme: Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScannerConfig::default();
        assert_eq!(config.facing, Facing::Environment);
        assert!(config.torch_toggle);
        assert!(config.auto_start);
        assert_eq!(config.theme, Theme::Light);
    }
}
