use serde::{Deserialize, Serialize};

use crate::models::{Facing, ScannerConfig};

/// Ideal capture width. 720p is plenty for symbol work.
pub const IDEAL_WIDTH: u32 = 1280;
/// Ideal capture height.
pub const IDEAL_HEIGHT: u32 = 720;
/// Resolution cap; anything above 1080p only costs decode time.
pub const MAX_WIDTH: u32 = 1920;
/// Resolution cap, height.
pub const MAX_HEIGHT: u32 = 1080;
/// Ideal frame rate.
pub const IDEAL_FRAME_RATE: u32 = 30;
/// Frame rate cap.
pub const MAX_FRAME_RATE: u32 = 60;

/// Video constraint set for stream acquisition.
///
/// All fields are *ideal* or *max* values, never exact requirements:
/// providers resolve with the closest mode the device supports, and a
/// device without the preferred facing still resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConstraints {
    /// Preferred camera facing (ideal).
    pub facing: Facing,
    /// Ideal capture width in pixels.
    pub ideal_width: u32,
    /// Ideal capture height in pixels.
    pub ideal_height: u32,
    /// Maximum acceptable width.
    pub max_width: u32,
    /// Maximum acceptable height.
    pub max_height: u32,
    /// Ideal frames per second.
    pub ideal_frame_rate: u32,
    /// Maximum acceptable frames per second.
    pub max_frame_rate: u32,
}

impl StreamConstraints {
    /// Constraint set for a scanner configuration: the config's facing with
    /// the default resolution and frame-rate envelope.
    pub fn for_config(config: &ScannerConfig) -> Self {
        Self {
            facing: config.facing,
            ..Self::default()
        }
    }
}

impl Default for StreamConstraints {
    fn default() -> Self {
        Self {
            facing: Facing::Environment,
            ideal_width: IDEAL_WIDTH,
            ideal_height: IDEAL_HEIGHT,
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
            ideal_frame_rate: IDEAL_FRAME_RATE,
            max_frame_rate: MAX_FRAME_RATE,
        }
    }
}
