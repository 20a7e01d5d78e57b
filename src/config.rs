//! Configuration constants shared across the picker
//!
//! These values control the appearance and behavior of the eyedropper.
//! `PickerConfig` bundles them so a host (or the CLI `--config` flag) can
//! override individual values from JSON.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of screen pixels captured by the magnifier on each axis
/// Must be ODD to have a single center pixel for the reticle
pub const CAPTURE_SIZE: u32 = 19;

/// Magnification factor applied to every captured pixel
/// magnifier_size = CAPTURE_SIZE * MAGNIFICATION (19 * 8 = 152px)
pub const MAGNIFICATION: u32 = 8;

/// Tick period of the snapshot session (~60 Hz)
pub const SNAPSHOT_TICK_MS: u64 = 16;

/// Tick period of the live fallback session (~20 Hz)
/// Each tick costs a query against the display device
pub const LIVE_TICK_MS: u64 = 50;

/// Gap between the cursor and the magnified preview (in pixels)
pub const SNAPSHOT_MARGIN: i32 = 30;

/// Gap between the cursor and the fallback swatch (in pixels)
pub const LIVE_MARGIN: i32 = 20;

/// Size of the solid swatch shown by the fallback picker
pub const SWATCH_WIDTH: u32 = 100;
pub const SWATCH_HEIGHT: u32 = 50;

/// White frame drawn around the magnifier or the swatch
pub const BORDER: u32 = 3;

/// Height of the hex / RGB label below the preview
pub const LABEL_HEIGHT: u32 = 40;

/// Minimum preview width so "RGB(255, 255, 255)" fits on one line
pub const LABEL_MIN_WIDTH: u32 = 150;

/// Number of pixels to move when pressing Shift + Arrow key
/// Regular arrow key moves 1 pixel
pub const SHIFT_MOVE_PIXELS: i32 = 50;

/// Color reported when a live pixel query fails for one tick
pub const NEUTRAL_RGB: (u8, u8, u8) = (128, 128, 128);

/// Delay left to the host to hide its own window before the capture
pub const HOST_SETTLE_DELAY_MS: u64 = 100;

/// Largest PNG swatch edge accepted by the exporter
pub const MAX_SWATCH_EDGE: u32 = 5000;

// =============================================================================
// LIMITES DE CONFIGURATION
// CONFIGURATION LIMITS
// =============================================================================

/// Largest capture window (pixels per axis)
pub const MAX_CAPTURE_SIZE: u32 = 101;

/// Largest magnification factor
pub const MAX_MAGNIFICATION: u32 = 32;

/// Longest tick period (ms)
pub const MAX_TICK_MS: u64 = 1000;

/// Largest cursor/preview gap (pixels)
pub const MAX_MARGIN: i32 = 500;

/// Largest fallback swatch edge (pixels)
pub const MAX_PREVIEW_SWATCH: u32 = 1000;

/// Thickest preview frame (pixels)
pub const MAX_BORDER: u32 = 50;

/// Tallest preview label (pixels)
pub const MAX_LABEL_HEIGHT: u32 = 200;

// =============================================================================
// PICKER CONFIG
// =============================================================================

/// Paramètres de l'eyedropper, surchargeables depuis un fichier JSON
/// Eyedropper settings, overridable from a JSON file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub capture_size: u32,
    pub magnification: u32,
    pub snapshot_tick_ms: u64,
    pub live_tick_ms: u64,
    pub snapshot_margin: i32,
    pub live_margin: i32,
    pub swatch_width: u32,
    pub swatch_height: u32,
    pub border: u32,
    pub label_height: u32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            capture_size: CAPTURE_SIZE,
            magnification: MAGNIFICATION,
            snapshot_tick_ms: SNAPSHOT_TICK_MS,
            live_tick_ms: LIVE_TICK_MS,
            snapshot_margin: SNAPSHOT_MARGIN,
            live_margin: LIVE_MARGIN,
            swatch_width: SWATCH_WIDTH,
            swatch_height: SWATCH_HEIGHT,
            border: BORDER,
            label_height: LABEL_HEIGHT,
        }
    }
}

impl PickerConfig {
    /// Charge et valide une configuration JSON
    /// Loads and validates a JSON configuration
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PickerConfig = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the magnifier and the timers cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capture_size == 0 || self.capture_size % 2 == 0 {
            return Err(ConfigError::EvenCaptureSize(self.capture_size));
        }
        if self.magnification == 0 {
            return Err(ConfigError::ZeroFactor);
        }
        if self.snapshot_tick_ms == 0 || self.live_tick_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        let limits: [(&'static str, i64, i64, i64); 10] = [
            ("capture_size", self.capture_size.into(), 1, MAX_CAPTURE_SIZE.into()),
            ("magnification", self.magnification.into(), 1, MAX_MAGNIFICATION.into()),
            ("snapshot_tick_ms", saturating_i64(self.snapshot_tick_ms), 1, MAX_TICK_MS as i64),
            ("live_tick_ms", saturating_i64(self.live_tick_ms), 1, MAX_TICK_MS as i64),
            ("snapshot_margin", self.snapshot_margin.into(), 0, MAX_MARGIN.into()),
            ("live_margin", self.live_margin.into(), 0, MAX_MARGIN.into()),
            ("swatch_width", self.swatch_width.into(), 1, MAX_PREVIEW_SWATCH.into()),
            ("swatch_height", self.swatch_height.into(), 1, MAX_PREVIEW_SWATCH.into()),
            ("border", self.border.into(), 0, MAX_BORDER.into()),
            ("label_height", self.label_height.into(), 0, MAX_LABEL_HEIGHT.into()),
        ];
        for (field, value, min, max) in limits {
            if !(min..=max).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value, min, max });
            }
        }
        Ok(())
    }

    pub fn snapshot_tick(&self) -> Duration {
        Duration::from_millis(self.snapshot_tick_ms)
    }

    pub fn live_tick(&self) -> Duration {
        Duration::from_millis(self.live_tick_ms)
    }

    /// Edge of the magnified image: capture_size * magnification
    /// (saturates instead of overflowing on unvalidated values)
    pub fn magnified_edge(&self) -> u32 {
        self.capture_size.saturating_mul(self.magnification)
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = PickerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.magnified_edge(), 152);
        assert_eq!(config.snapshot_tick(), Duration::from_millis(16));
    }

    #[test]
    fn test_even_capture_size_rejected() {
        let config = PickerConfig { capture_size: 20, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::EvenCaptureSize(20))));
    }

    #[test]
    fn test_zero_factor_rejected() {
        let config = PickerConfig { magnification: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroFactor)));
    }

    #[test]
    fn test_huge_factor_rejected() {
        let config = PickerConfig { magnification: 300_000_000, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "magnification", value: 300_000_000, .. })
        ));
        // Never overflows, even before validation
        assert_eq!(config.magnified_edge(), u32::MAX);
    }

    #[test]
    fn test_limits_are_inclusive() {
        let config = PickerConfig {
            capture_size: MAX_CAPTURE_SIZE,
            magnification: MAX_MAGNIFICATION,
            snapshot_tick_ms: MAX_TICK_MS,
            live_margin: 0,
            border: MAX_BORDER,
            label_height: MAX_LABEL_HEIGHT,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let wide = PickerConfig { capture_size: MAX_CAPTURE_SIZE + 2, ..Default::default() };
        assert!(matches!(
            wide.validate(),
            Err(ConfigError::OutOfRange { field: "capture_size", .. })
        ));
        let negative = PickerConfig { snapshot_margin: -1, ..Default::default() };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::OutOfRange { field: "snapshot_margin", value: -1, .. })
        ));
        let slow = PickerConfig { live_tick_ms: u64::MAX, ..Default::default() };
        assert!(matches!(
            slow.validate(),
            Err(ConfigError::OutOfRange { field: "live_tick_ms", value: i64::MAX, .. })
        ));
    }

    #[test]
    fn test_oversized_json_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "swatch_height": 4000000000 }}"#).unwrap();
        assert!(matches!(
            PickerConfig::from_json_file(file.path()),
            Err(ConfigError::OutOfRange { field: "swatch_height", .. })
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "capture_size": 11, "live_tick_ms": 40 }}"#).unwrap();

        let config = PickerConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.capture_size, 11);
        assert_eq!(config.live_tick_ms, 40);
        assert_eq!(config.magnification, MAGNIFICATION);
    }

    #[test]
    fn test_invalid_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            PickerConfig::from_json_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
