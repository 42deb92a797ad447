// SPDX-License-Identifier: MIT OR Apache-2.0
//! Page settings.
//!
//! Settings are stored as RON and carry a format version. Every field has
//! a default, so a settings file only needs to name what it overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Current settings format version
pub const SETTINGS_FORMAT_VERSION: u32 = 1;

/// Conventional settings file name
pub const SETTINGS_FILE_NAME: &str = "vitrine.ron";

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing the settings file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings text is not valid RON for this schema
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Serializing settings failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),

    /// The file was written by a newer version
    #[error("Settings version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Highest version this build reads
        supported: u32,
    },

    /// A value is out of range
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Carousel timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Delay between automatic slide changes
    pub auto_advance_ms: u64,
    /// Progress-fill tick period
    pub progress_tick_ms: u64,
    /// How long the outgoing slide keeps its transition marker
    pub transition_ms: u64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance_ms: 9000,
            progress_tick_ms: 100,
            transition_ms: 600,
        }
    }
}

impl CarouselSettings {
    /// Auto-advance delay
    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }

    /// Progress tick period
    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }

    /// Transition window
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Media gating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Fraction of the media container that must be visible to play
    pub visibility_threshold: f64,
    /// Viewports at most this wide use tap-to-play
    pub mobile_breakpoint_px: u32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.6,
            mobile_breakpoint_px: 768,
        }
    }
}

/// Text reveal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Visible fraction that reveals an element when observed
    pub threshold: f64,
    /// Pixels above the viewport bottom an element's top must reach when polling
    pub fallback_offset_px: u32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            fallback_offset_px: 100,
        }
    }
}

/// Horizontal slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderSettings {
    /// Horizontal pixels scrolled per vertical wheel pixel
    pub wheel_multiplier: f64,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            wheel_multiplier: 1.0,
        }
    }
}

/// All page settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Format version
    pub version: u32,
    /// Carousel timing
    pub carousel: CarouselSettings,
    /// Media gating
    pub playback: PlaybackSettings,
    /// Text reveal
    pub reveal: RevealSettings,
    /// Horizontal slider
    pub slider: SliderSettings,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_FORMAT_VERSION,
            carousel: CarouselSettings::default(),
            playback: PlaybackSettings::default(),
            reveal: RevealSettings::default(),
            slider: SliderSettings::default(),
        }
    }
}

impl PageSettings {
    /// Parse and validate settings from RON text
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let settings: PageSettings = ron::from_str(text)?;

        if settings.version > SETTINGS_FORMAT_VERSION {
            return Err(SettingsError::UnsupportedVersion {
                found: settings.version,
                supported: SETTINGS_FORMAT_VERSION,
            });
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Render settings as pretty RON
    pub fn to_ron_string(&self) -> Result<String> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_ron_str(&content)?;
        tracing::info!("Loaded page settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_ron_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.carousel.progress_tick_ms == 0 {
            return Err(invalid("carousel.progress_tick_ms", "must be positive"));
        }
        if self.carousel.auto_advance_ms < self.carousel.progress_tick_ms {
            return Err(invalid(
                "carousel.auto_advance_ms",
                "must be at least one progress tick",
            ));
        }
        let threshold = self.playback.visibility_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(invalid("playback.visibility_threshold", "must be in (0, 1]"));
        }
        let reveal = self.reveal.threshold;
        if !(0.0..=1.0).contains(&reveal) {
            return Err(invalid("reveal.threshold", "must be in [0, 1]"));
        }
        if !self.slider.wheel_multiplier.is_finite() {
            return Err(invalid("slider.wheel_multiplier", "must be finite"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
