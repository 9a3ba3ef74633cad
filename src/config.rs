//! Host-supplied configuration for the fading text widget.
//!
//! Hosts usually keep the fade-out time in their own settings store. Two
//! entry points are provided: [`FadeOutTime`] parses loose strings such as
//! `"1.5"`, `"2s"` or `"1500ms"`, and [`FadeConfig`] is serde-shaped so a
//! whole settings section can be deserialized and handed to
//! [`crate::fadetext::Model::from_config`].
//!
//! ```rust
//! use bubbletea_fadetext::config::FadeOutTime;
//! use std::time::Duration;
//!
//! let t: FadeOutTime = "1500ms".parse().unwrap();
//! assert_eq!(t.seconds(), 1.5);
//! assert_eq!(t.to_duration(), Some(Duration::from_millis(1500)));
//!
//! let off: FadeOutTime = "0".parse().unwrap();
//! assert!(off.to_duration().is_none());
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default foreground colour at full opacity.
pub const DEFAULT_FOREGROUND: &str = "#FAFAFA";
/// Default colour the foreground fades towards.
pub const DEFAULT_FADED: &str = "#1C1C1C";

/// Fade-out time in seconds. Zero means fading is disabled.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct FadeOutTime(f64);

impl FadeOutTime {
    /// Disabled fade-out.
    pub const DISABLED: FadeOutTime = FadeOutTime(0.0);

    /// Validates a number of seconds.
    pub fn from_seconds(seconds: f64) -> Result<Self, ConfigError> {
        if !seconds.is_finite() {
            return Err(ConfigError::NotFinite(seconds));
        }
        if seconds < 0.0 {
            return Err(ConfigError::Negative(seconds));
        }
        Ok(Self(seconds))
    }

    /// The value in seconds.
    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// Returns true if this value disables fading.
    pub fn is_disabled(&self) -> bool {
        self.0 <= 0.0
    }

    /// The value as a duration, or `None` when fading is disabled.
    /// Values beyond `Duration::MAX` saturate.
    pub fn to_duration(&self) -> Option<Duration> {
        seconds_to_lifetime(self.0)
    }
}

/// Converts seconds into a lifetime. Non-positive and non-finite values
/// disable fading; positive values are at least one nanosecond so they never
/// collapse into "disabled", and values too large for a `Duration` saturate.
pub(crate) fn seconds_to_lifetime(seconds: f64) -> Option<Duration> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }
    let lifetime = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);
    Some(lifetime.max(Duration::from_nanos(1)))
}

impl TryFrom<f64> for FadeOutTime {
    type Error = ConfigError;

    fn try_from(seconds: f64) -> Result<Self, Self::Error> {
        Self::from_seconds(seconds)
    }
}

impl From<FadeOutTime> for f64 {
    fn from(t: FadeOutTime) -> Self {
        t.0
    }
}

impl FromStr for FadeOutTime {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ConfigError::InvalidFadeOutTime {
            input: s.to_string(),
        };

        let (number, scale) = if let Some(ms) = trimmed.strip_suffix("ms") {
            (ms, 0.001)
        } else if let Some(secs) = trimmed.strip_suffix('s') {
            (secs, 1.0)
        } else {
            (trimmed, 1.0)
        };

        let number = number.trim_end();
        if number.is_empty() {
            return Err(invalid());
        }
        let value: f64 = number.parse().map_err(|_| invalid())?;
        Self::from_seconds(value * scale)
    }
}

impl fmt::Display for FadeOutTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Settings section for a fading text display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FadeConfig {
    /// Seconds from assignment until the text clears; zero disables fading.
    pub fade_out_time: FadeOutTime,
    /// Foreground colour at full opacity.
    pub foreground: String,
    /// Colour the foreground blends towards as it fades.
    pub faded: String,
    /// Column width the view is padded to; zero disables padding.
    pub width: usize,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            fade_out_time: FadeOutTime::DISABLED,
            foreground: DEFAULT_FOREGROUND.to_string(),
            faded: DEFAULT_FADED.to_string(),
            width: 0,
        }
    }
}

impl FadeConfig {
    /// Checks both colours are usable by the renderer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_color(&self.foreground)?;
        validate_color(&self.faded)?;
        Ok(())
    }
}

/// Accepts `#rrggbb` hex or an ANSI-256 index.
pub fn validate_color(color: &str) -> Result<(), ConfigError> {
    let ok = match color.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => color.parse::<u8>().is_ok(),
    };
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidColor(color.to_string()))
    }
}
