//! Error type for host-supplied configuration.

use thiserror::Error;

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The fade-out time could not be parsed as a number of seconds.
    #[error("invalid fade-out time {input:?}: expected seconds such as \"1.5\", \"2s\" or \"1500ms\"")]
    InvalidFadeOutTime {
        /// The rejected input.
        input: String,
    },

    /// The fade-out time parsed but is negative.
    #[error("fade-out time must not be negative, got {0}")]
    Negative(f64),

    /// The fade-out time is NaN or infinite.
    #[error("fade-out time must be finite, got {0}")]
    NotFinite(f64),

    /// A colour is neither `#rrggbb` hex nor an ANSI-256 index.
    #[error("invalid colour {0:?}: expected \"#rrggbb\" or an ANSI index 0-255")]
    InvalidColor(String),
}
