//! Countdown and opacity state machine behind the fading text widget.
//!
//! [`FadeController`] is framework-free: the host calls
//! [`FadeController::on_text_assigned`] whenever its text changes and
//! [`FadeController::on_tick`] once per [`TICK_INTERVAL`] while a cycle is
//! running. The controller never owns a timer itself; it only tells the host
//! when to arm one and when to clear the displayed text.
//!
//! ```rust
//! use bubbletea_fadetext::fade::{FadeController, TickOutcome};
//! use std::time::Duration;
//!
//! let mut fade = FadeController::new(Some(Duration::from_millis(1500)));
//! assert!(fade.on_text_assigned("Saved."));
//!
//! let mut ticks = 1;
//! while fade.on_tick() != TickOutcome::Expired {
//!     ticks += 1;
//! }
//! assert_eq!(ticks, 15);
//! assert!(!fade.is_counting());
//! ```

use std::time::Duration;
use tracing::{debug, trace};

/// Granularity of the countdown.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Trailing span of the countdown during which the foreground fades out.
pub const FADE_WINDOW: Duration = Duration::from_millis(1500);

/// Opacity removed on every tick inside the fade window.
pub const FADE_STEP: f64 = 0.1 / 1.5;

/// Whether a fade cycle is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// No cycle is running; ticks are ignored.
    #[default]
    Idle,
    /// A cycle is counting down towards clearing the text.
    Counting,
}

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The controller was idle; the tick changed nothing and no further
    /// ticks are wanted.
    Idle,
    /// Countdown advanced outside the fade window; opacity is still 1.
    Held,
    /// Countdown advanced inside the fade window; carries the new opacity.
    Faded(f64),
    /// Countdown reached zero: clear the displayed text and stop ticking.
    Expired,
}

impl TickOutcome {
    /// Returns true if the host should schedule another tick.
    pub fn wants_tick(&self) -> bool {
        matches!(self, TickOutcome::Held | TickOutcome::Faded(_))
    }
}

/// Applies the lifetime floor: `None` and zero disable fading, anything else
/// is raised to at least [`FADE_WINDOW`].
pub fn effective_lifetime(requested: Option<Duration>) -> Option<Duration> {
    match requested {
        Some(d) if !d.is_zero() => Some(d.max(FADE_WINDOW)),
        _ => None,
    }
}

/// Drives the countdown and opacity of one displayed text.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeController {
    total_lifetime: Option<Duration>,
    remaining: Duration,
    opacity: f64,
    state: DisplayState,
}

impl Default for FadeController {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FadeController {
    /// Creates an idle controller. `None` or a zero lifetime leaves fading
    /// disabled.
    pub fn new(total_lifetime: Option<Duration>) -> Self {
        Self {
            total_lifetime: effective_lifetime(total_lifetime),
            remaining: Duration::ZERO,
            opacity: 1.0,
            state: DisplayState::Idle,
        }
    }

    /// Sets the total lifetime used by the next cycle.
    ///
    /// A running cycle keeps its current countdown. Disabling fading while
    /// counting cancels the cycle, since ticks must not decay or expire a
    /// text once fading is off.
    pub fn set_total_lifetime(&mut self, total_lifetime: Option<Duration>) {
        self.total_lifetime = effective_lifetime(total_lifetime);
        if self.total_lifetime.is_none() && self.is_counting() {
            self.cancel();
        }
    }

    /// Effective lifetime after the floor rule, or `None` when disabled.
    pub fn total_lifetime(&self) -> Option<Duration> {
        self.total_lifetime
    }

    /// Returns true if assigning text will start a fade cycle.
    pub fn is_enabled(&self) -> bool {
        self.total_lifetime.is_some()
    }

    /// Current foreground opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Time left before the text is cleared. Zero while idle.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Current state.
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Returns true while a cycle is running.
    pub fn is_counting(&self) -> bool {
        self.state == DisplayState::Counting
    }

    /// Reacts to the host assigning `text`.
    ///
    /// Blank text is passive: nothing changes and `false` is returned. This
    /// covers the controller's own clearing, which must not start a new
    /// cycle. Non-blank text restarts unconditionally and returns `true`; the
    /// host must retire any tick stream it already has before arming a new
    /// one.
    pub fn on_text_assigned(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let Some(lifetime) = self.total_lifetime else {
            return false;
        };

        if self.is_counting() {
            debug!(remaining = ?self.remaining, "restarting fade cycle");
        } else {
            debug!(?lifetime, "starting fade cycle");
        }

        self.opacity = 1.0;
        self.remaining = lifetime;
        self.state = DisplayState::Counting;
        true
    }

    /// Advances the countdown by one [`TICK_INTERVAL`].
    pub fn on_tick(&mut self) -> TickOutcome {
        if !self.is_counting() || !self.is_enabled() {
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(TICK_INTERVAL);

        if self.remaining.is_zero() {
            debug!("fade cycle expired");
            self.opacity = 0.0;
            self.state = DisplayState::Idle;
            return TickOutcome::Expired;
        }

        if self.remaining <= FADE_WINDOW {
            self.opacity = (self.opacity - FADE_STEP).clamp(0.0, 1.0);
            trace!(remaining = ?self.remaining, opacity = self.opacity, "fade tick");
            return TickOutcome::Faded(self.opacity);
        }

        trace!(remaining = ?self.remaining, "hold tick");
        TickOutcome::Held
    }

    /// Drops the running cycle, if any, and restores full opacity.
    pub fn cancel(&mut self) {
        if self.is_counting() {
            debug!(remaining = ?self.remaining, "fade cycle cancelled");
        }
        self.state = DisplayState::Idle;
        self.remaining = Duration::ZERO;
        self.opacity = 1.0;
    }
}
