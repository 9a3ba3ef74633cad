//! State-changing methods and the update loop for the fading text.

use super::model::Model;
use super::types::{ClearedMsg, TickMsg};
use crate::config::seconds_to_lifetime;
use crate::fade::{DisplayState, TickOutcome, TICK_INTERVAL};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::time::Duration;
use tracing::trace;

impl Model {
    /// Returns the fading text's unique identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The text currently displayed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current foreground opacity in `[0, 1]`.
    pub fn foreground_opacity(&self) -> f64 {
        self.controller.opacity()
    }

    /// Returns true while a countdown is running.
    pub fn is_fading(&self) -> bool {
        self.controller.state() == DisplayState::Counting
    }

    /// Time left before the text clears. Zero while idle.
    pub fn remaining(&self) -> Duration {
        self.controller.remaining()
    }

    /// Effective fade-out time in seconds; zero when fading is disabled.
    pub fn fade_out_time(&self) -> f64 {
        self.controller
            .total_lifetime()
            .map_or(0.0, |d| d.as_secs_f64())
    }

    /// Sets the fade-out time in seconds.
    ///
    /// Values below the fade window are raised to it. Zero, negative and
    /// non-finite values disable fading, which also stops a running
    /// countdown and leaves the current text on screen.
    pub fn set_fade_out_time(&mut self, seconds: f64) {
        let was_fading = self.is_fading();
        self.controller
            .set_total_lifetime(seconds_to_lifetime(seconds));
        if was_fading && !self.is_fading() {
            self.tag += 1;
        }
    }

    /// Replaces the displayed text.
    ///
    /// Non-blank text (re)starts the countdown at full opacity and returns
    /// the command for its first tick. Blank text is stored as-is and leaves
    /// any running countdown untouched.
    ///
    /// ```rust
    /// use bubbletea_fadetext::fadetext::Model;
    ///
    /// let mut status = Model::new().with_fade_out_time(2.0);
    /// assert!(status.set_text("Saved.").is_some());
    /// assert!(status.set_text("").is_none());
    /// assert!(status.is_fading());
    /// ```
    pub fn set_text(&mut self, text: impl Into<String>) -> Option<Cmd> {
        self.text = text.into();
        if !self.controller.on_text_assigned(&self.text) {
            return None;
        }

        // Retire any tick stream from a previous cycle.
        self.tag += 1;
        Some(self.tick())
    }

    /// Stops the countdown without clearing the text. Ticks already in
    /// flight are ignored.
    pub fn stop(&mut self) {
        self.controller.cancel();
        self.tag += 1;
    }

    /// Creates a tick message addressed to this instance's current cycle.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(TICK_INTERVAL, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn cleared_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(ClearedMsg { id }) as Msg
        })
    }

    /// Processes tick messages.
    ///
    /// Returns the next tick while the countdown runs, a [`ClearedMsg`]
    /// command when it expires, and `None` for everything else.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;

        if tick_msg.id != self.id || tick_msg.tag != self.tag {
            trace!(
                id = self.id,
                msg_id = tick_msg.id,
                msg_tag = tick_msg.tag,
                "ignoring tick"
            );
            return None;
        }

        match self.controller.on_tick() {
            TickOutcome::Held | TickOutcome::Faded(_) => Some(self.tick()),
            TickOutcome::Expired => {
                self.text.clear();
                Some(self.cleared_cmd())
            }
            TickOutcome::Idle => None,
        }
    }
}
