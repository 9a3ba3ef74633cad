#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-fadetext/")]

//! # bubbletea-fadetext
//!
//! A self-clearing status text for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications. Assign a message, and the display counts down, fades its
//! foreground over the final second and a half and then clears itself.
//!
//! ## Overview
//!
//! - [`fade`] holds [`FadeController`], the framework-free countdown and
//!   opacity state machine. Hosts other than bubbletea-rs can drive it
//!   directly by calling `on_text_assigned` and `on_tick`.
//! - [`fadetext`] wraps the controller in a component following the Elm
//!   Architecture (`update()` and `view()`), scheduling its own ticks and
//!   rendering the text with a lipgloss foreground blended by opacity.
//! - [`config`] parses host-supplied settings.
//!
//! ## Timing
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | [`TICK_INTERVAL`] | 100 ms | countdown granularity |
//! | [`FADE_WINDOW`] | 1.5 s | trailing span over which opacity falls to zero |
//! | [`FADE_STEP`] | 1/15 | opacity removed per tick inside the window |
//!
//! The configured fade-out time is the total lifetime of a message. It is
//! never shorter than the fade window; zero disables fading entirely.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_fadetext::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     status: FadeText,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut status = fadetext_new(&[with_fade_out_time(3.0)]);
//!         let cmd = status.set_text("Copied 12 photos");
//!         (Self { status }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.status.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.status.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Cycle starts, restarts, cancellations and expiry are reported with
//! `tracing` at debug level; individual ticks at trace level. The crate
//! never installs a subscriber.

pub mod config;
pub mod error;
pub mod fade;
pub mod fadetext;

pub use config::{FadeConfig, FadeOutTime};
pub use error::ConfigError;
pub use fade::{DisplayState, FadeController, TickOutcome, FADE_STEP, FADE_WINDOW, TICK_INTERVAL};
pub use fadetext::{
    new as fadetext_new, ClearedMsg as FadeTextClearedMsg, Model as FadeText,
    TickMsg as FadeTextTickMsg,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_fadetext::prelude::*;
///
/// let mut status = fadetext_new(&[with_fade_out_time(2.0), with_width(24)]);
/// let _ = status.set_text("Saved.");
/// assert!(status.is_fading());
/// ```
pub mod prelude {
    pub use crate::config::{FadeConfig, FadeOutTime};
    pub use crate::error::ConfigError;
    pub use crate::fade::{DisplayState, FadeController, TickOutcome};
    pub use crate::fadetext::{
        new as fadetext_new, with_colors, with_fade_out_time, with_style, with_width,
        ClearedMsg as FadeTextClearedMsg, FadeTextOption, Model as FadeText,
        TickMsg as FadeTextTickMsg,
    };
}
