//! Self-clearing text display for Bubble Tea applications.
//!
//! A fading text shows a short status message ("Saved.", "Copied 12 photos")
//! and removes it on its own: once text is assigned it counts down, fades the
//! foreground over the final [`FADE_WINDOW`](crate::fade::FADE_WINDOW) and
//! then clears itself. Assigning new text while a message is on screen
//! restarts the countdown at full opacity.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_fadetext::fadetext::{new, with_fade_out_time, with_width};
//!
//! let mut status = new(&[with_fade_out_time(3.0), with_width(30)]);
//! let cmd = status.set_text("Saved.");
//! assert!(cmd.is_some()); // first tick of the countdown
//! assert_eq!(status.foreground_opacity(), 1.0);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use bubbletea_fadetext::fadetext::{self, ClearedMsg};
//!
//! struct App {
//!     status: fadetext::Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut status = fadetext::new(&[fadetext::with_fade_out_time(2.0)]);
//!         let cmd = status.set_text("Ready");
//!         (Self { status }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if msg.downcast_ref::<ClearedMsg>().is_some() {
//!             // the status line went blank
//!             return None;
//!         }
//!         self.status.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.status.view()
//!     }
//! }
//! ```

pub mod methods;
pub mod model;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use model::{
    new, with_colors, with_fade_out_time, with_style, with_width, FadeTextOption, Model,
};
pub use types::{ClearedMsg, TickMsg};
