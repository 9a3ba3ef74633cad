//! Core model for the fading text component.

use crate::config::{FadeConfig, DEFAULT_FADED, DEFAULT_FOREGROUND};
use crate::fade::FadeController;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};

// Internal ID management for fading text instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A text display that fades out and clears itself after a fixed lifetime.
///
/// The model owns the displayed text and one [`FadeController`]. Assigning
/// non-blank text through [`Model::set_text`] starts (or restarts) a
/// countdown driven by [`TickMsg`](super::TickMsg) commands; when it runs
/// out the text is cleared and a [`ClearedMsg`](super::ClearedMsg) is sent.
///
/// # Examples
///
/// ```rust
/// use bubbletea_fadetext::fadetext::Model;
///
/// let mut status = Model::new().with_fade_out_time(1.5).with_width(20);
/// let _cmd = status.set_text("Copied 3 photos");
/// assert!(status.is_fading());
/// assert_eq!(status.text(), "Copied 3 photos");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Base style; the foreground colour is replaced while rendering.
    pub style: Style,
    /// Foreground colour at full opacity (`#rrggbb` or ANSI index).
    pub foreground: String,
    /// Colour the foreground blends towards as opacity drops.
    pub faded: String,
    /// Width the view is padded to so a status line keeps its size when the
    /// text clears. Zero disables padding.
    pub width: usize,

    pub(super) text: String,
    pub(super) controller: FadeController,
    pub(super) id: i64,
    pub(super) tag: i64,
}

/// Configuration option for [`new`].
pub enum FadeTextOption {
    /// Seconds from assignment until the text clears; zero disables fading.
    WithFadeOutTime(f64),
    /// Base lipgloss style.
    WithStyle(Box<Style>),
    /// Full and faded foreground colours.
    WithColors(String, String),
    /// Padding width of the view.
    WithWidth(usize),
}

impl FadeTextOption {
    fn apply(&self, m: &mut Model) {
        match self {
            FadeTextOption::WithFadeOutTime(secs) => m.set_fade_out_time(*secs),
            FadeTextOption::WithStyle(style) => m.style = style.as_ref().clone(),
            FadeTextOption::WithColors(fg, faded) => {
                m.foreground = fg.clone();
                m.faded = faded.clone();
            }
            FadeTextOption::WithWidth(w) => m.width = *w,
        }
    }
}

/// Sets the fade-out time in seconds. Values below the fade window are raised
/// to it; zero or negative disables fading.
pub fn with_fade_out_time(seconds: f64) -> FadeTextOption {
    FadeTextOption::WithFadeOutTime(seconds)
}

/// Sets the base style.
pub fn with_style(style: Style) -> FadeTextOption {
    FadeTextOption::WithStyle(Box::new(style))
}

/// Sets the foreground colour at full opacity and the colour it fades to.
pub fn with_colors(foreground: impl Into<String>, faded: impl Into<String>) -> FadeTextOption {
    FadeTextOption::WithColors(foreground.into(), faded.into())
}

/// Pads the view to `width` columns.
pub fn with_width(width: usize) -> FadeTextOption {
    FadeTextOption::WithWidth(width)
}

impl Default for Model {
    fn default() -> Self {
        Self {
            style: Style::new(),
            foreground: DEFAULT_FOREGROUND.to_string(),
            faded: DEFAULT_FADED.to_string(),
            width: 0,
            text: String::new(),
            controller: FadeController::default(),
            id: next_id(),
            tag: 0,
        }
    }
}

impl Model {
    /// Creates an empty display with fading disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a display configured by `opts`.
    pub fn new_with_options(opts: &[FadeTextOption]) -> Self {
        let mut m = Self::new();
        for opt in opts {
            opt.apply(&mut m);
        }
        m
    }

    /// Creates a display from a host settings section.
    ///
    /// ```rust
    /// use bubbletea_fadetext::config::{FadeConfig, FadeOutTime};
    /// use bubbletea_fadetext::fadetext::Model;
    ///
    /// let cfg = FadeConfig {
    ///     fade_out_time: "4s".parse::<FadeOutTime>().unwrap(),
    ///     ..FadeConfig::default()
    /// };
    /// let status = Model::from_config(&cfg);
    /// assert_eq!(status.fade_out_time(), 4.0);
    /// ```
    pub fn from_config(config: &FadeConfig) -> Self {
        let mut m = Self::new();
        m.foreground = config.foreground.clone();
        m.faded = config.faded.clone();
        m.width = config.width;
        m.set_fade_out_time(config.fade_out_time.seconds());
        m
    }

    /// Sets the fade-out time using builder pattern.
    pub fn with_fade_out_time(mut self, seconds: f64) -> Self {
        self.set_fade_out_time(seconds);
        self
    }

    /// Sets the base style using builder pattern.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets both foreground colours using builder pattern.
    pub fn with_colors(mut self, foreground: impl Into<String>, faded: impl Into<String>) -> Self {
        self.foreground = foreground.into();
        self.faded = faded.into();
        self
    }

    /// Sets the padding width using builder pattern.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

/// Creates a new fading text with the given options.
pub fn new(opts: &[FadeTextOption]) -> Model {
    Model::new_with_options(opts)
}
