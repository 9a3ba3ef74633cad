//! Rendering for the fading text.

use super::model::Model;
use lipgloss_extras::lipgloss::blending::blend_1d;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

// One colour per fade step plus the full-opacity end.
const FADE_LEVELS: usize = 16;

impl Model {
    /// Style used for the text at the current opacity.
    pub(super) fn foreground_style(&self) -> Style {
        let base = self.style.clone().inline(true);
        let opacity = self.controller.opacity().clamp(0.0, 1.0);

        if opacity >= 1.0 {
            return base.foreground(Color::from(self.foreground.as_str()));
        }

        let ramp = blend_1d(
            FADE_LEVELS,
            vec![
                Color::from(self.faded.as_str()),
                Color::from(self.foreground.as_str()),
            ],
        );
        let idx = (opacity * (FADE_LEVELS - 1) as f64).round() as usize;
        let idx = std::cmp::min(idx, ramp.len().saturating_sub(1));
        match ramp.get(idx) {
            Some(color) => base.foreground(color.clone()),
            None => base.foreground(Color::from(self.faded.as_str())),
        }
    }

    /// Renders the text with its faded foreground, padded to `width`.
    ///
    /// ```rust
    /// use bubbletea_fadetext::fadetext::Model;
    ///
    /// let status = Model::new().with_width(8);
    /// assert_eq!(status.view(), "        ");
    /// ```
    pub fn view(&self) -> String {
        let mut out = if self.text.is_empty() {
            String::new()
        } else {
            self.foreground_style().render(&self.text)
        };

        let used = UnicodeWidthStr::width(self.text.as_str());
        if self.width > used {
            out.push_str(&" ".repeat(self.width - used));
        }
        out
    }
}
