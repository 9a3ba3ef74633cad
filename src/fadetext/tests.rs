//! Tests for the fading text component.

use super::*;
use crate::config::{FadeConfig, FadeOutTime, DEFAULT_FOREGROUND};
use crate::fade::FADE_STEP;
use bubbletea_rs::Msg;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::{Color, Style};
use std::time::Duration;

fn tick(m: &mut Model) -> Option<bubbletea_rs::Cmd> {
    let msg = m.tick_msg();
    m.update(Box::new(msg) as Msg)
}

#[test]
fn test_new_default_values() {
    let m = new(&[]);
    assert_eq!(m.text(), "");
    assert_eq!(m.fade_out_time(), 0.0);
    assert_eq!(m.foreground_opacity(), 1.0);
    assert_eq!(m.width, 0);
    assert_eq!(m.foreground, DEFAULT_FOREGROUND);
    assert!(!m.is_fading());
    assert!(m.id() > 0);
}

#[test]
fn test_unique_ids() {
    let a = Model::new();
    let b = Model::new();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_options() {
    let m = new(&[
        with_fade_out_time(4.0),
        with_colors("#ff0000", "#000000"),
        with_width(12),
        with_style(Style::new().bold(true)),
    ]);
    assert_eq!(m.fade_out_time(), 4.0);
    assert_eq!(m.foreground, "#ff0000");
    assert_eq!(m.faded, "#000000");
    assert_eq!(m.width, 12);
}

#[test]
fn test_short_fade_out_time_is_raised_to_window() {
    let m = new(&[with_fade_out_time(0.5)]);
    assert_eq!(m.fade_out_time(), 1.5);
}

#[test]
fn test_tiny_fade_out_time_is_raised_to_window() {
    let mut m = new(&[with_fade_out_time(1e-12)]);
    assert_eq!(m.fade_out_time(), 1.5);
    assert!(m.set_text("Saved.").is_some());
    assert_eq!(m.remaining(), Duration::from_millis(1500));
}

#[test]
fn test_huge_fade_out_time_does_not_panic() {
    let cfg = FadeConfig {
        fade_out_time: FadeOutTime::from_seconds(1e20).unwrap(),
        ..FadeConfig::default()
    };
    let mut m = Model::from_config(&cfg);
    assert!(m.set_text("Saved.").is_some());
    assert_eq!(m.remaining(), Duration::MAX);

    m.set_fade_out_time(1e30);
    assert!(m.fade_out_time() > 1e18);
}

#[test]
fn test_non_positive_fade_out_time_disables() {
    for secs in [0.0, -2.0, f64::NAN] {
        let mut m = new(&[with_fade_out_time(secs)]);
        assert!(m.set_text("Saved.").is_none(), "secs {secs}");
        assert!(!m.is_fading());
        assert_eq!(m.text(), "Saved.");
    }
}

#[test]
fn test_set_text_arms_one_tick_stream() {
    let mut m = new(&[with_fade_out_time(2.0)]);
    assert!(m.set_text("Saved.").is_some());
    assert!(m.is_fading());
    assert_eq!(m.foreground_opacity(), 1.0);
    assert_eq!(m.remaining(), Duration::from_secs(2));
}

#[test]
fn test_blank_text_does_not_arm() {
    let mut m = new(&[with_fade_out_time(2.0)]);
    assert!(m.set_text("").is_none());
    assert!(m.set_text("  ").is_none());
    assert!(!m.is_fading());
}

#[test]
fn test_blank_text_while_fading_keeps_countdown() {
    let mut m = new(&[with_fade_out_time(2.0)]);
    let _ = m.set_text("Saved.");
    for _ in 0..8 {
        tick(&mut m);
    }
    let remaining = m.remaining();
    let opacity = m.foreground_opacity();

    assert!(m.set_text("").is_none());
    assert_eq!(m.text(), "");
    assert_eq!(m.remaining(), remaining);
    assert_eq!(m.foreground_opacity(), opacity);
    assert!(m.is_fading());
}

#[test]
fn test_restart_rejects_stale_ticks() {
    let mut m = new(&[with_fade_out_time(3.0)]);
    let _ = m.set_text("first");
    let stale = m.tick_msg();
    for _ in 0..5 {
        tick(&mut m);
    }

    let _ = m.set_text("second");
    assert_eq!(m.remaining(), Duration::from_secs(3));
    assert_eq!(m.foreground_opacity(), 1.0);

    assert!(m.update(Box::new(stale) as Msg).is_none());
    assert_eq!(m.remaining(), Duration::from_secs(3));
}

#[test]
fn test_rejects_foreign_ticks() {
    let mut a = new(&[with_fade_out_time(3.0)]);
    let mut b = new(&[with_fade_out_time(3.0)]);
    let _ = a.set_text("a");
    let _ = b.set_text("b");

    let from_b = b.tick_msg();
    assert!(a.update(Box::new(from_b) as Msg).is_none());
    assert_eq!(a.remaining(), Duration::from_secs(3));
}

#[test]
fn test_ignores_unrelated_messages() {
    let mut m = new(&[with_fade_out_time(3.0)]);
    let _ = m.set_text("Saved.");
    assert!(m.update(Box::new("hello") as Msg).is_none());
    assert!(m
        .update(Box::new(ClearedMsg { id: m.id() }) as Msg)
        .is_none());
    assert_eq!(m.remaining(), Duration::from_secs(3));
}

#[test]
fn test_ticks_continue_until_expiry() {
    let mut m = new(&[with_fade_out_time(1.5)]);
    let _ = m.set_text("Saved.");

    let mut opacity = m.foreground_opacity();
    for n in 1..15 {
        assert!(tick(&mut m).is_some(), "tick {n}");
        assert!(m.foreground_opacity() < opacity);
        assert!((opacity - m.foreground_opacity() - FADE_STEP).abs() < 1e-9);
        opacity = m.foreground_opacity();
        assert_eq!(m.text(), "Saved.");
    }

    // tick 15 clears and reports it
    assert!(tick(&mut m).is_some());
    assert_eq!(m.text(), "");
    assert!(!m.is_fading());

    // no further ticks are honoured
    assert!(tick(&mut m).is_none());
}

#[test]
fn test_long_lifetime_holds_then_fades() {
    let mut m = new(&[with_fade_out_time(5.0)]);
    let _ = m.set_text("Saved.");

    for _ in 0..34 {
        tick(&mut m);
        assert_eq!(m.foreground_opacity(), 1.0);
    }
    for _ in 0..15 {
        tick(&mut m);
    }
    assert!(m.foreground_opacity() < 1e-9);
    assert_eq!(m.text(), "Saved.");

    tick(&mut m);
    assert_eq!(m.text(), "");
}

#[test]
fn test_stop_keeps_text_and_ignores_ticks() {
    let mut m = new(&[with_fade_out_time(2.0)]);
    let _ = m.set_text("Saved.");
    let pending = m.tick_msg();

    m.stop();
    assert!(!m.is_fading());
    assert_eq!(m.text(), "Saved.");
    assert_eq!(m.foreground_opacity(), 1.0);
    assert!(m.update(Box::new(pending) as Msg).is_none());
}

#[test]
fn test_disabling_mid_cycle_stops_ticks() {
    let mut m = new(&[with_fade_out_time(2.0)]);
    let _ = m.set_text("Saved.");
    let pending = m.tick_msg();

    m.set_fade_out_time(0.0);
    assert!(!m.is_fading());
    assert!(m.update(Box::new(pending) as Msg).is_none());
    assert!(tick(&mut m).is_none());
    assert_eq!(m.text(), "Saved.");
}

#[test]
fn test_from_config() {
    let cfg = FadeConfig {
        fade_out_time: FadeOutTime::from_seconds(3.0).unwrap(),
        foreground: "#00ff00".to_string(),
        faded: "#000000".to_string(),
        width: 10,
    };
    let m = Model::from_config(&cfg);
    assert_eq!(m.fade_out_time(), 3.0);
    assert_eq!(m.foreground, "#00ff00");
    assert_eq!(m.width, 10);
}

#[test]
fn test_view_shows_text() {
    let mut m = new(&[with_fade_out_time(2.0)]);
    let _ = m.set_text("Saved.");
    assert_eq!(lipgloss::strip_ansi(&m.view()), "Saved.");
}

#[test]
fn test_view_full_opacity_uses_foreground() {
    let mut m = new(&[with_fade_out_time(2.0), with_colors("#ff0000", "#000000")]);
    let _ = m.set_text("Saved.");
    let expected = Style::new()
        .inline(true)
        .foreground(Color::from("#ff0000"))
        .render("Saved.");
    assert_eq!(m.view(), expected);
}

#[test]
fn test_view_keeps_text_while_fading() {
    let mut m = new(&[with_fade_out_time(1.5)]);
    let _ = m.set_text("Saved.");
    for _ in 0..10 {
        tick(&mut m);
    }
    assert!(m.foreground_opacity() < 1.0);
    assert_eq!(lipgloss::strip_ansi(&m.view()), "Saved.");
}

#[test]
fn test_view_padding() {
    let mut m = new(&[with_fade_out_time(1.5), with_width(10)]);
    let _ = m.set_text("Saved.");
    assert_eq!(lipgloss::strip_ansi(&m.view()), "Saved.    ");

    for _ in 0..15 {
        tick(&mut m);
    }
    assert_eq!(m.view(), " ".repeat(10));
}

#[test]
fn test_view_wide_characters_pad_by_columns() {
    let mut m = new(&[with_fade_out_time(1.5), with_width(6)]);
    let _ = m.set_text("保存");
    assert_eq!(lipgloss::strip_ansi(&m.view()), "保存  ");
}

#[test]
fn test_view_overlong_text_is_not_truncated() {
    let mut m = new(&[with_fade_out_time(1.5), with_width(3)]);
    let _ = m.set_text("Saved.");
    assert_eq!(lipgloss::strip_ansi(&m.view()), "Saved.");
}
