use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::models::Color;

/// Display parameters every widget understands.
///
/// Unset fields fall back to the bar-wide `widget_defaults`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontsize: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl WidgetStyle {
    /// `self` where set, `base` otherwise.
    #[must_use]
    pub fn overlay(&self, base: &Self) -> Self {
        Self {
            font: self.font.clone().or_else(|| base.font.clone()),
            fontsize: self.fontsize.or(base.fontsize),
            padding: self.padding.or(base.padding),
            foreground: self.foreground.clone().or_else(|| base.foreground.clone()),
            background: self.background.clone().or_else(|| base.background.clone()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Widget {
    pub kind: WidgetKind,
    #[serde(default, skip_serializing_if = "WidgetStyle::is_empty")]
    pub style: WidgetStyle,
}

impl Widget {
    #[must_use]
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            style: WidgetStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: WidgetStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn effective_style(&self, defaults: &WidgetStyle) -> WidgetStyle {
        self.style.overlay(defaults)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    /// Name of the current layout.
    CurrentLayout,
    GroupBox(GroupBoxParams),
    /// Command prompt, hidden until invoked.
    Prompt,
    /// Title of the focused window.
    WindowName,
    /// Name of the active key chord.
    Chord(ChordParams),
    Systray,
    Clock(ClockParams),
    QuickExit(QuickExitParams),
    Spacer(SpacerParams),
    TextBox(TextBoxParams),
}

impl WidgetKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CurrentLayout => "CurrentLayout",
            Self::GroupBox(_) => "GroupBox",
            Self::Prompt => "Prompt",
            Self::WindowName => "WindowName",
            Self::Chord(_) => "Chord",
            Self::Systray => "Systray",
            Self::Clock(_) => "Clock",
            Self::QuickExit(_) => "QuickExit",
            Self::Spacer(_) => "Spacer",
            Self::TextBox(_) => "TextBox",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HighlightMethod {
    #[default]
    Border,
    Block,
    Text,
    Line,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GroupBoxParams {
    pub rounded: bool,
    /// Text color of groups holding windows.
    pub active: Option<Color>,
    /// Text color of empty groups.
    pub inactive: Option<Color>,
    pub highlight_method: HighlightMethod,
    pub this_current_screen_border: Option<Color>,
}

/// How the chord widget rewrites the chord name before display.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NameTransform {
    #[default]
    Identity,
    Upper,
    Lower,
}

impl NameTransform {
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Identity => name.to_owned(),
            Self::Upper => name.to_uppercase(),
            Self::Lower => name.to_lowercase(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ChordParams {
    /// Chord name -> (background, foreground).
    pub chords_colors: BTreeMap<String, (Color, Color)>,
    pub name_transform: NameTransform,
}

impl ChordParams {
    /// Text and colors for the chord called `name`.
    #[must_use]
    pub fn render(&self, name: &str) -> (String, Option<&(Color, Color)>) {
        (self.name_transform.apply(name), self.chords_colors.get(name))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ClockParams {
    /// strftime format.
    pub format: String,
}

impl Default for ClockParams {
    fn default() -> Self {
        Self {
            format: "%H:%M".to_owned(),
        }
    }
}

impl ClockParams {
    #[must_use]
    pub fn is_valid_format(&self) -> bool {
        !StrftimeItems::new(&self.format).any(|item| matches!(item, Item::Error))
    }

    #[must_use]
    pub fn render<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        at.format(&self.format).to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct QuickExitParams {
    pub default_text: String,
    /// `{}` is replaced by the seconds left.
    pub countdown_format: String,
    pub countdown_start: u32,
}

impl Default for QuickExitParams {
    fn default() -> Self {
        Self {
            default_text: "[ shutdown ]".to_owned(),
            countdown_format: "[ {} seconds ]".to_owned(),
            countdown_start: 5,
        }
    }
}

impl QuickExitParams {
    #[must_use]
    pub fn countdown_text(&self, remaining: u32) -> String {
        self.countdown_format.replace("{}", &remaining.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SpacerParams {
    /// Fixed width in pixels; `None` stretches to fill the bar.
    pub length: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TextBoxParams {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn widget_style_overrides_defaults_field_by_field() {
        let defaults = WidgetStyle {
            font: Some("manrope bold".into()),
            fontsize: Some(12),
            padding: Some(3),
            foreground: Some(Color::literal("#000000")),
            background: None,
        };
        let widget = Widget::new(WidgetKind::CurrentLayout).with_style(WidgetStyle {
            padding: Some(8),
            ..WidgetStyle::default()
        });
        let style = widget.effective_style(&defaults);
        assert_eq!(style.padding, Some(8));
        assert_eq!(style.fontsize, Some(12));
        assert_eq!(style.font.as_deref(), Some("manrope bold"));
    }

    #[test]
    fn unknown_widget_parameters_are_rejected() {
        let ok: Result<Widget, _> = ron::from_str("(kind: GroupBox((rounded: true)), style: (fontsize: Some(14)))");
        assert!(ok.is_ok());
        let bad: Result<Widget, _> = ron::from_str("(kind: GroupBox((roundness: true)))");
        assert!(bad.is_err());
        let bad_style: Result<Widget, _> = ron::from_str("(kind: Systray, style: (colour: None))");
        assert!(bad_style.is_err());
    }

    #[test]
    fn chord_name_is_transformed() {
        let mut params = ChordParams {
            name_transform: NameTransform::Upper,
            ..ChordParams::default()
        };
        params.chords_colors.insert(
            "launch".into(),
            (Color::literal("#ff0000"), Color::literal("#ffffff")),
        );
        let (text, colors) = params.render("launch");
        assert_eq!(text, "LAUNCH");
        assert!(colors.is_some());
        assert!(params.render("resize").1.is_none());
    }

    #[test]
    fn clock_formats_and_validates() {
        let clock = ClockParams {
            format: "%Y-%m-%d %a %I:%M %p".into(),
        };
        assert!(clock.is_valid_format());
        let at = Utc.with_ymd_and_hms(2022, 3, 4, 13, 5, 0).unwrap();
        assert_eq!(clock.render(&at), "2022-03-04 Fri 01:05 PM");

        let broken = ClockParams {
            format: "%Y-%Q".into(),
        };
        assert!(!broken.is_valid_format());
    }

    #[test]
    fn quick_exit_countdown() {
        let q = QuickExitParams::default();
        assert_eq!(q.countdown_text(3), "[ 3 seconds ]");
        let glyph = QuickExitParams {
            countdown_format: "\u{f9b1}".into(),
            ..QuickExitParams::default()
        };
        assert_eq!(glyph.countdown_text(3), "\u{f9b1}");
    }
}
