use serde::{Deserialize, Serialize};

use super::widget::Widget;
use crate::errors::Result;
use crate::models::{Color, CustomMargins, Margins};

/// A bar docked to one edge of a screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Thickness in pixels.
    pub size: u32,
    pub background: Option<Color>,
    pub margin: CustomMargins,
    pub border_width: CustomMargins,
    /// One color for every side, or four in `[top, right, bottom, left]` order.
    pub border_color: Vec<Color>,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
            size: 24,
            background: None,
            margin: CustomMargins::Int(0),
            border_width: CustomMargins::Int(0),
            border_color: vec![Color::literal("#000000")],
        }
    }
}

impl Bar {
    /// # Errors
    ///
    /// Errors if the margin list is empty or longer than four entries.
    pub fn margins(&self) -> Result<Margins> {
        Margins::try_from(&self.margin)
    }

    /// # Errors
    ///
    /// Errors if the border list is empty or longer than four entries.
    pub fn border_widths(&self) -> Result<Margins> {
        Margins::try_from(&self.border_width)
    }
}

/// The bars attached to one physical display.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Screen {
    pub top: Option<Bar>,
    pub bottom: Option<Bar>,
    pub left: Option<Bar>,
    pub right: Option<Bar>,
}

impl Screen {
    /// The configured bars in top, bottom, left, right order.
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        [&self.top, &self.bottom, &self.left, &self.right]
            .into_iter()
            .flatten()
    }

    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.bars().flat_map(|bar| bar.widgets.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetKind;

    #[test]
    fn bars_iterate_in_edge_order() {
        let screen = Screen {
            bottom: Some(Bar {
                size: 30,
                ..Bar::default()
            }),
            top: Some(Bar::default()),
            ..Screen::default()
        };
        let sizes: Vec<u32> = screen.bars().map(|b| b.size).collect();
        assert_eq!(sizes, vec![24, 30]);
    }

    #[test]
    fn widgets_span_all_bars() {
        let screen = Screen {
            top: Some(Bar {
                widgets: vec![Widget::new(WidgetKind::Prompt)],
                ..Bar::default()
            }),
            left: Some(Bar {
                widgets: vec![Widget::new(WidgetKind::Systray)],
                ..Bar::default()
            }),
            ..Screen::default()
        };
        let kinds: Vec<&str> = screen.widgets().map(|w| w.kind.name()).collect();
        assert_eq!(kinds, vec!["Prompt", "Systray"]);
    }

    #[test]
    fn bar_margins_convert() {
        let bar = Bar {
            margin: CustomMargins::Vec(vec![15, 0, 15, 0]),
            border_width: CustomMargins::Vec(vec![]),
            ..Bar::default()
        };
        assert_eq!(bar.margins().unwrap().top, 15);
        assert!(bar.border_widths().is_err());
    }
}
