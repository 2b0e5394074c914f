use serde::{Deserialize, Serialize};

use crate::models::{Color, CustomMargins};

/// One color, or several drawn as a gradient.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum BorderColor {
    Single(Color),
    Gradient(Vec<Color>),
}

impl BorderColor {
    #[must_use]
    pub fn literal(hex: &str) -> Self {
        Self::Single(Color::literal(hex))
    }

    #[must_use]
    pub fn gradient(hexes: &[&str]) -> Self {
        Self::Gradient(hexes.iter().map(|h| Color::literal(h)).collect())
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        match self {
            Self::Single(c) => std::slice::from_ref(c),
            Self::Gradient(cs) => cs,
        }
    }
}

/// A layout algorithm and its parameters, in the order the host cycles them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum LayoutDescriptor {
    Columns(ColumnsLayout),
    Max,
    Stack(StackLayout),
    MonadTall(MonadLayout),
    MonadWide(MonadLayout),
    Bsp(BspLayout),
    Floating(FloatingStyle),
}

impl LayoutDescriptor {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Columns(_) => "columns",
            Self::Max => "max",
            Self::Stack(_) => "stack",
            Self::MonadTall(_) => "monadtall",
            Self::MonadWide(_) => "monadwide",
            Self::Bsp(_) => "bsp",
            Self::Floating(_) => "floating",
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnsLayout {
    pub border_focus: BorderColor,
    pub border_focus_stack: BorderColor,
    pub border_normal: BorderColor,
    pub border_normal_stack: BorderColor,
    /// Draw a border even when only one window is shown.
    pub border_on_single: bool,
    pub border_width: u32,
    /// New windows go to the column with the fewest windows.
    pub fair: bool,
    pub grow_amount: u32,
    /// Position of new windows within a column, 0 is the top.
    pub insert_position: u32,
    pub margin: CustomMargins,
    pub margin_on_single: Option<CustomMargins>,
    pub num_columns: u32,
    pub split: bool,
    pub wrap_focus_columns: bool,
    pub wrap_focus_rows: bool,
    pub wrap_focus_stacks: bool,
}

impl Default for ColumnsLayout {
    fn default() -> Self {
        Self {
            border_focus: BorderColor::literal("#881111"),
            border_focus_stack: BorderColor::literal("#881111"),
            border_normal: BorderColor::literal("#220000"),
            border_normal_stack: BorderColor::literal("#220000"),
            border_on_single: false,
            border_width: 2,
            fair: false,
            grow_amount: 10,
            insert_position: 0,
            margin: CustomMargins::Int(0),
            margin_on_single: None,
            num_columns: 2,
            split: true,
            wrap_focus_columns: true,
            wrap_focus_rows: true,
            wrap_focus_stacks: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StackLayout {
    pub num_stacks: u32,
    pub autosplit: bool,
    pub border_focus: BorderColor,
    pub border_normal: BorderColor,
    pub border_width: u32,
    pub margin: CustomMargins,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            num_stacks: 2,
            autosplit: false,
            border_focus: BorderColor::literal("#0000ff"),
            border_normal: BorderColor::literal("#000000"),
            border_width: 1,
            margin: CustomMargins::Int(0),
        }
    }
}

/// Parameters shared by the main-pane-plus-stack layouts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MonadLayout {
    /// Share of the screen given to the main pane.
    pub ratio: f32,
    pub border_focus: BorderColor,
    pub border_normal: BorderColor,
    pub border_width: u32,
    pub margin: CustomMargins,
}

impl Default for MonadLayout {
    fn default() -> Self {
        Self {
            ratio: 0.5,
            border_focus: BorderColor::literal("#ff0000"),
            border_normal: BorderColor::literal("#000000"),
            border_width: 2,
            margin: CustomMargins::Int(0),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BspLayout {
    pub fair: bool,
    /// Width/height ratio above which a node splits vertically.
    pub ratio: f32,
    pub grow_amount: u32,
    pub border_focus: BorderColor,
    pub border_normal: BorderColor,
    pub border_width: u32,
    pub margin: CustomMargins,
}

impl Default for BspLayout {
    fn default() -> Self {
        Self {
            fair: true,
            ratio: 1.6,
            grow_amount: 10,
            border_focus: BorderColor::literal("#881111"),
            border_normal: BorderColor::literal("#220000"),
            border_width: 2,
            margin: CustomMargins::Int(0),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FloatingStyle {
    pub border_focus: BorderColor,
    pub border_normal: BorderColor,
    pub border_width: u32,
    pub fullscreen_border_width: u32,
    pub max_border_width: u32,
}

impl Default for FloatingStyle {
    fn default() -> Self {
        Self {
            border_focus: BorderColor::literal("#0000ff"),
            border_normal: BorderColor::literal("#000000"),
            border_width: 1,
            fullscreen_border_width: 0,
            max_border_width: 0,
        }
    }
}
