mod behavior;
mod float_rule;
mod group;
mod keybind;
mod layout;
mod mousebind;
mod screen;
mod widget;

pub use behavior::{BringFrontClick, FocusOnActivation};
pub use float_rule::{default_float_rules, FloatRule, FloatingLayout, WindowInfo, WindowType};
pub use group::{generate_group_keybinds, ordinal_key, Group, MAX_ORDINAL_GROUPS};
pub use keybind::{Keybind, Modifier, MODKEY};
pub use layout::{
    BorderColor, BspLayout, ColumnsLayout, FloatingStyle, LayoutDescriptor, MonadLayout,
    StackLayout,
};
pub use mousebind::Mousebind;
pub use screen::{Bar, Screen};
pub use widget::{
    ChordParams, ClockParams, GroupBoxParams, HighlightMethod, NameTransform, QuickExitParams,
    SpacerParams, TextBoxParams, Widget, WidgetKind, WidgetStyle,
};
