use std::collections::BTreeMap;

use tessera_core::{
    config::{
        Bar, BorderColor, BringFrontClick, ChordParams, ClockParams, ColumnsLayout, FloatRule,
        FloatingLayout, FocusOnActivation, Group, GroupBoxParams, HighlightMethod, Keybind,
        LayoutDescriptor, Mousebind, NameTransform, QuickExitParams, Screen, Widget, WidgetKind,
        WidgetStyle, MODKEY,
    },
    models::{Button, Color, CustomMargins},
    Command, LayoutCommand, WindowCommand,
};

use super::Config;
use crate::config::checks::DEFAULT_LOG_LEVEL;

const TERMINAL: &str = "kitty";

// Glyphs from the icomoon-feather font, one per group.
const GROUP_NAMES: [&str; 9] = [
    "\u{e900}", "\u{e902}", "\u{e901}", "\u{e903}", "\u{e904}", "\u{e909}", "\u{e90a}",
    "\u{e925}", "\u{e90b}",
];

fn key(modifiers: &[&str], key: &str, action: Command, desc: &str) -> Keybind {
    Keybind::new(modifiers, key, action).desc(desc)
}

fn layout(cmd: LayoutCommand, modifiers: &[&str], k: &str, desc: &str) -> Keybind {
    key(modifiers, k, Command::Layout(cmd), desc)
}

fn spawn(modifiers: &[&str], k: &str, cmdline: &str, desc: &str) -> Keybind {
    key(modifiers, k, Command::Spawn(cmdline.to_owned()), desc)
}

fn window(cmd: WindowCommand) -> Command {
    Command::Window(cmd)
}

impl Default for Config {
    // We allow this because this function would be difficult to reduce. The
    // tables are plain data and read best as one block.
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        let m = MODKEY;
        let keys = vec![
            // Switch between windows
            layout(LayoutCommand::Left, &[m], "j", "Move focus to left"),
            layout(LayoutCommand::Right, &[m], "l", "Move focus to right"),
            layout(LayoutCommand::Down, &[m], "k", "Move focus down"),
            layout(LayoutCommand::Up, &[m], "i", "Move focus up"),
            layout(LayoutCommand::Next, &[m], "space", "Move window focus to other window"),
            // Moving out of range in the Columns layout creates a new column
            layout(LayoutCommand::ShuffleLeft, &[m, "shift"], "j", "Move window to the left"),
            layout(LayoutCommand::ShuffleRight, &[m, "shift"], "l", "Move window to the right"),
            layout(LayoutCommand::ShuffleDown, &[m, "shift"], "k", "Move window down"),
            layout(LayoutCommand::ShuffleUp, &[m, "shift"], "i", "Move window up"),
            // Growing towards a screen edge shrinks a window on that edge
            layout(LayoutCommand::GrowLeft, &[m, "control"], "j", "Grow window to the left"),
            layout(LayoutCommand::GrowRight, &[m, "control"], "l", "Grow window to the right"),
            layout(LayoutCommand::GrowDown, &[m, "control"], "k", "Grow window down"),
            layout(LayoutCommand::GrowUp, &[m, "control"], "i", "Grow window up"),
            layout(LayoutCommand::Normalize, &[m, "control"], "n", "Reset all window sizes"),
            layout(
                LayoutCommand::SwapColumnLeft,
                &[m, "shift", "control"],
                "j",
                "Swap column to the left",
            ),
            layout(
                LayoutCommand::SwapColumnRight,
                &[m, "shift", "control"],
                "l",
                "Swap column to the right",
            ),
            layout(
                LayoutCommand::ToggleSplit,
                &[m, "shift"],
                "Return",
                "Toggle between split and unsplit sides of stack",
            ),
            spawn(&[m], "Return", TERMINAL, "Launch terminal"),
            key(&[m], "Tab", Command::NextLayout, "Toggle between layouts"),
            key(&[m], "w", window(WindowCommand::Kill), "Kill focused window"),
            key(
                &[m, "shift"],
                "f",
                window(WindowCommand::ToggleFloating),
                "Toggle floating",
            ),
            key(&[m, "control"], "r", Command::ReloadConfig, "Reload the config"),
            key(&[m, "control"], "q", Command::Shutdown, "Shutdown tessera"),
            spawn(&[m], "r", "rofi -show", "Spawn a command using a prompt widget"),
            // User programs
            spawn(&[m], "c", "chromium", "Spawn chromium"),
            spawn(&[m], "f", "firefox", "Spawn firefox"),
            spawn(&[m], "d", "code", "Spawn code"),
            spawn(&[m], "n", "nitrogen", "Spawn nitrogen"),
            spawn(
                &[m],
                "u",
                r#"terminator -e "unimatrix -s 93 -a -f -o""#,
                "Spawn unimatrix",
            ),
            spawn(
                &[m],
                "p",
                r#"terminator -e "cd /opt/pycharm-community-2021.3/bin;./pycharm.sh""#,
                "Spawn pycharm",
            ),
            spawn(&[m], "t", "thunar", "Spawn thunar"),
            spawn(&[m], "o", "libreoffice", "Spawn libreoffice"),
            spawn(&[m], "b", "thunderbird", "Spawn thunderbird"),
            spawn(&[m], "v", "copyq", "Spawn copyq"),
            // Special keys
            spawn(&[], "XF86AudioRaiseVolume", r#"sh -c "pw-volume change +5%""#, "Raise volume"),
            spawn(&[], "XF86AudioLowerVolume", r#"sh -c "pw-volume change -5%""#, "Lower volume"),
            spawn(&[], "XF86AudioMute", "pw-volume mute toggle", "Mute volume"),
            spawn(&[], "XF86AudioMicMute", "amixer set Capture toggle", "Mute mic"),
            // Media control on keyboards without dedicated keys
            spawn(&[m], "Up", "playerctl play-pause", "Play-Pause"),
            spawn(&[m], "Down", "playerctl play-pause", "Play-Pause"),
            spawn(&[m], "Right", "playerctl next", "Next"),
            spawn(&[m], "Left", "playerctl previous", "Previous"),
            spawn(&[], "XF86AudioPlay", "playerctl play-pause", "Play-Pause"),
            spawn(&[], "XF86AudioNext", "playerctl next", "Next"),
            spawn(&[], "XF86AudioPrev", "playerctl previous", "Previous"),
            spawn(&[], "XF86MonBrightnessDown", "xbacklight -dec 10", "Bright down"),
            spawn(&[], "XF86MonBrightnessUp", "xbacklight -inc 10", "Bright up"),
            spawn(&[], "XF86Display", "arandr", "Display"),
            spawn(&[], "XF86Bluetooth", "blueman-applet", "Bluetooth"),
            spawn(
                &[],
                "Print",
                r#"sh -c "import -window root ~/Screenshots/$(date "+%Y%m%d-%H%M%S").jpg""#,
                "Screenshot",
            ),
            spawn(&["control"], "Print", "spectacle", "Spectacle"),
        ];

        let mouse = vec![
            Mousebind::Drag {
                modifier: Some(m.into()),
                button: Button::Button1,
                actions: vec![window(WindowCommand::SetPositionFloating)],
                start: vec![window(WindowCommand::GetPosition)],
            },
            Mousebind::Drag {
                modifier: Some(m.into()),
                button: Button::Button3,
                actions: vec![window(WindowCommand::SetSizeFloating)],
                start: vec![window(WindowCommand::GetSize)],
            },
            Mousebind::Click {
                modifier: Some(m.into()),
                button: Button::Button2,
                actions: vec![window(WindowCommand::BringToFront)],
            },
        ];

        let layouts = vec![
            LayoutDescriptor::Columns(ColumnsLayout {
                border_focus: BorderColor::gradient(&["#ffffff", "#000000"]),
                border_focus_stack: BorderColor::gradient(&["#ffffff", "#000000"]),
                border_normal: BorderColor::gradient(&["#000000", "#000000"]),
                border_normal_stack: BorderColor::gradient(&["#000000", "#000000"]),
                border_on_single: true,
                border_width: 4,
                fair: true,
                grow_amount: 5,
                insert_position: 0,
                margin: CustomMargins::Int(0),
                margin_on_single: Some(CustomMargins::Int(50)),
                num_columns: 3,
                split: true,
                wrap_focus_columns: true,
                wrap_focus_rows: true,
                wrap_focus_stacks: true,
            }),
            LayoutDescriptor::Max,
        ];

        let widget_defaults = WidgetStyle {
            font: Some("manrope bold".to_owned()),
            fontsize: Some(12),
            padding: Some(3),
            foreground: Some(Color::literal("#000000")),
            background: None,
        };

        let mut chords_colors = BTreeMap::new();
        chords_colors.insert(
            "launch".to_owned(),
            (Color::literal("#ff0000"), Color::literal("#ffffff")),
        );

        let widgets = vec![
            Widget::new(WidgetKind::CurrentLayout).with_style(WidgetStyle {
                padding: Some(8),
                ..WidgetStyle::default()
            }),
            Widget::new(WidgetKind::GroupBox(GroupBoxParams {
                rounded: true,
                active: Some(Color::literal("#000000")),
                inactive: Some(Color::literal("#A4A4A4")),
                highlight_method: HighlightMethod::Block,
                this_current_screen_border: Some(Color::literal("#2B7B82")),
            }))
            .with_style(WidgetStyle {
                font: Some("feather bold".to_owned()),
                fontsize: Some(14),
                padding: Some(6),
                ..WidgetStyle::default()
            }),
            Widget::new(WidgetKind::Prompt),
            Widget::new(WidgetKind::WindowName),
            Widget::new(WidgetKind::Chord(ChordParams {
                chords_colors,
                name_transform: NameTransform::Upper,
            })),
            Widget::new(WidgetKind::Systray),
            Widget::new(WidgetKind::Clock(ClockParams {
                format: "%Y-%m-%d %a %I:%M %p".to_owned(),
            })),
            Widget::new(WidgetKind::QuickExit(QuickExitParams {
                default_text: "\u{23fb}".to_owned(),
                countdown_format: "\u{f9b1}".to_owned(),
                ..QuickExitParams::default()
            }))
            .with_style(WidgetStyle {
                font: Some("icomoon-feather".to_owned()),
                fontsize: Some(14),
                padding: Some(10),
                foreground: Some(Color::literal("#E9524A")),
                background: None,
            }),
        ];

        let screens = vec![Screen {
            top: Some(Bar {
                widgets,
                size: 24,
                background: Some(Color::literal("#EEE2C8")),
                margin: CustomMargins::Vec(vec![15, 0, 15, 0]),
                // top and bottom borders only
                border_width: CustomMargins::Vec(vec![2, 0, 2, 0]),
                border_color: vec![Color::literal("000000"); 4],
            }),
            ..Screen::default()
        }];

        let floating_layout = FloatingLayout {
            float_rules: vec![
                FloatRule::class("confirmreset"), // gitk
                FloatRule::class("makebranch"),   // gitk
                FloatRule::class("maketag"),      // gitk
                FloatRule::class("ssh-askpass"),  // ssh-askpass
                FloatRule::title("branchdialog"), // gitk
                FloatRule::title("pinentry"),     // GPG key password entry
            ],
            include_default_rules: true,
            ..FloatingLayout::default()
        };

        Self {
            modkey: "Mod4".to_owned(),
            terminal: TERMINAL.to_owned(),
            keys,
            mouse,
            groups: GROUP_NAMES.iter().map(|name| Group::new(name)).collect(),
            generate_group_keys: true,
            layouts,
            widget_defaults,
            extension_defaults: None,
            screens,
            floating_layout,
            follow_mouse_focus: true,
            bring_front_click: BringFrontClick::Never,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            // Java UI toolkits only work with window managers on their whitelist.
            wmname: "LG3D".to_owned(),
            autostart: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_nine_groups_and_two_layouts() {
        let config = Config::default();
        assert_eq!(config.groups.len(), 9);
        assert_eq!(config.layouts.len(), 2);
        assert_eq!(config.layout_cycle().current().name(), "columns");
    }

    #[test]
    fn default_bar_matches_reference_layout() {
        let config = Config::default();
        let bar = config.screens[0].top.as_ref().unwrap();
        let kinds: Vec<&str> = bar.widgets.iter().map(|w| w.kind.name()).collect();
        assert_eq!(
            kinds,
            vec![
                "CurrentLayout",
                "GroupBox",
                "Prompt",
                "WindowName",
                "Chord",
                "Systray",
                "Clock",
                "QuickExit"
            ]
        );
        let margins = bar.margins().unwrap();
        assert_eq!((margins.top, margins.right), (15, 0));
    }

    #[test]
    fn default_terminal_is_bound_to_modkey_return() {
        let config = Config::default();
        let kb = config
            .keys
            .iter()
            .find(|kb| kb.key == "Return" && kb.modifier == Some(vec![MODKEY.to_owned()].into()))
            .unwrap();
        assert_eq!(kb.actions, vec![Command::Spawn("kitty".to_owned())]);
    }
}
