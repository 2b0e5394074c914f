//! Tessera general configuration

mod checks;
mod default;

pub use checks::{Finding, Severity};

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tessera_core::{
    config::{
        generate_group_keybinds, BringFrontClick, FloatingLayout, FocusOnActivation, Group,
        Keybind, LayoutDescriptor, Modifier, Mousebind, Screen, WidgetStyle, MODKEY,
    },
    models::ModMask,
    KeyTable, LayoutCycle, MouseTable,
};
use xdg::BaseDirectories;

use crate::utils::file_handler::load_config_file;

/// File name of the startup script looked up in the config directory.
pub const AUTOSTART_SCRIPT: &str = "autostart.sh";

/// General configuration
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Modifier substituted for `modkey` in bindings.
    pub modkey: String,
    pub terminal: String,
    pub keys: Vec<Keybind>,
    pub mouse: Vec<Mousebind>,
    pub groups: Vec<Group>,
    /// Bind `modkey + N` and `modkey + Shift + N` for the first nine groups.
    pub generate_group_keys: bool,
    pub layouts: Vec<LayoutDescriptor>,
    pub widget_defaults: WidgetStyle,
    /// Style for launcher extensions, a copy of `widget_defaults` when unset.
    pub extension_defaults: Option<WidgetStyle>,
    pub screens: Vec<Screen>,
    pub floating_layout: FloatingLayout,
    pub follow_mouse_focus: bool,
    pub bring_front_click: BringFrontClick,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    /// Let windows minimize themselves when they lose focus.
    pub auto_minimize: bool,
    /// Name reported to clients as the window manager's name.
    pub wmname: String,
    /// Script run once after startup. Defaults to `autostart.sh` in the config directory.
    pub autostart: Option<String>,
    pub log_level: String,
}

/// Load the user's config, falling back to the default on any error.
#[must_use]
pub fn load() -> Config {
    load_config_file(None)
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    if let Ok(path) = env::var("PATH") {
        for p in path.split(':') {
            let p_str = format!("{p}/{program}");
            if fs::metadata(p_str).is_ok() {
                return true;
            }
        }
    }
    false
}

impl Config {
    /// Key bindings with `modkey` substituted, followed by the generated
    /// group bindings.
    #[must_use]
    pub fn mapped_keybinds(&self) -> Vec<Keybind> {
        let generated = if self.generate_group_keys {
            generate_group_keybinds(&self.groups)
        } else {
            Vec::new()
        };
        self.keys
            .iter()
            .cloned()
            .chain(generated)
            .map(|mut keybind| {
                keybind.substitute_modkey(&self.modkey);
                keybind
            })
            .collect()
    }

    #[must_use]
    pub fn mapped_mousebinds(&self) -> Vec<Mousebind> {
        self.mouse
            .iter()
            .cloned()
            .map(|mut mousebind| {
                mousebind.substitute_modkey(&self.modkey);
                mousebind
            })
            .collect()
    }

    #[must_use]
    pub fn key_table(&self) -> KeyTable {
        KeyTable::new(self.mapped_keybinds())
    }

    #[must_use]
    pub fn mouse_table(&self) -> MouseTable {
        MouseTable::new(self.mapped_mousebinds())
    }

    /// Split a chord such as `modkey+shift+Return` into the mask and key it
    /// is looked up by, substituting `modkey` like the bindings do.
    #[must_use]
    pub fn parse_chord(&self, chord: &str) -> (ModMask, String) {
        let mut parts: Vec<String> = chord.split('+').map(str::to_owned).collect();
        let key = parts.pop().unwrap_or_default();
        let mut modifier = Modifier::List(parts);
        modifier.substitute(MODKEY, &self.modkey);
        (modifier.modmask(), key)
    }

    #[must_use]
    pub fn layout_cycle(&self) -> LayoutCycle {
        LayoutCycle::new(self.layouts.clone())
    }

    #[must_use]
    pub fn extension_defaults(&self) -> WidgetStyle {
        self.extension_defaults
            .clone()
            .unwrap_or_else(|| self.widget_defaults.clone())
    }

    /// Where the startup script lives.
    ///
    /// # Errors
    ///
    /// Errors if no path is configured and the XDG base directories cannot
    /// be resolved.
    pub fn autostart_path(&self) -> anyhow::Result<PathBuf> {
        match &self.autostart {
            Some(path) => Ok(PathBuf::from(shellexpand::tilde(path).as_ref())),
            None => Ok(BaseDirectories::with_prefix("tessera")?.get_config_file(AUTOSTART_SCRIPT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ron::extensions::Extensions;
    use tessera_core::RecordingHost;

    #[test]
    fn config_serializes_to_valid_ron_test() {
        let config = Config::default();

        // Check RON
        let ron_pretty_conf = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .extensions(Extensions::IMPLICIT_SOME | Extensions::UNWRAP_NEWTYPES);
        let ron = ron::ser::to_string_pretty(&config, ron_pretty_conf);
        assert!(ron.is_ok(), "Could not serialize default config");

        let ron_config = ron::from_str::<'_, Config>(ron.unwrap().as_str());
        assert!(ron_config.is_ok(), "Could not deserialize default config");
        assert_eq!(ron_config.unwrap(), config);
    }

    #[test]
    fn missing_names_fall_back_to_defaults() {
        let config: Config = ron::from_str(r#"(modkey: "Mod1", wmname: "tessera")"#).unwrap();
        let default = Config::default();
        assert_eq!(config.modkey, "Mod1");
        assert_eq!(config.wmname, "tessera");
        assert_eq!(config.keys, default.keys);
        assert_eq!(config.groups, default.groups);
        assert_eq!(config.floating_layout, default.floating_layout);
    }

    #[test]
    fn toml_config_is_accepted() {
        let config: Config = toml::from_str(
            r#"
modkey = "Mod1"
follow_mouse_focus = false
bring_front_click = "FloatingOnly"

[[groups]]
name = "web"

[[groups]]
name = "code"
label = "dev"
"#,
        )
        .unwrap();
        assert!(!config.follow_mouse_focus);
        assert_eq!(config.bring_front_click, BringFrontClick::FloatingOnly);
        assert_eq!(config.groups.len(), 2);
        assert_eq!(config.groups[1].label(), "dev");
    }

    #[test]
    fn mapped_keybinds_substitute_modkey_and_append_group_keys() {
        let config = Config {
            modkey: "Mod1".to_owned(),
            ..Config::default()
        };
        let mapped = config.mapped_keybinds();
        assert_eq!(mapped.len(), config.keys.len() + 2 * config.groups.len());
        assert!(mapped.iter().all(|kb| kb
            .modifier
            .as_ref()
            .map_or(true, |m| !m.into_iter().any(|name| name == "modkey"))));
        let table = config.key_table();
        let mut host = RecordingHost::default();
        assert!(table.dispatch(ModMask::Alt, "Return", &mut host));
        assert_eq!(host.calls, vec!["spawn kitty"]);
    }

    #[test]
    fn chord_modkey_is_substituted() {
        let config = Config::default();
        assert_eq!(
            config.parse_chord("modkey+Return"),
            (ModMask::Super, "Return".to_owned())
        );
        assert_eq!(
            config.parse_chord("modkey+shift+Return"),
            (ModMask::Super | ModMask::Shift, "Return".to_owned())
        );
        assert_eq!(config.parse_chord("Print"), (ModMask::empty(), "Print".to_owned()));

        let table = config.key_table();
        let (mask, key) = config.parse_chord("modkey+Return");
        let mut host = RecordingHost::default();
        assert!(table.dispatch(mask, &key, &mut host));
        assert_eq!(host.calls, vec!["spawn kitty"]);
    }

    #[test]
    fn group_keys_can_be_disabled() {
        let config = Config {
            generate_group_keys: false,
            ..Config::default()
        };
        assert_eq!(config.mapped_keybinds().len(), config.keys.len());
    }

    #[test]
    fn extension_defaults_copy_widget_defaults() {
        let config = Config::default();
        assert_eq!(config.extension_defaults(), config.widget_defaults);
    }

    #[test]
    fn explicit_autostart_path_is_tilde_expanded() {
        let config = Config {
            autostart: Some("~/bin/start.sh".to_owned()),
            ..Config::default()
        };
        let path = config.autostart_path().unwrap();
        assert!(path.ends_with("bin/start.sh"));
        assert!(!path.starts_with("~"));
    }
}
