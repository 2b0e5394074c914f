use std::collections::HashSet;
use std::fmt;
use std::os::unix::fs::PermissionsExt;

use lefthk_core::xkeysym_lookup;
use tessera_core::{
    config::{LayoutDescriptor, WidgetKind, MAX_ORDINAL_GROUPS},
    models::into_mod,
    KeyTable, MouseTable,
};
use tracing_subscriber::EnvFilter;

use super::Config;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// One problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "\x1b[1;91mERROR: {}\x1b[0m", self.message),
            Severity::Warning => write!(f, "\x1b[1;93mWARNING: {}\x1b[0m", self.message),
        }
    }
}

fn invalid_modifiers<'a>(names: impl IntoIterator<Item = &'a String>) -> Vec<&'a String> {
    names
        .into_iter()
        .filter(|name| into_mod(name).is_none())
        .collect()
}

impl Config {
    /// Every check, in the order `tessera-check` reports them.
    #[must_use]
    pub fn check_all(&self) -> Vec<(&'static str, Vec<Finding>)> {
        vec![
            ("groups", self.check_groups()),
            ("keybinds", self.check_keybinds()),
            ("mousebinds", self.check_mousebinds()),
            ("layouts", self.check_layouts()),
            ("widgets", self.check_widgets()),
            ("float rules", self.check_float_rules()),
            ("log level", self.check_log_level()),
            ("autostart", self.check_autostart()),
        ]
    }

    #[must_use]
    pub fn check_groups(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        if self.groups.is_empty() {
            findings.push(Finding::warning("No groups are configured"));
        }
        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.name.is_empty() {
                findings.push(Finding::error("A group has an empty name"));
            } else if !seen.insert(group.name.as_str()) {
                findings.push(Finding::error(format!(
                    "Group name {:?} is used more than once",
                    group.name
                )));
            }
        }
        if self.generate_group_keys && self.groups.len() > MAX_ORDINAL_GROUPS {
            let unbound: Vec<&str> = self.groups[MAX_ORDINAL_GROUPS..]
                .iter()
                .map(|g| g.name.as_str())
                .collect();
            findings.push(Finding::warning(format!(
                "Only the first {MAX_ORDINAL_GROUPS} groups get number keys, {unbound:?} have none"
            )));
        }
        findings
    }

    /// Keysyms, modifiers, actions and group references of every key
    /// binding, generated ones included, plus chords bound twice.
    #[must_use]
    pub fn check_keybinds(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        let keybinds = self.mapped_keybinds();
        for keybind in &keybinds {
            let chord = match &keybind.modifier {
                Some(modifier) => format!("{modifier} + {}", keybind.key),
                None => keybind.key.clone(),
            };
            if xkeysym_lookup::into_keysym(&keybind.key).is_none() {
                findings.push(Finding::error(format!(
                    "Key `{}` is not valid for keybind {chord}",
                    keybind.key
                )));
            }
            if let Some(modifier) = &keybind.modifier {
                let names: Vec<String> = modifier.into_iter().collect();
                for name in invalid_modifiers(&names) {
                    findings.push(Finding::error(format!(
                        "Modifier `{name}` is not valid for keybind {chord}"
                    )));
                }
            }
            if keybind.actions.is_empty() {
                findings.push(Finding::error(format!("Keybind {chord} has no actions")));
            }
            for action in &keybind.actions {
                if let Err(err) = action.validate() {
                    findings.push(Finding::error(format!("{err} for keybind {chord}")));
                }
                if let Some(group) = action.group() {
                    if !group.is_empty() && !self.groups.iter().any(|g| g.name == group) {
                        findings.push(Finding::error(format!(
                            "Keybind {chord} refers to unknown group {group:?}"
                        )));
                    }
                }
            }
        }
        let table = KeyTable::new(keybinds);
        for (mask, key) in table.shadowed() {
            findings.push(Finding::error(format!(
                "Multiple commands bound to key combination {mask} + {key}, only the last one is used"
            )));
        }
        findings
    }

    #[must_use]
    pub fn check_mousebinds(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mousebinds = self.mapped_mousebinds();
        for mousebind in &mousebinds {
            if let Some(modifier) = mousebind.modifier() {
                let names: Vec<String> = modifier.into_iter().collect();
                for name in invalid_modifiers(&names) {
                    findings.push(Finding::error(format!(
                        "Modifier `{name}` is not valid for mouse binding on {}",
                        mousebind.button()
                    )));
                }
            }
            if mousebind.actions().is_empty() {
                findings.push(Finding::error(format!(
                    "Mouse binding on {} has no actions",
                    mousebind.button()
                )));
            }
        }
        let table = MouseTable::new(mousebinds);
        for (mask, button) in table.shadowed() {
            findings.push(Finding::error(format!(
                "Multiple commands bound to mouse combination {mask} + {button}, only the last one is used"
            )));
        }
        findings
    }

    #[must_use]
    pub fn check_layouts(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        if self.layouts.is_empty() {
            findings.push(Finding::warning(
                "No layouts are configured, a single max layout will be used",
            ));
        }
        for layout in &self.layouts {
            match layout {
                LayoutDescriptor::Columns(columns) if columns.num_columns == 0 => {
                    findings.push(Finding::error("Columns layout needs at least one column"));
                }
                LayoutDescriptor::Stack(stack) if stack.num_stacks == 0 => {
                    findings.push(Finding::error("Stack layout needs at least one stack"));
                }
                LayoutDescriptor::MonadTall(monad) | LayoutDescriptor::MonadWide(monad)
                    if !(monad.ratio > 0.0 && monad.ratio < 1.0) =>
                {
                    findings.push(Finding::error(format!(
                        "{} ratio {} must lie between 0 and 1",
                        layout.name(),
                        monad.ratio
                    )));
                }
                LayoutDescriptor::Bsp(bsp) if bsp.ratio <= 0.0 => {
                    findings.push(Finding::error(format!(
                        "bsp ratio {} must be positive",
                        bsp.ratio
                    )));
                }
                _ => {}
            }
        }
        findings
    }

    #[must_use]
    pub fn check_widgets(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut systrays = 0;
        for (index, screen) in self.screens.iter().enumerate() {
            for bar in screen.bars() {
                if bar.size == 0 {
                    findings.push(Finding::error(format!(
                        "A bar on screen {index} has size 0"
                    )));
                }
                if !matches!(bar.border_color.len(), 1 | 4) {
                    findings.push(Finding::error(format!(
                        "A bar on screen {index} has {} border colors, expected 1 or 4",
                        bar.border_color.len()
                    )));
                }
                if let Err(err) = bar.margins() {
                    findings.push(Finding::error(format!("Bar margin: {err}")));
                }
                if let Err(err) = bar.border_widths() {
                    findings.push(Finding::error(format!("Bar border width: {err}")));
                }
            }
            for widget in screen.widgets() {
                match &widget.kind {
                    WidgetKind::Clock(clock) if !clock.is_valid_format() => {
                        findings.push(Finding::error(format!(
                            "Clock format {:?} is not a valid strftime string",
                            clock.format
                        )));
                    }
                    WidgetKind::Systray => systrays += 1,
                    _ => {}
                }
            }
        }
        if systrays > 1 {
            findings.push(Finding::error(format!(
                "Only one systray can exist, {systrays} are configured"
            )));
        }
        findings
    }

    #[must_use]
    pub fn check_float_rules(&self) -> Vec<Finding> {
        self.floating_layout
            .float_rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.is_empty())
            .map(|(i, _)| Finding::warning(format!("Float rule #{i} has no predicate and never matches")))
            .collect()
    }

    #[must_use]
    pub fn check_log_level(&self) -> Vec<Finding> {
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => Vec::new(),
            Err(err) => vec![Finding::error(format!(
                "Log level {:?} is invalid: {err}",
                self.log_level
            ))],
        }
    }

    #[must_use]
    pub fn check_autostart(&self) -> Vec<Finding> {
        let path = match self.autostart_path() {
            Ok(path) => path,
            Err(err) => return vec![Finding::warning(format!("No autostart path: {err}"))],
        };
        match path.metadata() {
            Err(_) => vec![Finding::warning(format!(
                "Autostart script {} does not exist",
                path.display()
            ))],
            Ok(meta) if meta.permissions().mode() & 0o111 == 0 => {
                vec![Finding::warning(format!(
                    "Autostart script {} is not executable",
                    path.display()
                ))]
            }
            Ok(_) => Vec::new(),
        }
    }
}
