use serde::{Deserialize, Serialize};

use super::layout::FloatingStyle;

/// `_NET_WM_WINDOW_TYPE` values float rules can match on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    Normal,
    Dialog,
    Utility,
    Toolbar,
    Splash,
    Notification,
}

/// Window metadata the host hands over when a window is mapped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    /// `WM_CLASS`, instance then class.
    pub wm_class: Vec<String>,
    pub title: Option<String>,
    pub wm_type: Option<WindowType>,
}

/// Selecting by `WM_CLASS`, title and/or window type, force a window to float.
///
/// Every predicate that is set must hold. A rule without predicates never
/// matches.
///
/// # Example
///
/// In `config.ron`
///
/// ```ron
/// float_rules: [
///     (wm_class: "ssh-askpass"),
///     (title: "pinentry"),
/// ]
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FloatRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_type: Option<WindowType>,
}

impl FloatRule {
    #[must_use]
    pub fn class(wm_class: &str) -> Self {
        Self {
            wm_class: Some(wm_class.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn window_type(wm_type: WindowType) -> Self {
        Self {
            wm_type: Some(wm_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wm_class.is_none() && self.title.is_none() && self.wm_type.is_none()
    }

    #[must_use]
    pub fn matches(&self, window: &WindowInfo) -> bool {
        if self.is_empty() {
            return false;
        }
        let class_ok = self
            .wm_class
            .as_ref()
            .map_or(true, |class| window.wm_class.iter().any(|c| c == class));
        let title_ok = self
            .title
            .as_ref()
            .map_or(true, |title| window.title.as_ref() == Some(title));
        let type_ok = self
            .wm_type
            .map_or(true, |wm_type| window.wm_type == Some(wm_type));
        class_ok && title_ok && type_ok
    }
}

/// The rules every configuration starts from when
/// [`FloatingLayout::include_default_rules`] is set.
#[must_use]
pub fn default_float_rules() -> Vec<FloatRule> {
    let types = [
        WindowType::Utility,
        WindowType::Notification,
        WindowType::Toolbar,
        WindowType::Splash,
        WindowType::Dialog,
    ]
    .into_iter()
    .map(FloatRule::window_type);
    let classes = [
        "file_progress",
        "confirm",
        "dialog",
        "download",
        "error",
        "notification",
        "splash",
        "toolbar",
    ]
    .into_iter()
    .map(FloatRule::class);
    types.chain(classes).collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FloatingLayout {
    pub float_rules: Vec<FloatRule>,
    /// Evaluate [`default_float_rules`] before `float_rules`.
    pub include_default_rules: bool,
    pub style: FloatingStyle,
}

impl Default for FloatingLayout {
    fn default() -> Self {
        Self {
            float_rules: Vec::new(),
            include_default_rules: true,
            style: FloatingStyle::default(),
        }
    }
}

impl FloatingLayout {
    /// The first rule matching `window`, defaults first.
    #[must_use]
    pub fn matching_rule(&self, window: &WindowInfo) -> Option<FloatRule> {
        let defaults = if self.include_default_rules {
            default_float_rules()
        } else {
            Vec::new()
        };
        let found = defaults
            .into_iter()
            .chain(self.float_rules.iter().cloned())
            .find(|rule| rule.matches(window));
        if let Some(rule) = &found {
            tracing::trace!(
                "Window [[ TITLE={:?}; WM_CLASS={:?}; TYPE={:?} ]] floats by rule {:?}",
                window.title,
                window.wm_class,
                window.wm_type,
                rule
            );
        }
        found
    }

    #[must_use]
    pub fn should_float(&self, window: &WindowInfo) -> bool {
        self.matching_rule(window).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(class: &[&str], title: Option<&str>) -> WindowInfo {
        WindowInfo {
            wm_class: class.iter().map(|&c| c.to_owned()).collect(),
            title: title.map(str::to_owned),
            wm_type: Some(WindowType::Normal),
        }
    }

    #[test]
    fn class_matches_instance_or_class() {
        let rule = FloatRule::class("ssh-askpass");
        assert!(rule.matches(&window(&["ssh-askpass", "SshAskpass"], None)));
        assert!(!rule.matches(&window(&["kitty", "kitty"], None)));
    }

    #[test]
    fn title_match_is_equality_not_substring() {
        let rule = FloatRule::title("pinentry");
        assert!(rule.matches(&window(&[], Some("pinentry"))));
        assert!(!rule.matches(&window(&[], Some("pinentry-gtk"))));
    }

    #[test]
    fn all_predicates_must_hold() {
        let rule = FloatRule {
            wm_class: Some("gitk".into()),
            title: Some("branchdialog".into()),
            wm_type: None,
        };
        assert!(rule.matches(&window(&["gitk"], Some("branchdialog"))));
        assert!(!rule.matches(&window(&["gitk"], Some("main"))));
    }

    #[test]
    fn empty_rule_matches_nothing() {
        assert!(!FloatRule::default().matches(&window(&["x"], Some("y"))));
    }

    #[test]
    fn first_match_wins_with_defaults_first() {
        let layout = FloatingLayout {
            float_rules: vec![FloatRule::title("confirm")],
            ..FloatingLayout::default()
        };
        let w = window(&["confirm"], Some("confirm"));
        assert_eq!(layout.matching_rule(&w), Some(FloatRule::class("confirm")));
        let dialog = WindowInfo {
            wm_type: Some(WindowType::Dialog),
            ..WindowInfo::default()
        };
        assert!(layout.should_float(&dialog));
    }

    #[test]
    fn defaults_can_be_disabled() {
        let layout = FloatingLayout {
            include_default_rules: false,
            ..FloatingLayout::default()
        };
        let dialog = WindowInfo {
            wm_type: Some(WindowType::Dialog),
            ..WindowInfo::default()
        };
        assert!(!layout.should_float(&dialog));
        assert!(!layout.should_float(&window(&["kitty"], None)));
    }
}
