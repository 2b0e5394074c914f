use serde::{Deserialize, Serialize};

use super::keybind::{Keybind, MODKEY};
use crate::command::{Command, WindowCommand};

/// Groups past this index get no generated number key.
pub const MAX_ORDINAL_GROUPS: usize = 9;

/// A named virtual desktop.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    /// Text shown in the group box, defaults to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Group {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            label: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// The number key of the group at `index` (0-based), `1` through `9`.
#[must_use]
pub fn ordinal_key(index: usize) -> Option<String> {
    (index < MAX_ORDINAL_GROUPS).then(|| (index + 1).to_string())
}

/// For every group with an ordinal key: `modkey + N` shows the group,
/// `modkey + Shift + N` sends the focused window there.
#[must_use]
pub fn generate_group_keybinds(groups: &[Group]) -> Vec<Keybind> {
    groups
        .iter()
        .enumerate()
        .filter_map(|(i, group)| ordinal_key(i).map(|key| (key, group)))
        .flat_map(|(key, group)| {
            [
                Keybind::new(&[MODKEY], &key, Command::ToScreen(group.name.clone()))
                    .desc(&format!("Switch to group {}", group.label())),
                Keybind::new(
                    &[MODKEY, "shift"],
                    &key,
                    Command::Window(WindowCommand::ToGroup(group.name.clone())),
                )
                .desc(&format!("Send window to group {}", group.label())),
            ]
        })
        .collect()
}
