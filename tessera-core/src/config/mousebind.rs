use serde::{Deserialize, Serialize};

use super::keybind::{Modifier, MODKEY};
use crate::command::Command;
use crate::models::{Button, ModMask};

/// A pointer binding.
///
/// A `Drag` runs `start` once when the button goes down and `actions` on
/// every motion while it is held. A `Click` runs `actions` on press.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Mousebind {
    Drag {
        modifier: Option<Modifier>,
        button: Button,
        actions: Vec<Command>,
        #[serde(default)]
        start: Vec<Command>,
    },
    Click {
        modifier: Option<Modifier>,
        button: Button,
        actions: Vec<Command>,
    },
}

impl Mousebind {
    #[must_use]
    pub fn modifier(&self) -> Option<&Modifier> {
        match self {
            Self::Drag { modifier, .. } | Self::Click { modifier, .. } => modifier.as_ref(),
        }
    }

    #[must_use]
    pub const fn button(&self) -> Button {
        match self {
            Self::Drag { button, .. } | Self::Click { button, .. } => *button,
        }
    }

    #[must_use]
    pub fn actions(&self) -> &[Command] {
        match self {
            Self::Drag { actions, .. } | Self::Click { actions, .. } => actions,
        }
    }

    /// Commands to run when the button goes down.
    #[must_use]
    pub fn press_actions(&self) -> &[Command] {
        match self {
            Self::Drag { start, .. } => start,
            Self::Click { actions, .. } => actions,
        }
    }

    pub fn substitute_modkey(&mut self, modkey: &str) {
        match self {
            Self::Drag {
                modifier: Some(m), ..
            }
            | Self::Click {
                modifier: Some(m), ..
            } => m.substitute(MODKEY, modkey),
            _ => {}
        }
    }

    #[must_use]
    pub fn modmask(&self) -> ModMask {
        self.modifier()
            .map_or_else(ModMask::empty, Modifier::modmask)
    }
}
