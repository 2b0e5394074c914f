use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::models::{into_modmask, ModMask};

/// Placeholder modifier replaced by the configured mod key.
pub const MODKEY: &str = "modkey";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub modifier: Option<Modifier>,
    pub key: String,
    pub actions: Vec<Command>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl Keybind {
    #[must_use]
    pub fn new(modifiers: &[&str], key: &str, action: Command) -> Self {
        let modifier = if modifiers.is_empty() {
            None
        } else {
            Some(Modifier::List(
                modifiers.iter().map(|&m| m.to_owned()).collect(),
            ))
        };
        Self {
            modifier,
            key: key.to_owned(),
            actions: vec![action],
            desc: None,
        }
    }

    #[must_use]
    pub fn desc(mut self, desc: &str) -> Self {
        self.desc = Some(desc.to_owned());
        self
    }

    /// Replace every `modkey` placeholder with `modkey`.
    pub fn substitute_modkey(&mut self, modkey: &str) {
        if let Some(ref mut modifier) = self.modifier {
            modifier.substitute(MODKEY, modkey);
        }
    }

    #[must_use]
    pub fn modmask(&self) -> ModMask {
        self.modifier
            .as_ref()
            .map_or_else(ModMask::empty, Modifier::modmask)
    }
}

/// One modifier name or a list of them.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(single) => single.is_empty(),
            Self::List(list) => list.is_empty(),
        }
    }

    pub fn substitute(&mut self, placeholder: &str, with: &str) {
        match self {
            Self::Single(m) if m == placeholder => *m = with.to_owned(),
            Self::List(ms) => {
                for m in ms.iter_mut().filter(|m| *m == placeholder) {
                    *m = with.to_owned();
                }
            }
            Self::Single(_) => {}
        }
    }

    #[must_use]
    pub fn modmask(&self) -> ModMask {
        match self {
            Self::Single(m) => into_modmask(std::slice::from_ref(m)),
            Self::List(ms) => into_modmask(ms),
        }
    }
}

impl From<Modifier> for Vec<String> {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier],
            Modifier::List(modifiers) => modifiers,
        }
    }
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self.clone()).into_iter()
    }
}

impl From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}
