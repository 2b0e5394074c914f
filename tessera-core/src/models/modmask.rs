use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TesseraError;

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ModMask: u16 {
        const Shift = 1;
        const Control = 1 << 1;
        /// Mod1
        const Alt = 1 << 2;
        /// Mod2
        const NumLock = 1 << 3;
        const Mod3 = 1 << 4;
        /// Mod4
        const Super = 1 << 5;
        const Mod5 = 1 << 6;
    }
}

impl fmt::Display for ModMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        write!(f, "{}", names.join("+"))
    }
}

/// Resolve a single modifier name.
///
/// Returns `None` for names that are not modifiers. `"None"` is a valid
/// name and resolves to the empty mask.
#[must_use]
pub fn into_mod(key: &str) -> Option<ModMask> {
    let mask = match key {
        "None" => ModMask::empty(),
        "Shift" | "shift" => ModMask::Shift,
        "Control" | "control" | "Ctrl" | "ctrl" => ModMask::Control,
        "Mod1" | "mod1" | "Alt" | "alt" => ModMask::Alt,
        "Mod2" | "mod2" | "NumLock" => ModMask::NumLock,
        "Mod3" | "mod3" => ModMask::Mod3,
        "Mod4" | "mod4" | "Super" | "super" => ModMask::Super,
        "Mod5" | "mod5" => ModMask::Mod5,
        _ => return None,
    };
    Some(mask)
}

/// Combine modifier names into a mask, skipping unknown names.
#[must_use]
pub fn into_modmask<S: AsRef<str>>(keys: &[S]) -> ModMask {
    let mut mask = ModMask::empty();
    for s in keys {
        if let Some(m) = into_mod(s.as_ref()) {
            mask |= m;
        }
    }
    // NumLock state is ignored when matching chords
    mask.remove(ModMask::NumLock);
    mask
}

/// Pointer buttons as named by X11.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Button {
    /// Main button (left click for right-handed)
    Button1,
    /// Middle button (pressing the scroll wheel)
    Button2,
    /// Secondary button (right click for right-handed)
    Button3,
    /// Scroll wheel up
    Button4,
    /// Scroll wheel down
    Button5,
}

impl FromStr for Button {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Button1" | "1" => Ok(Self::Button1),
            "Button2" | "2" => Ok(Self::Button2),
            "Button3" | "3" => Ok(Self::Button3),
            "Button4" | "4" => Ok(Self::Button4),
            "Button5" | "5" => Ok(Self::Button5),
            _ => Err(TesseraError::InvalidButton(s.to_owned())),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
