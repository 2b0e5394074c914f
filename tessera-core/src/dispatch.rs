//! Lookup tables from input chords to binding actions.
//!
//! Both tables are built once from the mapped configuration. When two
//! bindings share a chord the later one wins and the earlier is recorded
//! as shadowed.
use std::collections::HashMap;

use crate::config::{Keybind, Mousebind};
use crate::host::Host;
use crate::models::{Button, ModMask};

#[derive(Debug, Default, Clone)]
pub struct KeyTable {
    bindings: HashMap<(ModMask, String), Keybind>,
    shadowed: Vec<(ModMask, String)>,
}

impl KeyTable {
    /// Build the table; bindings must already have `modkey` substituted.
    pub fn new(keybinds: impl IntoIterator<Item = Keybind>) -> Self {
        let mut table = Self::default();
        for keybind in keybinds {
            let chord = (keybind.modmask(), keybind.key.clone());
            if let Some(old) = table.bindings.insert(chord.clone(), keybind) {
                tracing::warn!(
                    "Key binding {} + {} shadows {:?}",
                    chord.0,
                    chord.1,
                    old.actions
                );
                table.shadowed.push(chord);
            }
        }
        table
    }

    #[must_use]
    pub fn lookup(&self, mask: ModMask, key: &str) -> Option<&Keybind> {
        let mask = mask.difference(ModMask::NumLock);
        self.bindings.get(&(mask, key.to_owned()))
    }

    /// Run every action bound to the chord, in order.
    ///
    /// Returns `false` if nothing is bound.
    pub fn dispatch<H: Host>(&self, mask: ModMask, key: &str, host: &mut H) -> bool {
        let Some(keybind) = self.lookup(mask, key) else {
            tracing::trace!("No key binding for {} + {}", mask, key);
            return false;
        };
        for action in &keybind.actions {
            action.execute(host);
        }
        true
    }

    /// Chords that were bound more than once.
    #[must_use]
    pub fn shadowed(&self) -> &[(ModMask, String)] {
        &self.shadowed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings sorted by chord, for listing.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Keybind> {
        let mut all: Vec<_> = self.bindings.iter().collect();
        all.sort_by(|(a, _), (b, _)| a.cmp(b));
        all.into_iter().map(|(_, kb)| kb).collect()
    }
}

#[derive(Debug, Default, Clone)]
pub struct MouseTable {
    bindings: HashMap<(ModMask, Button), Mousebind>,
    shadowed: Vec<(ModMask, Button)>,
}

impl MouseTable {
    /// Build the table; bindings must already have `modkey` substituted.
    pub fn new(mousebinds: impl IntoIterator<Item = Mousebind>) -> Self {
        let mut table = Self::default();
        for mousebind in mousebinds {
            let chord = (mousebind.modmask(), mousebind.button());
            if table.bindings.insert(chord, mousebind).is_some() {
                tracing::warn!("Mouse binding {} + {} shadows an earlier one", chord.0, chord.1);
                table.shadowed.push(chord);
            }
        }
        table
    }

    #[must_use]
    pub fn lookup(&self, mask: ModMask, button: Button) -> Option<&Mousebind> {
        self.bindings
            .get(&(mask.difference(ModMask::NumLock), button))
    }

    /// Button went down: a drag runs its `start` actions, a click its actions.
    pub fn press<H: Host>(&self, mask: ModMask, button: Button, host: &mut H) -> bool {
        let Some(mousebind) = self.lookup(mask, button) else {
            return false;
        };
        for action in mousebind.press_actions() {
            action.execute(host);
        }
        true
    }

    /// Pointer moved with the button held: only drags react.
    pub fn motion<H: Host>(&self, mask: ModMask, button: Button, host: &mut H) -> bool {
        match self.lookup(mask, button) {
            Some(drag @ Mousebind::Drag { .. }) => {
                for action in drag.actions() {
                    action.execute(host);
                }
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn shadowed(&self) -> &[(ModMask, Button)] {
        &self.shadowed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, LayoutCommand, WindowCommand};
    use crate::host::RecordingHost;

    fn keybind(mods: &[&str], key: &str, action: Command) -> Keybind {
        Keybind::new(mods, key, action)
    }

    #[test]
    fn dispatch_runs_actions_in_order() {
        let mut kb = keybind(&["Mod4"], "Return", Command::Spawn("kitty".into()));
        kb.actions.push(Command::Layout(LayoutCommand::Normalize));
        let table = KeyTable::new([kb]);
        let mut host = RecordingHost::default();
        assert!(table.dispatch(ModMask::Super, "Return", &mut host));
        assert_eq!(host.calls, vec!["spawn kitty", "layout Normalize"]);
    }

    #[test]
    fn unbound_chord_does_nothing() {
        let table = KeyTable::new([keybind(&["Mod4"], "j", Command::Layout(LayoutCommand::Left))]);
        let mut host = RecordingHost::default();
        assert!(!table.dispatch(ModMask::Super | ModMask::Shift, "j", &mut host));
        assert!(!table.dispatch(ModMask::empty(), "j", &mut host));
        assert!(host.calls.is_empty());
    }

    #[test]
    fn later_binding_shadows_earlier() {
        let table = KeyTable::new([
            keybind(&["mod4"], "r", Command::Spawn("dmenu_run".into())),
            keybind(&["Super"], "r", Command::Spawn("rofi -show".into())),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.shadowed(), &[(ModMask::Super, "r".to_owned())]);
        let mut host = RecordingHost::default();
        table.dispatch(ModMask::Super, "r", &mut host);
        assert_eq!(host.calls, vec!["spawn rofi -show"]);
    }

    #[test]
    fn numlock_does_not_affect_lookup() {
        let table = KeyTable::new([keybind(&["Mod4"], "w", Command::Window(WindowCommand::Kill))]);
        assert!(table.lookup(ModMask::Super | ModMask::NumLock, "w").is_some());
    }

    #[test]
    fn drag_press_then_motion() {
        let table = MouseTable::new([
            Mousebind::Drag {
                modifier: Some("Mod4".into()),
                button: Button::Button3,
                actions: vec![Command::Window(WindowCommand::SetSizeFloating)],
                start: vec![Command::Window(WindowCommand::GetSize)],
            },
            Mousebind::Click {
                modifier: Some("Mod4".into()),
                button: Button::Button2,
                actions: vec![Command::Window(WindowCommand::BringToFront)],
            },
        ]);
        let mut host = RecordingHost::default();
        assert!(table.press(ModMask::Super, Button::Button3, &mut host));
        assert!(table.motion(ModMask::Super, Button::Button3, &mut host));
        assert!(table.press(ModMask::Super, Button::Button2, &mut host));
        assert!(!table.motion(ModMask::Super, Button::Button2, &mut host));
        assert_eq!(
            host.calls,
            vec!["window GetSize", "window SetSizeFloating", "window BringToFront"]
        );
    }

    #[test]
    fn duplicate_mouse_chords_are_recorded() {
        let click = Mousebind::Click {
            modifier: None,
            button: Button::Button1,
            actions: vec![Command::Window(WindowCommand::BringToFront)],
        };
        let table = MouseTable::new([click.clone(), click]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.shadowed(), &[(ModMask::empty(), Button::Button1)]);
    }
}
