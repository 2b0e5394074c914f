use crate::command::{LayoutCommand, WindowCommand};

/// The command surface of the window manager that loads the configuration.
///
/// Bindings only ever call into a `Host`; tiling, focus, window placement
/// and process spawning are all the implementor's business.
pub trait Host {
    fn layout(&mut self, command: LayoutCommand);

    fn window(&mut self, command: &WindowCommand);

    /// Move to the next (`forward`) or previous layout of the current group.
    fn cycle_layout(&mut self, forward: bool);

    fn spawn(&mut self, cmdline: &str);

    fn group_to_screen(&mut self, group: &str);

    /// Discard the configuration and build it again from disk.
    fn reload_config(&mut self);

    fn shutdown(&mut self);
}

/// A [`Host`] that only writes down what it was asked to do.
///
/// Used for dry runs of a binding and in tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingHost {
    pub calls: Vec<String>,
}

impl Host for RecordingHost {
    fn layout(&mut self, command: LayoutCommand) {
        self.calls.push(format!("layout {command:?}"));
    }

    fn window(&mut self, command: &WindowCommand) {
        self.calls.push(format!("window {command:?}"));
    }

    fn cycle_layout(&mut self, forward: bool) {
        let direction = if forward { "next" } else { "previous" };
        self.calls.push(format!("cycle_layout {direction}"));
    }

    fn spawn(&mut self, cmdline: &str) {
        self.calls.push(format!("spawn {cmdline}"));
    }

    fn group_to_screen(&mut self, group: &str) {
        self.calls.push(format!("group_to_screen {group}"));
    }

    fn reload_config(&mut self) {
        self.calls.push("reload_config".to_owned());
    }

    fn shutdown(&mut self) {
        self.calls.push("shutdown".to_owned());
    }
}
