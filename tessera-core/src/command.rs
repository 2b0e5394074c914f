use serde::{Deserialize, Serialize};

use crate::errors::{Result, TesseraError};
use crate::host::Host;

/// Commands addressed to the active layout.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutCommand {
    Left,
    Right,
    Up,
    Down,
    Next,
    Previous,
    ShuffleLeft,
    ShuffleRight,
    ShuffleUp,
    ShuffleDown,
    GrowLeft,
    GrowRight,
    GrowUp,
    GrowDown,
    Normalize,
    SwapColumnLeft,
    SwapColumnRight,
    ToggleSplit,
}

/// Commands addressed to the focused window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WindowCommand {
    Kill,
    ToggleFloating,
    ToggleFullscreen,
    /// Send the window to the named group.
    ToGroup(String),
    SetPositionFloating,
    SetSizeFloating,
    GetPosition,
    GetSize,
    BringToFront,
}

/// An action a binding can trigger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Layout(LayoutCommand),
    Window(WindowCommand),
    NextLayout,
    PreviousLayout,
    /// Run a command line.
    Spawn(String),
    /// Show the named group on the current screen.
    ToScreen(String),
    ReloadConfig,
    Shutdown,
}

impl Command {
    /// Route the command to the matching [`Host`] entry point.
    pub fn execute<H: Host>(&self, host: &mut H) {
        tracing::trace!("Executing {:?}", self);
        match self {
            Self::Layout(cmd) => host.layout(*cmd),
            Self::Window(cmd) => host.window(cmd),
            Self::NextLayout => host.cycle_layout(true),
            Self::PreviousLayout => host.cycle_layout(false),
            Self::Spawn(cmdline) => host.spawn(cmdline),
            Self::ToScreen(group) => host.group_to_screen(group),
            Self::ReloadConfig => host.reload_config(),
            Self::Shutdown => host.shutdown(),
        }
    }

    /// The group a command refers to, if any.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        match self {
            Self::ToScreen(group) | Self::Window(WindowCommand::ToGroup(group)) => Some(group),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// Errors when a command carries an empty command line or group name.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Spawn(cmdline) if cmdline.trim().is_empty() => Err(
                TesseraError::InvalidCommand("Spawn needs a command line".to_owned()),
            ),
            _ if self.group().is_some_and(str::is_empty) => Err(TesseraError::InvalidCommand(
                format!("{self:?} needs a group name"),
            )),
            _ => Ok(()),
        }
    }
}
