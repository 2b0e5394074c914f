use serde::{Deserialize, Serialize};

/// Whether clicking a window raises it.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BringFrontClick {
    #[default]
    Never,
    Always,
    /// Only floating windows are raised.
    FloatingOnly,
}

/// What to do when a client asks for its window to be activated.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FocusOnActivation {
    /// Focus if the window is on the current group, mark urgent otherwise.
    #[default]
    Smart,
    Focus,
    Urgent,
    Never,
}
