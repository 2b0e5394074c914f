//! Typed configuration model for the tessera tiling window manager and the
//! command surface ([`Host`]) a window manager implements to consume it.
pub mod command;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod host;
pub mod layout_cycle;
pub mod models;

pub use command::{Command, LayoutCommand, WindowCommand};
pub use dispatch::{KeyTable, MouseTable};
pub use errors::{Result, TesseraError};
pub use host::{Host, RecordingHost};
pub use layout_cycle::LayoutCycle;
