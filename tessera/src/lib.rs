//! User-facing half of tessera: loading, checking and writing the
//! configuration, and the startup lifecycle built on top of it.
mod config;
pub mod lifecycle;
pub mod utils;

pub use config::*;
pub use lifecycle::{Lifecycle, StartupKind};
