mod color;
mod margins;
mod modmask;

pub use color::Color;
pub use margins::{CustomMargins, Margins};
pub use modmask::{into_mod, into_modmask, Button, ModMask};
