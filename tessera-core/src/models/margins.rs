use serde::{Deserialize, Serialize};

use crate::errors::TesseraError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }

    #[must_use]
    pub const fn new_from_pair(top_and_bottom: u32, left_and_right: u32) -> Self {
        Self {
            top: top_and_bottom,
            right: left_and_right,
            bottom: top_and_bottom,
            left: left_and_right,
        }
    }

    #[must_use]
    pub const fn new_from_triple(top: u32, left_and_right: u32, bottom: u32) -> Self {
        Self {
            top,
            right: left_and_right,
            bottom,
            left: left_and_right,
        }
    }
}

/// Margin or border sizes as written in the config: one value for all
/// sides, or a list in `[top, right, bottom, left]` order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum CustomMargins {
    Int(u32),
    // format: [top, right, bottom, left] as per HTML
    Vec(Vec<u32>),
}

impl Default for CustomMargins {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl TryFrom<CustomMargins> for Margins {
    type Error = TesseraError;

    fn try_from(c: CustomMargins) -> Result<Self, Self::Error> {
        Self::try_from(&c)
    }
}

impl TryFrom<&CustomMargins> for Margins {
    type Error = TesseraError;

    fn try_from(c: &CustomMargins) -> Result<Self, Self::Error> {
        match c {
            CustomMargins::Int(size) => Ok(Self::new(*size)),
            CustomMargins::Vec(vec) => match vec.as_slice() {
                [all] => Ok(Self::new(*all)),
                [vertical, horizontal] => Ok(Self::new_from_pair(*vertical, *horizontal)),
                [top, horizontal, bottom] => Ok(Self::new_from_triple(*top, *horizontal, *bottom)),
                [top, right, bottom, left] => Ok(Self {
                    top: *top,
                    right: *right,
                    bottom: *bottom,
                    left: *left,
                }),
                [] => Err(TesseraError::InvalidMargin("Empty margin or border array")),
                _ => Err(TesseraError::InvalidMargin(
                    "Too many entries in margin or border array",
                )),
            },
        }
    }
}
