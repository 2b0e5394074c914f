use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TesseraError;

/// A hex color as written in the config file.
///
/// Accepts `rgb`, `rrggbb` and `rrggbbaa`, with or without a leading `#`.
/// The spelling from the file is kept so a written config round-trips unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Build a color from a literal written in source.
    ///
    /// # Panics
    ///
    /// Panics if `hex` is not a well-formed color. Only use with literals.
    #[must_use]
    pub fn literal(hex: &str) -> Self {
        hex.parse().expect("color literals are valid hex; qed")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase `#rrggbb` (or `#rrggbbaa`) form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let digits = self.0.trim_start_matches('#').to_ascii_lowercase();
        if digits.len() == 3 {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            return format!("#{expanded}");
        }
        format!("#{digits}")
    }
}

impl FromStr for Color {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let valid_len = matches!(digits.len(), 3 | 6 | 8);
        if valid_len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s.to_owned()))
        } else {
            Err(TesseraError::InvalidColor(s.to_owned()))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = TesseraError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_prefix_is_optional() {
        assert!("#2B7B82".parse::<Color>().is_ok());
        assert!("000000".parse::<Color>().is_ok());
        assert!("#fff".parse::<Color>().is_ok());
    }

    #[test]
    fn malformed_colors_are_rejected() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("magenta".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn to_hex_normalizes() {
        let c: Color = "ABC".parse().unwrap();
        assert_eq!(c.to_hex(), "#aabbcc");
        let c: Color = "#E9524A".parse().unwrap();
        assert_eq!(c.to_hex(), "#e9524a");
        assert_eq!(c.as_str(), "#E9524A");
    }

    #[test]
    fn invalid_color_fails_deserialization() {
        let res: Result<Vec<Color>, _> = ron::from_str(r##"["#000000", "nope"]"##);
        assert!(res.is_err());
    }
}
