use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Palette used for new nodes when no color is given.
pub const DEFAULT_PALETTE: [&str; 6] = [
  "#22c55e", "#3b82f6", "#f59e0b", "#8b5cf6", "#ef4444", "#06b6d4",
];

/// A display color as a lowercase `#rrggbb` hex string.
///
/// Colors only affect rendering. Short `#rgb` input is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub(crate) String);

impl Color {
  pub fn parse(value: &str) -> Result<Self, ConfigError> {
    let invalid = || ConfigError::InvalidColor(value.to_string());

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(invalid());
    }

    let normalized = match hex.len() {
      6 => hex.to_ascii_lowercase(),
      3 => hex
        .chars()
        .flat_map(|c| [c, c])
        .collect::<String>()
        .to_ascii_lowercase(),
      _ => return Err(invalid()),
    };

    Ok(Self(format!("#{normalized}")))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

/// The default palette as parsed colors.
pub fn default_palette() -> Vec<Color> {
  DEFAULT_PALETTE
    .iter()
    .map(|hex| Color(hex.to_string()))
    .collect()
}

impl FromStr for Color {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl TryFrom<String> for Color {
  type Error = ConfigError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::parse(&value)
  }
}

impl From<Color> for String {
  fn from(color: Color) -> Self {
    color.0
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
