use thiserror::Error;

/// Errors that can occur when loading editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// IO error when reading a config file.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  /// Failed to parse config JSON.
  #[error("invalid config json: {0}")]
  Parse(#[from] serde_json::Error),

  /// A color is not a `#rgb` or `#rrggbb` hex string.
  #[error("invalid color: {0:?}")]
  InvalidColor(String),

  /// A value parsed but is out of range.
  #[error("invalid config: {0}")]
  Invalid(String),
}
