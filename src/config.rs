//! Runtime configuration.
//!
//! Defaults match what the Wokwi editor expects. Each field can be overridden
//! from the process environment:
//!
//! | Variable              | Field                |
//! |-----------------------|----------------------|
//! | `WOKWI_AUTHOR`        | `author`             |
//! | `WOKWI_EDITOR`        | `editor`             |
//! | `WOKWI_WIRE_COLOR`    | `default_wire_color` |
//! | `WOKWI_DIAGRAM_PATH`  | `diagram_path`       |

use crate::component::DEFAULT_WIRE_COLOR;
use crate::diagram::{DEFAULT_AUTHOR, DEFAULT_EDITOR, DIAGRAM_VERSION, Metadata};
use std::path::PathBuf;

/// Environment variable overriding [`CircuitConfig::author`].
pub const ENV_AUTHOR: &str = "WOKWI_AUTHOR";
/// Environment variable overriding [`CircuitConfig::editor`].
pub const ENV_EDITOR: &str = "WOKWI_EDITOR";
/// Environment variable overriding [`CircuitConfig::default_wire_color`].
pub const ENV_WIRE_COLOR: &str = "WOKWI_WIRE_COLOR";
/// Environment variable overriding [`CircuitConfig::diagram_path`].
pub const ENV_DIAGRAM_PATH: &str = "WOKWI_DIAGRAM_PATH";

/// Settings for diagram output and tool defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitConfig {
  /// `"author"` written to diagrams.
  pub author: String,
  /// `"editor"` written to diagrams.
  pub editor: String,
  /// Wire color used when a tool call gives none.
  pub default_wire_color: String,
  /// Where the CLI writes the final diagram.
  pub diagram_path: PathBuf,
}

impl Default for CircuitConfig {
  fn default() -> Self {
    Self {
      author: DEFAULT_AUTHOR.to_string(),
      editor: DEFAULT_EDITOR.to_string(),
      default_wire_color: DEFAULT_WIRE_COLOR.to_string(),
      diagram_path: PathBuf::from("diagram.json"),
    }
  }
}

impl CircuitConfig {
  /// Defaults overridden by whichever `WOKWI_*` variables are set.
  #[must_use]
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Defaults overridden by `lookup`, which returns the value of a variable
  /// if it is set. Empty values are ignored.
  #[must_use]
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let defaults = Self::default();
    Self {
      author: get(ENV_AUTHOR).unwrap_or(defaults.author),
      editor: get(ENV_EDITOR).unwrap_or(defaults.editor),
      default_wire_color: get(ENV_WIRE_COLOR).unwrap_or(defaults.default_wire_color),
      diagram_path: get(ENV_DIAGRAM_PATH)
        .map(PathBuf::from)
        .unwrap_or(defaults.diagram_path),
    }
  }

  /// Document metadata for encoding.
  #[must_use]
  pub fn metadata(&self) -> Metadata {
    Metadata {
      version: DIAGRAM_VERSION,
      author: self.author.clone(),
      editor: self.editor.clone(),
    }
  }
}
