//! Reading and writing `diagram.json` files.
//!
//! Files are written in the compact editor layout
//! ([`Diagram::to_wokwi_layout`]) so that a saved diagram diffs cleanly
//! against one exported from the Wokwi editor.

use super::{Diagram, decode, parse};
use crate::error::CircuitError;
use std::path::Path;
use tracing::debug;

/// Error when reading or writing a diagram file.
#[derive(Debug, thiserror::Error)]
pub enum DiagramFileError {
  /// I/O error (file not found, permission).
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  /// The diagram could not be rendered.
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
  /// The file contents are not a valid diagram.
  #[error("{0}")]
  Circuit(#[from] CircuitError),
}

/// Writes `diagram` to `path`, replacing any existing file.
pub fn write_diagram(path: &Path, diagram: &Diagram) -> Result<(), DiagramFileError> {
  let mut text = diagram.to_wokwi_layout()?;
  text.push('\n');
  std::fs::write(path, text)?;
  debug!(path = %path.display(), parts = diagram.parts.len(), "diagram written");
  Ok(())
}

/// Reads the diagram at `path`, checking that every part type is supported
/// and every connection end resolves.
pub fn read_diagram(path: &Path) -> Result<Diagram, DiagramFileError> {
  let text = std::fs::read_to_string(path)?;
  let diagram = parse(&text)?;
  decode(&diagram)?;
  debug!(path = %path.display(), parts = diagram.parts.len(), "diagram read");
  Ok(diagram)
}
