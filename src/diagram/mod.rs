//! Wokwi `diagram.json` documents.
//!
//! A [`Diagram`] is a derived snapshot of a circuit, never held state. It is
//! produced by [`encode`] from the registries' contents and turned back into
//! components and connections by [`decode`]. The serde types here mirror the
//! document layout one to one:
//!
//! ```json
//! {
//!   "version": 1,
//!   "author": "wokwi_components",
//!   "editor": "wokwi",
//!   "parts": [ { "type": "wokwi-led", "id": "led_1", "top": 10, "left": 10, "attrs": { "color": "red" } } ],
//!   "connections": [ [ "arduino-uno_1:13", "led_1:A", "green", [] ] ],
//!   "dependencies": {}
//! }
//! ```
//!
//! Encoding is deterministic: parts and connections keep insertion order and
//! attribute objects are written with sorted keys, so the same circuit always
//! produces the same bytes.

pub mod decode;
pub mod encode;
pub mod file;
mod layout;

pub use decode::{decode, parse};
pub use encode::encode;

use crate::attrs::AttrMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Document format version written by this crate.
pub const DIAGRAM_VERSION: u32 = 1;
/// Default `"author"` field.
pub const DEFAULT_AUTHOR: &str = "wokwi_components";
/// Default `"editor"` field.
pub const DEFAULT_EDITOR: &str = "wokwi";

/// Document-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
  /// Schema version.
  pub version: u32,
  /// Author tag.
  pub author: String,
  /// Editor tag.
  pub editor: String,
}

impl Default for Metadata {
  fn default() -> Self {
    Self {
      version: DIAGRAM_VERSION,
      author: DEFAULT_AUTHOR.to_string(),
      editor: DEFAULT_EDITOR.to_string(),
    }
  }
}

/// A Wokwi diagram document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
  /// Schema version.
  pub version: u32,
  /// Author tag.
  pub author: String,
  /// Editor tag.
  pub editor: String,
  /// Placed parts.
  pub parts: Vec<Part>,
  /// Wires.
  pub connections: Vec<Wire>,
  /// Library dependencies. Always empty when produced by [`encode`].
  #[serde(default)]
  pub dependencies: AttrMap,
}

impl Diagram {
  /// The document's metadata fields.
  #[must_use]
  pub fn metadata(&self) -> Metadata {
    Metadata {
      version: self.version,
      author: self.author.clone(),
      editor: self.editor.clone(),
    }
  }

  /// Compact JSON on one line.
  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(self)
  }

  /// Pretty-printed JSON with two-space indentation.
  pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(self)
  }
}

/// One entry of the `"parts"` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
  /// Wokwi part type (`"wokwi-led"`).
  #[serde(rename = "type")]
  pub part_type: String,
  /// Part id.
  pub id: String,
  /// Top coordinate.
  #[serde(serialize_with = "serialize_coord")]
  pub top: f64,
  /// Left coordinate.
  #[serde(serialize_with = "serialize_coord")]
  pub left: f64,
  /// Part attributes.
  #[serde(default)]
  pub attrs: AttrMap,
}

/// One entry of the `"connections"` array:
/// `["<from_id>:<from_pin>", "<to_id>:<to_pin>", <color>, <route>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire(pub String, pub String, pub String, pub Vec<String>);

/// JSON value for a coordinate. Integral values are written as integers,
/// as the Wokwi editor does.
pub(crate) fn coord_value(v: f64) -> Value {
  const EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
  if v.fract() == 0.0 && v.abs() < EXACT {
    Value::from(v as i64)
  } else {
    Value::from(v)
  }
}

fn serialize_coord<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
  coord_value(*v).serialize(s)
}
