//! Placed components and pin references.

use crate::attrs::Attributes;
use crate::error::{CircuitError, Result};
use crate::kind::ComponentKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canvas position of a part, in pixels. Unconstrained: parts may overlap or
/// sit at negative coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
  /// Distance from the top edge.
  pub top: f64,
  /// Distance from the left edge.
  pub left: f64,
}

impl Position {
  /// Creates a position from `(top, left)`.
  #[must_use]
  pub fn new(top: f64, left: f64) -> Self {
    Self { top, left }
  }

  /// Returns true if both coordinates are finite. JSON has no NaN or infinity,
  /// so only finite positions can be written to a diagram.
  #[must_use]
  pub fn is_finite(&self) -> bool {
    self.top.is_finite() && self.left.is_finite()
  }
}

/// Checks that a component can be written to a diagram under `id` at
/// `position`.
pub(crate) fn check_placement(id: &str, position: Position) -> Result<()> {
  if id.is_empty() {
    return Err(CircuitError::InvalidId {
      id: id.to_string(),
      reason: "id must not be empty".to_string(),
    });
  }
  if !position.is_finite() {
    return Err(CircuitError::NonFinitePosition { id: id.to_string() });
  }
  Ok(())
}

/// A component placed in the circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
  /// Unique id within the owning registry.
  pub id: String,
  /// Kind of part.
  pub kind: ComponentKind,
  /// Canvas position.
  pub position: Position,
  /// Kind-specific attributes. Must match `kind`; the registries keep it so
  /// and [`encode`](crate::diagram::encode) rejects a mismatch.
  pub attributes: Attributes,
}

impl Component {
  /// Creates a component with empty attributes for its kind.
  #[must_use]
  pub fn new(id: impl Into<String>, kind: ComponentKind, position: Position) -> Self {
    Self {
      id: id.into(),
      kind,
      position,
      attributes: Attributes::empty(kind),
    }
  }

  /// Replaces the attributes. The caller keeps `attributes.kind() == self.kind`.
  #[must_use]
  pub fn with_attributes(mut self, attributes: Attributes) -> Self {
    self.attributes = attributes.normalized();
    self
  }
}

/// One electrical terminal: a component id and a pin name on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinRef {
  /// Id of the component the pin belongs to.
  pub component_id: String,
  /// Pin name as understood by Wokwi (`"13"`, `"A"`, `"GND.1"`).
  pub pin: String,
}

impl PinRef {
  /// Creates a pin reference.
  #[must_use]
  pub fn new(component_id: impl Into<String>, pin: impl Into<String>) -> Self {
    Self {
      component_id: component_id.into(),
      pin: pin.into(),
    }
  }

  /// Parses the wire form `"<component_id>:<pin>"`. Splits at the last `:`,
  /// since pin names never contain one but component ids may.
  #[must_use]
  pub fn parse(s: &str) -> Option<Self> {
    let (component_id, pin) = s.rsplit_once(':')?;
    if component_id.is_empty() || pin.is_empty() {
      return None;
    }
    Some(Self::new(component_id, pin))
  }

  /// Checks that the pin half survives the `"<id>:<pin>"` wire form.
  pub(crate) fn check_pin(&self) -> Result<()> {
    if self.pin.is_empty() || self.pin.contains(':') {
      return Err(CircuitError::InvalidPin {
        component_id: self.component_id.clone(),
        pin: self.pin.clone(),
      });
    }
    Ok(())
  }
}

impl fmt::Display for PinRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.component_id, self.pin)
  }
}

/// Default wire color when none is given.
pub const DEFAULT_WIRE_COLOR: &str = "green";

/// A wire between two pins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
  /// Source terminal.
  pub from: PinRef,
  /// Destination terminal.
  pub to: PinRef,
  /// Wire color.
  pub color: String,
  /// Routing hint tokens (`"v0"`, `"h-12"`, `"*"`), forwarded verbatim.
  pub route: Vec<String>,
}

impl Connection {
  /// Creates a green wire with no routing hints.
  #[must_use]
  pub fn new(from: PinRef, to: PinRef) -> Self {
    Self {
      from,
      to,
      color: DEFAULT_WIRE_COLOR.to_string(),
      route: Vec::new(),
    }
  }

  /// Returns true when either end is on `component_id`.
  #[must_use]
  pub fn touches(&self, component_id: &str) -> bool {
    self.from.component_id == component_id || self.to.component_id == component_id
  }
}
