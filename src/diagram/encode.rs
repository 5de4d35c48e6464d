//! Circuit state → diagram document.

use super::{Diagram, Metadata, Part, Wire};
use crate::attrs::AttrMap;
use crate::component::{Component, Connection, check_placement};
use crate::error::{CircuitError, Result};
use std::collections::HashSet;
use tracing::trace;

/// Encodes components and connections into a diagram document.
///
/// Pure and deterministic: parts and connections are emitted in the order
/// given, nothing is sorted or deduplicated.
///
/// # Arguments
///
/// * `components` - Parts, in output order
/// * `connections` - Wires, in output order
/// * `metadata` - Version, author and editor tags
///
/// # Errors
///
/// The input may come from a snapshot that never went through a registry, so
/// everything a registry guarantees is checked again:
///
/// - [`CircuitError::UnknownComponent`] if a connection endpoint does not name
///   one of `components`
/// - [`CircuitError::AttributeMismatch`] if a component's attributes belong to
///   another kind
/// - [`CircuitError::InvalidId`] / [`CircuitError::NonFinitePosition`] for a
///   component that cannot be written
/// - [`CircuitError::InvalidPin`] for a pin name that cannot be written
///
/// # Example
///
/// ```rust
/// use wokwi_circuit::diagram::{Metadata, Wire, encode};
/// use wokwi_circuit::{Component, ComponentKind, Connection, PinRef, Position};
///
/// let parts = vec![
///   Component::new("uno", ComponentKind::ArduinoUno, Position::default()),
///   Component::new("led", ComponentKind::Led, Position::new(10.0, 10.0)),
/// ];
/// let wires = vec![Connection::new(PinRef::new("uno", "13"), PinRef::new("led", "A"))];
/// let doc = encode(&parts, &wires, &Metadata::default())?;
/// assert_eq!(doc.parts[1].part_type, "wokwi-led");
/// assert_eq!(doc.connections[0], Wire("uno:13".into(), "led:A".into(), "green".into(), vec![]));
/// # Ok::<(), wokwi_circuit::CircuitError>(())
/// ```
pub fn encode<'a, I>(components: &[Component], connections: I, metadata: &Metadata) -> Result<Diagram>
where
  I: IntoIterator<Item = &'a Connection>,
{
  let ids: HashSet<&str> = components.iter().map(|c| c.id.as_str()).collect();

  let parts = components
    .iter()
    .map(encode_part)
    .collect::<Result<Vec<Part>>>()?;

  let mut wires = Vec::new();
  for connection in connections {
    for end in [&connection.from, &connection.to] {
      if !ids.contains(end.component_id.as_str()) {
        return Err(CircuitError::UnknownComponent {
          id: end.component_id.clone(),
        });
      }
      end.check_pin()?;
    }
    wires.push(Wire(
      connection.from.to_string(),
      connection.to.to_string(),
      connection.color.clone(),
      connection.route.clone(),
    ));
  }

  trace!(parts = parts.len(), connections = wires.len(), "diagram encoded");
  Ok(Diagram {
    version: metadata.version,
    author: metadata.author.clone(),
    editor: metadata.editor.clone(),
    parts,
    connections: wires,
    dependencies: AttrMap::new(),
  })
}

fn encode_part(component: &Component) -> Result<Part> {
  if component.attributes.kind() != component.kind {
    return Err(CircuitError::AttributeMismatch {
      expected: component.kind,
      found: component.attributes.kind(),
    });
  }
  check_placement(&component.id, component.position)?;
  Ok(Part {
    part_type: component.kind.wire_type().to_string(),
    id: component.id.clone(),
    top: component.position.top,
    left: component.position.left,
    attrs: component.attributes.to_map(),
  })
}
