//! Diagram document → circuit state.

use super::Diagram;
use crate::attrs::Attributes;
use crate::component::{Component, Connection, PinRef, Position, check_placement};
use crate::error::{CircuitError, Result};
use crate::kind::ComponentKind;
use std::collections::HashSet;
use tracing::trace;

/// Parses diagram JSON text.
///
/// # Errors
///
/// [`CircuitError::MalformedDocument`] if the text is not JSON, a required
/// top-level field (`version`, `author`, `editor`, `parts`, `connections`) is
/// missing, or a field has the wrong shape.
pub fn parse(json: &str) -> Result<Diagram> {
  Ok(serde_json::from_str(json)?)
}

/// Decodes a diagram document into components and connections, in document
/// order.
///
/// # Errors
///
/// - [`CircuitError::MalformedDocument`] for an unsupported part type or a
///   connection end that is not `"<id>:<pin>"`
/// - [`CircuitError::InvalidId`] for a part with an empty id
/// - [`CircuitError::DuplicateId`] if two parts share an id
/// - [`CircuitError::UnknownComponent`] if a connection end names no part
pub fn decode(diagram: &Diagram) -> Result<(Vec<Component>, Vec<Connection>)> {
  let mut components = Vec::with_capacity(diagram.parts.len());
  let mut ids = HashSet::new();
  for part in &diagram.parts {
    let kind = ComponentKind::from_wire_type(&part.part_type).ok_or_else(|| {
      CircuitError::malformed(format!(
        "part '{}' has unsupported type '{}'",
        part.id, part.part_type
      ))
    })?;
    check_placement(&part.id, Position::new(part.top, part.left))?;
    if !ids.insert(part.id.as_str()) {
      return Err(CircuitError::DuplicateId {
        id: part.id.clone(),
      });
    }
    components.push(Component {
      id: part.id.clone(),
      kind,
      position: Position::new(part.top, part.left),
      attributes: Attributes::from_map(kind, part.attrs.clone()),
    });
  }

  let mut connections = Vec::with_capacity(diagram.connections.len());
  for (index, wire) in diagram.connections.iter().enumerate() {
    let from = parse_end(index, &wire.0)?;
    let to = parse_end(index, &wire.1)?;
    for end in [&from, &to] {
      if !ids.contains(end.component_id.as_str()) {
        return Err(CircuitError::UnknownComponent {
          id: end.component_id.clone(),
        });
      }
    }
    connections.push(Connection {
      from,
      to,
      color: wire.2.clone(),
      route: wire.3.clone(),
    });
  }

  trace!(
    parts = components.len(),
    connections = connections.len(),
    "diagram decoded"
  );
  Ok((components, connections))
}

fn parse_end(index: usize, raw: &str) -> Result<PinRef> {
  PinRef::parse(raw).ok_or_else(|| {
    CircuitError::malformed(format!(
      "connection {} endpoint '{}' is not '<id>:<pin>'",
      index, raw
    ))
  })
}
