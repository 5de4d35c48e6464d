//! # Circuit
//!
//! A [`Circuit`] is one editing session's state: a [`ComponentRegistry`] and a
//! [`ConnectionRegistry`] owned together. It is the type callers hold; there is
//! no process-wide instance.
//!
//! On top of the bare registries it adds:
//!
//! - **Cascading removal**: removing a component also drops every wire with an
//!   end on it, so the connection list never dangles.
//! - **Reset**: [`Circuit::reset`] empties both registries and the id counters
//!   in one call.
//! - **Snapshots**: [`Circuit::to_diagram`] and [`Circuit::from_diagram`].

use crate::attrs::Attributes;
use crate::component::{Component, Connection, PinRef, Position};
use crate::diagram::{self, Diagram, Metadata};
use crate::error::Result;
use crate::kind::ComponentKind;
use crate::registry::{ComponentRegistry, ConnectionId, ConnectionRegistry};
use serde_json::{Value, json};
use tracing::{debug, info};

/// The registry pair for one circuit.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
  components: ComponentRegistry,
  connections: ConnectionRegistry,
}

impl Circuit {
  /// Creates an empty circuit.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Rebuilds a circuit from a diagram document.
  ///
  /// Id counters are primed from the part ids, so a diagram holding `led_3`
  /// makes the next generated LED id `led_4`.
  pub fn from_diagram(doc: &Diagram) -> Result<Self> {
    let (components, connections) = diagram::decode(doc)?;
    let mut circuit = Self::new();
    for component in components {
      circuit.components.insert(component)?;
    }
    for connection in connections {
      circuit.connections.push(connection);
    }
    info!(
      parts = circuit.components.len(),
      connections = circuit.connections.len(),
      "circuit loaded from diagram"
    );
    Ok(circuit)
  }

  /// Adds a component. See [`ComponentRegistry::add`].
  pub fn add_component(
    &mut self,
    kind: ComponentKind,
    position: Position,
    attributes: Option<Attributes>,
    requested_id: Option<String>,
  ) -> Result<String> {
    self
      .components
      .add(kind, position, attributes, requested_id)
  }

  /// Removes a component and every connection touching it.
  ///
  /// # Returns
  ///
  /// The removed component and the number of connections dropped with it.
  pub fn remove_component(&mut self, id: &str) -> Result<(Component, usize)> {
    let component = self.components.remove(id)?;
    let dropped = self.connections.remove_touching(id);
    if dropped > 0 {
      debug!(id, dropped, "dropped connections of removed component");
    }
    Ok((component, dropped))
  }

  /// Moves a component.
  pub fn set_position(&mut self, id: &str, position: Position) -> Result<()> {
    self.components.set_position(id, position)
  }

  /// Adds a connection. See [`ConnectionRegistry::add`].
  pub fn add_connection(
    &mut self,
    from: PinRef,
    to: PinRef,
    color: Option<String>,
    route: Option<Vec<String>>,
  ) -> Result<ConnectionId> {
    self
      .connections
      .add(&self.components, from, to, color, route)
  }

  /// Removes a connection.
  pub fn remove_connection(&mut self, id: ConnectionId) -> Result<Connection> {
    self.connections.remove(id)
  }

  /// Empties both registries and resets id generation.
  pub fn reset(&mut self) {
    self.components.clear();
    self.connections.clear();
    info!("circuit reset");
  }

  /// The component registry.
  #[must_use]
  pub fn components(&self) -> &ComponentRegistry {
    &self.components
  }

  /// The connection registry.
  #[must_use]
  pub fn connections(&self) -> &ConnectionRegistry {
    &self.connections
  }

  /// Returns true if the circuit has no components.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.components.is_empty()
  }

  /// Snapshots the circuit as a diagram document.
  pub fn to_diagram(&self, metadata: &Metadata) -> Result<Diagram> {
    diagram::encode(self.components.list(), self.connections.list(), metadata)
  }

  /// JSON listing of components and connections, for display.
  ///
  /// ```json
  /// {
  ///   "components": [ { "id": "led_1", "type": "wokwi-led", "position": { "top": 90.0, "left": 9.0 }, "attrs": {} } ],
  ///   "connections": [ { "from": "arduino-uno_1:13", "to": "led_1:A", "color": "green", "route": [] } ]
  /// }
  /// ```
  #[must_use]
  pub fn summary(&self) -> Value {
    let components: Vec<Value> = self
      .components
      .list()
      .iter()
      .map(|c| {
        json!({
          "id": c.id,
          "type": c.kind.wire_type(),
          "position": { "top": c.position.top, "left": c.position.left },
          "attrs": c.attributes.to_map(),
        })
      })
      .collect();
    let connections: Vec<Value> = self
      .connections
      .list()
      .into_iter()
      .map(|c| {
        json!({
          "from": c.from.to_string(),
          "to": c.to.to_string(),
          "color": c.color,
          "route": c.route,
        })
      })
      .collect();
    json!({ "components": components, "connections": connections })
  }
}
