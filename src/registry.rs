//! # Component and Connection Registries
//!
//! The two registries own the live state of one circuit.
//!
//! - [`ComponentRegistry`] holds placed parts in insertion order and assigns
//!   collision-free ids of the form `"{kind}_{n}"`.
//! - [`ConnectionRegistry`] holds wires in insertion order. Endpoints are checked
//!   against a [`ComponentRegistry`] when the wire is added and never again.
//!
//! Both are plain single-owner structures: every mutation takes `&mut self` and
//! either succeeds completely or leaves the registry untouched.
//!
//! ## Example
//!
//! ```rust
//! use wokwi_circuit::{ComponentKind, ComponentRegistry, ConnectionRegistry, PinRef, Position};
//!
//! let mut parts = ComponentRegistry::new();
//! let mut wires = ConnectionRegistry::new();
//! let uno = parts.add(ComponentKind::ArduinoUno, Position::default(), None, None)?;
//! let led = parts.add(ComponentKind::Led, Position::new(10.0, 10.0), None, None)?;
//! wires.add(&parts, PinRef::new(&uno, "13"), PinRef::new(&led, "A"), None, None)?;
//! assert_eq!(uno, "arduino-uno_1");
//! assert_eq!(wires.len(), 1);
//! # Ok::<(), wokwi_circuit::CircuitError>(())
//! ```

use crate::attrs::Attributes;
use crate::component::{
  Component, Connection, DEFAULT_WIRE_COLOR, PinRef, Position, check_placement,
};
use crate::error::{CircuitError, Result};
use crate::kind::ComponentKind;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Registry of placed components.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
  /// Components in insertion order.
  components: Vec<Component>,
  /// Number of ids generated so far, per kind. Never decremented except by `clear`.
  counters: HashMap<ComponentKind, u64>,
}

impl ComponentRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a component.
  ///
  /// # Arguments
  ///
  /// * `kind` - The kind of part to place
  /// * `position` - Canvas position
  /// * `attributes` - Kind-specific attributes; `None` means empty
  /// * `requested_id` - Explicit id; `None` generates `"{kind}_{n}"`
  ///
  /// # Returns
  ///
  /// The id the component was stored under.
  ///
  /// # Errors
  ///
  /// - [`CircuitError::DuplicateId`] if `requested_id` is already live
  /// - [`CircuitError::AttributeMismatch`] if `attributes` belong to another kind
  /// - [`CircuitError::InvalidId`] if `requested_id` is empty
  /// - [`CircuitError::NonFinitePosition`] if a coordinate is NaN or infinite
  /// - [`CircuitError::IdSpaceExhausted`] if the kind's counter is at its limit
  ///
  /// On error the registry, counters included, is unchanged.
  pub fn add(
    &mut self,
    kind: ComponentKind,
    position: Position,
    attributes: Option<Attributes>,
    requested_id: Option<String>,
  ) -> Result<String> {
    let attributes = match attributes {
      Some(a) if a.kind() != kind => {
        return Err(CircuitError::AttributeMismatch {
          expected: kind,
          found: a.kind(),
        });
      }
      Some(a) => a.normalized(),
      None => Attributes::empty(kind),
    };

    let (id, generated) = match requested_id {
      Some(id) => {
        if self.contains(&id) {
          return Err(CircuitError::DuplicateId { id });
        }
        (id, None)
      }
      None => {
        let (n, id) = self.next_id(kind)?;
        (id, Some(n))
      }
    };
    check_placement(&id, position)?;
    if let Some(n) = generated {
      self.counters.insert(kind, n);
    }

    debug!(id = %id, kind = %kind, "component added");
    self.components.push(Component {
      id: id.clone(),
      kind,
      position,
      attributes,
    });
    Ok(id)
  }

  /// Inserts a fully built component, keeping its id.
  ///
  /// Used when rebuilding a registry from a decoded diagram. Advances the
  /// counter of the component's kind past any `"{kind}_{n}"` id so later
  /// generated ids cannot collide with it.
  pub fn insert(&mut self, component: Component) -> Result<()> {
    if component.attributes.kind() != component.kind {
      return Err(CircuitError::AttributeMismatch {
        expected: component.kind,
        found: component.attributes.kind(),
      });
    }
    check_placement(&component.id, component.position)?;
    if self.contains(&component.id) {
      return Err(CircuitError::DuplicateId { id: component.id });
    }
    if let Some(n) = generated_index(component.kind, &component.id) {
      let counter = self.counters.entry(component.kind).or_insert(0);
      *counter = (*counter).max(n);
    }
    self.components.push(Component {
      attributes: component.attributes.normalized(),
      ..component
    });
    Ok(())
  }

  /// Removes a component. Connections referencing it are left alone.
  ///
  /// # Errors
  ///
  /// [`CircuitError::NotFound`] if no component has this id.
  pub fn remove(&mut self, id: &str) -> Result<Component> {
    let index = self
      .position_of(id)
      .ok_or_else(|| CircuitError::NotFound { id: id.to_string() })?;
    debug!(id, "component removed");
    Ok(self.components.remove(index))
  }

  /// Removes every component and resets id generation.
  pub fn clear(&mut self) {
    self.components.clear();
    self.counters.clear();
  }

  /// Components in insertion order.
  #[must_use]
  pub fn list(&self) -> &[Component] {
    &self.components
  }

  /// Looks up a component by id.
  ///
  /// # Errors
  ///
  /// [`CircuitError::NotFound`] if no component has this id.
  pub fn get(&self, id: &str) -> Result<&Component> {
    self
      .components
      .iter()
      .find(|c| c.id == id)
      .ok_or_else(|| CircuitError::NotFound { id: id.to_string() })
  }

  /// Returns true if a component with this id is live.
  #[must_use]
  pub fn contains(&self, id: &str) -> bool {
    self.position_of(id).is_some()
  }

  /// Moves a component.
  ///
  /// # Errors
  ///
  /// [`CircuitError::NotFound`] if no component has this id,
  /// [`CircuitError::NonFinitePosition`] if a coordinate is NaN or infinite.
  pub fn set_position(&mut self, id: &str, position: Position) -> Result<()> {
    let index = self
      .position_of(id)
      .ok_or_else(|| CircuitError::NotFound { id: id.to_string() })?;
    check_placement(id, position)?;
    self.components[index].position = position;
    Ok(())
  }

  /// Number of live components.
  #[must_use]
  pub fn len(&self) -> usize {
    self.components.len()
  }

  /// Returns true if no component is live.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.components.is_empty()
  }

  fn position_of(&self, id: &str) -> Option<usize> {
    self.components.iter().position(|c| c.id == id)
  }

  /// First free generated id past the kind's counter, with its counter value.
  /// The counter itself is left for the caller to commit.
  fn next_id(&self, kind: ComponentKind) -> Result<(u64, String)> {
    let mut n = self.counters.get(&kind).copied().unwrap_or(0);
    loop {
      n = n
        .checked_add(1)
        .ok_or(CircuitError::IdSpaceExhausted { kind })?;
      let candidate = format!("{}_{}", kind.short_name(), n);
      if !self.contains(&candidate) {
        return Ok((n, candidate));
      }
    }
  }
}

/// Parses `n` out of an id shaped like a generated `"{kind}_{n}"`.
fn generated_index(kind: ComponentKind, id: &str) -> Option<u64> {
  id.strip_prefix(kind.short_name())?
    .strip_prefix('_')?
    .parse()
    .ok()
}

/// Identifier of a connection within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// Registry of wires between component pins.
#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
  /// Connections in insertion order, tagged with their ids.
  connections: Vec<(ConnectionId, Connection)>,
  /// Last id handed out.
  last_id: u64,
}

impl ConnectionRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a wire between two pins.
  ///
  /// Pin names are not checked against the component kind. Identical wires
  /// may be added more than once.
  ///
  /// # Arguments
  ///
  /// * `components` - Registry the endpoint ids must resolve in
  /// * `from` - Source pin
  /// * `to` - Destination pin
  /// * `color` - Wire color, `"green"` when `None`
  /// * `route` - Routing hints, empty when `None`
  ///
  /// # Errors
  ///
  /// - [`CircuitError::UnknownComponent`] naming the first endpoint id (source
  ///   checked first) that is not live in `components`
  /// - [`CircuitError::InvalidPin`] if a pin name is empty or contains `:`
  pub fn add(
    &mut self,
    components: &ComponentRegistry,
    from: PinRef,
    to: PinRef,
    color: Option<String>,
    route: Option<Vec<String>>,
  ) -> Result<ConnectionId> {
    for end in [&from, &to] {
      if !components.contains(&end.component_id) {
        return Err(CircuitError::UnknownComponent {
          id: end.component_id.clone(),
        });
      }
    }
    from.check_pin()?;
    to.check_pin()?;
    let connection = Connection {
      from,
      to,
      color: color.unwrap_or_else(|| DEFAULT_WIRE_COLOR.to_string()),
      route: route.unwrap_or_default(),
    };
    Ok(self.push(connection))
  }

  /// Appends a connection without endpoint validation.
  pub(crate) fn push(&mut self, connection: Connection) -> ConnectionId {
    self.last_id += 1;
    let id = ConnectionId(self.last_id);
    debug!(%id, from = %connection.from, to = %connection.to, "connection added");
    self.connections.push((id, connection));
    id
  }

  /// Removes a connection.
  ///
  /// # Errors
  ///
  /// [`CircuitError::ConnectionNotFound`] if no connection has this id.
  pub fn remove(&mut self, id: ConnectionId) -> Result<Connection> {
    let index = self
      .connections
      .iter()
      .position(|(cid, _)| *cid == id)
      .ok_or(CircuitError::ConnectionNotFound { id: id.0 })?;
    debug!(%id, "connection removed");
    Ok(self.connections.remove(index).1)
  }

  /// Drops every connection with an end on `component_id`.
  ///
  /// # Returns
  ///
  /// How many connections were dropped.
  pub fn remove_touching(&mut self, component_id: &str) -> usize {
    let before = self.connections.len();
    self.connections.retain(|(_, c)| !c.touches(component_id));
    before - self.connections.len()
  }

  /// Removes every connection. Ids keep counting up.
  pub fn clear(&mut self) {
    self.connections.clear();
  }

  /// Connections in insertion order.
  #[must_use]
  pub fn list(&self) -> Vec<&Connection> {
    self.connections.iter().map(|(_, c)| c).collect()
  }

  /// Connections with their ids, in insertion order.
  pub fn entries(&self) -> impl Iterator<Item = (ConnectionId, &Connection)> {
    self.connections.iter().map(|(id, c)| (*id, c))
  }

  /// Looks up a connection by id.
  #[must_use]
  pub fn get(&self, id: ConnectionId) -> Option<&Connection> {
    self
      .connections
      .iter()
      .find(|(cid, _)| *cid == id)
      .map(|(_, c)| c)
  }

  /// Number of connections.
  #[must_use]
  pub fn len(&self) -> usize {
    self.connections.len()
  }

  /// Returns true if there are no connections.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.connections.is_empty()
  }
}
