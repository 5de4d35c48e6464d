//! # Error Handling
//!
//! Every failure in the circuit core is a local, recoverable validation
//! condition. Operations return [`CircuitError`] to the immediate caller; none
//! of them panic or abort the session, and none of them are retried because the
//! same input always fails the same way.
//!
//! ## Error Kinds
//!
//! - **DuplicateId**: a requested component id is already live
//! - **NotFound**: the target component of an operation is absent
//! - **UnknownComponent**: a connection endpoint references an absent component
//! - **ConnectionNotFound**: the target connection of an operation is absent
//! - **AttributeMismatch**: attributes of one kind were supplied for another
//! - **MalformedDocument**: a diagram document is missing structure or names an
//!   unsupported part type
//! - **InvalidId** / **InvalidPin**: a name that cannot be written to a diagram
//! - **NonFinitePosition**: a coordinate is NaN or infinite
//! - **IdSpaceExhausted**: a kind's id counter has no values left
//!
//! ## Example
//!
//! ```rust
//! use wokwi_circuit::{CircuitError, ComponentKind, ComponentRegistry, Position};
//!
//! let mut parts = ComponentRegistry::new();
//! parts.add(ComponentKind::Led, Position::default(), None, Some("x".into()))?;
//! let err = parts
//!   .add(ComponentKind::Led, Position::default(), None, Some("x".into()))
//!   .unwrap_err();
//! assert_eq!(err, CircuitError::DuplicateId { id: "x".into() });
//! # Ok::<(), CircuitError>(())
//! ```

use crate::kind::ComponentKind;

/// Error type for registry and serializer operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CircuitError {
  /// A component with the requested id is already present.
  #[error("component with id '{id}' already exists")]
  DuplicateId {
    /// The id that collided.
    id: String,
  },
  /// No component with the given id is present.
  #[error("component '{id}' not found")]
  NotFound {
    /// The id that was looked up.
    id: String,
  },
  /// A connection endpoint names a component that is not present.
  #[error("connection references unknown component '{id}'")]
  UnknownComponent {
    /// The endpoint id that did not resolve.
    id: String,
  },
  /// No connection with the given id is present.
  #[error("connection #{id} not found")]
  ConnectionNotFound {
    /// The connection id that was looked up.
    id: u64,
  },
  /// Attributes for one kind were attached to a component of another kind.
  #[error("attributes for '{found}' cannot be attached to a '{expected}' component")]
  AttributeMismatch {
    /// The kind of the component being added.
    expected: ComponentKind,
    /// The kind the attributes were built for.
    found: ComponentKind,
  },
  /// A requested component id cannot be written to a diagram.
  #[error("invalid component id '{id}': {reason}")]
  InvalidId {
    /// The rejected id.
    id: String,
    /// Why it was rejected.
    reason: String,
  },
  /// A connection end names a pin that cannot be written to a diagram.
  #[error("invalid pin '{pin}' on '{component_id}': pin names must be non-empty and contain no ':'")]
  InvalidPin {
    /// Component the pin is on.
    component_id: String,
    /// The rejected pin name.
    pin: String,
  },
  /// A component position is NaN or infinite.
  #[error("component '{id}' has a non-finite position")]
  NonFinitePosition {
    /// The component id.
    id: String,
  },
  /// Every generated id of a kind has been used.
  #[error("no free generated id left for '{kind}'")]
  IdSpaceExhausted {
    /// The kind whose counter ran out.
    kind: ComponentKind,
  },
  /// A diagram document could not be interpreted.
  #[error("malformed diagram document: {reason}")]
  MalformedDocument {
    /// Description of what was missing or unsupported.
    reason: String,
  },
}

impl CircuitError {
  /// Shorthand for a [`CircuitError::MalformedDocument`].
  pub fn malformed(reason: impl Into<String>) -> Self {
    CircuitError::MalformedDocument {
      reason: reason.into(),
    }
  }
}

impl From<serde_json::Error> for CircuitError {
  fn from(err: serde_json::Error) -> Self {
    CircuitError::malformed(err.to_string())
  }
}

/// Result alias used throughout the crate.
pub type Result<T, E = CircuitError> = std::result::Result<T, E>;
