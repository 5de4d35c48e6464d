//! # wokwi-circuit
//!
//! Circuit state and `diagram.json` serialization for the Wokwi simulator.
//!
//! The crate models one Arduino circuit as an editing session: parts are placed
//! in a component registry, wires between their pins are kept in a connection
//! registry, and at any point the pair can be snapshotted into the document the
//! Wokwi simulator loads.
//!
//! ## Key Features
//!
//! - **Collision-free ids**: generated as `"{kind}_{n}"` from a per-kind counter
//! - **Referential checks**: wires can only be added between live components
//! - **Deterministic output**: the same circuit always encodes to the same bytes
//! - **Round-trip**: `decode(encode(c, x)) == (c, x)`
//! - **Session isolation**: every session owns its own circuit, behind one lock
//!
//! ## Quick Start
//!
//! ```rust
//! use wokwi_circuit::{Attributes, Circuit, ComponentKind, PinRef, Position};
//! use wokwi_circuit::diagram::Metadata;
//!
//! let mut circuit = Circuit::new();
//! let uno = circuit.add_component(ComponentKind::ArduinoUno, Position::default(), None, None)?;
//! let led = circuit.add_component(
//!   ComponentKind::Led,
//!   Position::new(10.0, 10.0),
//!   Some(Attributes::led("red")),
//!   None,
//! )?;
//! circuit.add_connection(PinRef::new(&uno, "13"), PinRef::new(&led, "A"), None, None)?;
//!
//! let doc = circuit.to_diagram(&Metadata::default())?;
//! assert_eq!(doc.parts.len(), 2);
//! println!("{}", doc.to_wokwi_layout()?);
//! # Ok::<(), wokwi_circuit::CircuitError>(())
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Kind-specific component attributes.
pub mod attrs;
/// Registry pair for one circuit.
pub mod circuit;
/// Components, pins and connections.
pub mod component;
/// Runtime configuration.
pub mod config;
/// Wokwi diagram documents: encode, decode, files.
pub mod diagram;
/// Error types.
pub mod error;
/// Supported component kinds.
pub mod kind;
/// Pin vocabulary and circuit lint.
pub mod pins;
/// Component and connection registries.
pub mod registry;
/// Shared sessions.
pub mod session;
/// Tool-call dispatch.
pub mod tools;

pub use attrs::{AttrMap, Attributes};
pub use circuit::Circuit;
pub use component::{Component, Connection, PinRef, Position};
pub use config::CircuitConfig;
pub use diagram::{Diagram, Metadata};
pub use error::{CircuitError, Result};
pub use kind::ComponentKind;
pub use registry::{ComponentRegistry, ConnectionId, ConnectionRegistry};

#[cfg(test)]
mod circuit_test;
#[cfg(test)]
mod kind_test;
#[cfg(test)]
mod pins_test;
#[cfg(test)]
mod tools_test;
