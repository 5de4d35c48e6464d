//! # Circuit Test Suite
//!
//! ## Test Coverage
//!
//! - **Scenario**: Arduino + LED + wire encodes to the expected connection
//! - **Cascade**: removing a component drops its wires
//! - **Reset**: both registries and the counters are cleared together
//! - **Snapshots**: `to_diagram` / `from_diagram` and counter priming

use crate::attrs::Attributes;
use crate::circuit::Circuit;
use crate::component::{PinRef, Position};
use crate::diagram::{Metadata, Wire};
use crate::error::CircuitError;
use crate::kind::ComponentKind;
use serde_json::json;

fn scenario() -> Circuit {
  let mut circuit = Circuit::new();
  let uno = circuit
    .add_component(ComponentKind::ArduinoUno, Position::new(0.0, 0.0), None, None)
    .unwrap();
  let led = circuit
    .add_component(
      ComponentKind::Led,
      Position::new(10.0, 10.0),
      Some(Attributes::led("red")),
      None,
    )
    .unwrap();
  assert_eq!(uno, "arduino-uno_1");
  assert_eq!(led, "led_1");
  circuit
    .add_connection(
      PinRef::new("arduino-uno_1", "13"),
      PinRef::new("led_1", "A"),
      None,
      None,
    )
    .unwrap();
  circuit
}

#[test]
fn test_scenario_encodes_expected_connection() {
  let circuit = scenario();
  let doc = circuit.to_diagram(&Metadata::default()).unwrap();
  assert_eq!(
    doc.parts.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
    vec!["arduino-uno_1", "led_1"]
  );
  assert_eq!(
    doc.connections,
    vec![Wire(
      "arduino-uno_1:13".into(),
      "led_1:A".into(),
      "green".into(),
      vec![]
    )]
  );
}

#[test]
fn test_reads_do_not_affect_order() {
  let mut circuit = Circuit::new();
  circuit
    .add_component(ComponentKind::ArduinoUno, Position::default(), None, None)
    .unwrap();
  let _ = circuit.components().list();
  let _ = circuit.summary();
  circuit
    .add_component(ComponentKind::Led, Position::default(), None, None)
    .unwrap();
  let _ = circuit.components().get("led_1");
  circuit
    .add_connection(
      PinRef::new("arduino-uno_1", "13"),
      PinRef::new("led_1", "A"),
      None,
      None,
    )
    .unwrap();
  let doc = circuit.to_diagram(&Metadata::default()).unwrap();
  assert_eq!(doc.parts[0].id, "arduino-uno_1");
  assert_eq!(doc.parts[1].id, "led_1");
  assert_eq!(doc.connections.len(), 1);
}

#[test]
fn test_ghost_endpoint_rejected() {
  let mut circuit = scenario();
  let err = circuit
    .add_connection(
      PinRef::new("arduino-uno_1", "13"),
      PinRef::new("ghost_9", "A"),
      None,
      None,
    )
    .unwrap_err();
  assert_eq!(err, CircuitError::UnknownComponent { id: "ghost_9".into() });
  assert_eq!(circuit.connections().len(), 1);
}

#[test]
fn test_remove_component_cascades() {
  let mut circuit = scenario();
  circuit
    .add_connection(
      PinRef::new("arduino-uno_1", "GND.1"),
      PinRef::new("led_1", "C"),
      Some("black".into()),
      None,
    )
    .unwrap();
  let (removed, dropped) = circuit.remove_component("led_1").unwrap();
  assert_eq!(removed.id, "led_1");
  assert_eq!(dropped, 2);
  assert!(circuit.connections().is_empty());
  // snapshot stays encodable
  assert!(circuit.to_diagram(&Metadata::default()).is_ok());
}

#[test]
fn test_remove_missing_component() {
  let mut circuit = scenario();
  assert_eq!(
    circuit.remove_component("nope").unwrap_err(),
    CircuitError::NotFound { id: "nope".into() }
  );
  assert_eq!(circuit.connections().len(), 1);
}

#[test]
fn test_reset_clears_everything() {
  let mut circuit = scenario();
  for _ in 0..2 {
    circuit
      .add_component(ComponentKind::Led, Position::default(), None, None)
      .unwrap();
  }
  circuit.reset();
  assert!(circuit.is_empty());
  assert!(circuit.connections().is_empty());
  assert_eq!(
    circuit
      .add_component(ComponentKind::Led, Position::default(), None, None)
      .unwrap(),
    "led_1"
  );
}

#[test]
fn test_remove_connection() {
  let mut circuit = scenario();
  let (id, _) = circuit.connections().entries().next().unwrap();
  let wire = circuit.remove_connection(id).unwrap();
  assert_eq!(wire.from, PinRef::new("arduino-uno_1", "13"));
  assert!(circuit.connections().is_empty());
}

#[test]
fn test_from_diagram_roundtrip_and_counters() {
  let mut circuit = scenario();
  circuit
    .add_component(ComponentKind::Led, Position::default(), None, None)
    .unwrap();
  circuit
    .add_component(ComponentKind::Led, Position::default(), None, None)
    .unwrap();
  circuit.remove_component("led_2").unwrap();

  let doc = circuit.to_diagram(&Metadata::default()).unwrap();
  let mut restored = Circuit::from_diagram(&doc).unwrap();
  assert_eq!(restored.components().list(), circuit.components().list());
  assert_eq!(restored.connections().list(), circuit.connections().list());

  // led_3 is in the document, so the next generated LED must be past it
  assert_eq!(
    restored
      .add_component(ComponentKind::Led, Position::default(), None, None)
      .unwrap(),
    "led_4"
  );
}

#[test]
fn test_from_diagram_rejects_dangling() {
  let mut doc = scenario().to_diagram(&Metadata::default()).unwrap();
  doc.parts.pop();
  assert!(matches!(
    Circuit::from_diagram(&doc),
    Err(CircuitError::UnknownComponent { .. })
  ));
}

#[test]
fn test_set_position() {
  let mut circuit = scenario();
  circuit
    .set_position("led_1", Position::new(-30.0, 200.5))
    .unwrap();
  let doc = circuit.to_diagram(&Metadata::default()).unwrap();
  assert_eq!(doc.parts[1].top, -30.0);
  assert_eq!(doc.parts[1].left, 200.5);
}

#[test]
fn test_summary() {
  let circuit = scenario();
  assert_eq!(
    circuit.summary(),
    json!({
      "components": [
        { "id": "arduino-uno_1", "type": "wokwi-arduino-uno", "position": { "top": 0.0, "left": 0.0 }, "attrs": {} },
        { "id": "led_1", "type": "wokwi-led", "position": { "top": 10.0, "left": 10.0 }, "attrs": { "color": "red" } }
      ],
      "connections": [
        { "from": "arduino-uno_1:13", "to": "led_1:A", "color": "green", "route": [] }
      ]
    })
  );
}

#[test]
fn test_loaded_counter_at_limit_is_an_error() {
  let doc = crate::diagram::parse(
    r#"{
      "version": 1, "author": "a", "editor": "wokwi",
      "parts": [ { "type": "wokwi-led", "id": "led_18446744073709551615", "top": 0, "left": 0 } ],
      "connections": []
    }"#,
  )
  .unwrap();
  let mut circuit = Circuit::from_diagram(&doc).unwrap();
  assert_eq!(
    circuit
      .add_component(ComponentKind::Led, Position::default(), None, None)
      .unwrap_err(),
    CircuitError::IdSpaceExhausted {
      kind: ComponentKind::Led
    }
  );
  assert_eq!(circuit.components().len(), 1);
}

#[test]
fn test_colon_id_survives_snapshot() {
  let mut circuit = Circuit::new();
  circuit
    .add_component(
      ComponentKind::ArduinoUno,
      Position::default(),
      None,
      Some("board:main".into()),
    )
    .unwrap();
  circuit
    .add_component(ComponentKind::Led, Position::default(), None, None)
    .unwrap();
  circuit
    .add_connection(
      PinRef::new("board:main", "13"),
      PinRef::new("led_1", "A"),
      None,
      None,
    )
    .unwrap();
  let doc = circuit.to_diagram(&Metadata::default()).unwrap();
  let restored = Circuit::from_diagram(&doc).unwrap();
  assert_eq!(restored.components().list(), circuit.components().list());
  assert_eq!(restored.connections().list(), circuit.connections().list());
}
