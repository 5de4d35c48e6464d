//! # Tool Call Test Suite
//!
//! Exercises parsing and dispatch of agent tool calls, including the error
//! strings handed back on rejection.

use crate::attrs::Attributes;
use crate::circuit::Circuit;
use crate::component::PinRef;
use crate::config::CircuitConfig;
use crate::kind::ComponentKind;
use crate::tools::{AddLedArgs, ToolCall, dispatch, dispatch_json};
use serde_json::{Value, json};

fn run(circuit: &mut Circuit, request: Value) -> crate::tools::ToolOutcome {
  dispatch_json(circuit, &request.to_string(), &CircuitConfig::default())
}

#[test]
fn test_parse_tool_calls() {
  assert_eq!(
    ToolCall::from_parts("add_led", Value::Null).unwrap(),
    ToolCall::AddLed(AddLedArgs::default())
  );
  assert_eq!(
    ToolCall::from_json(r#"{"tool":"list_components"}"#).unwrap(),
    ToolCall::ListComponents
  );
  assert_eq!(
    ToolCall::from_json(r#"{"tool":"clear_circuit","args":{}}"#)
      .unwrap()
      .name(),
    "clear_circuit"
  );
}

#[test]
fn test_parse_rejects_unknown_tool() {
  let err = ToolCall::from_parts("add_buzzer", json!({})).unwrap_err();
  assert!(err.to_string().contains("unknown tool 'add_buzzer'"));
}

#[test]
fn test_parse_rejects_missing_connection_fields() {
  let err = ToolCall::from_parts("add_connection", json!({ "from_component": "a" })).unwrap_err();
  assert!(err.to_string().contains("invalid arguments for 'add_connection'"));
}

#[test]
fn test_add_parts() {
  let mut circuit = Circuit::new();
  let outcome = run(&mut circuit, json!({ "tool": "add_arduino" }));
  assert!(outcome.ok);
  assert_eq!(outcome.message, "Added wokwi-arduino-uno with ID: arduino-uno_1");

  let outcome = run(&mut circuit, json!({ "tool": "add_led", "args": { "color": "red" } }));
  assert_eq!(outcome.message, "Added wokwi-led with ID: led_1");

  let outcome = run(
    &mut circuit,
    json!({ "tool": "add_servo", "args": { "top": 5, "left": 7.5, "component_id": "arm" } }),
  );
  assert_eq!(outcome.message, "Added wokwi-servo with ID: arm");

  let led = circuit.components().get("led_1").unwrap();
  assert_eq!(led.position.top, 90.0);
  assert_eq!(led.position.left, 9.0);
  assert_eq!(led.attributes, Attributes::led("red"));
  let arm = circuit.components().get("arm").unwrap();
  assert_eq!(arm.kind, ComponentKind::Servo);
  assert_eq!(arm.position.left, 7.5);
}

#[test]
fn test_duplicate_id_reported() {
  let mut circuit = Circuit::new();
  run(&mut circuit, json!({ "tool": "add_led", "args": { "component_id": "x" } }));
  let outcome = run(&mut circuit, json!({ "tool": "add_led", "args": { "component_id": "x" } }));
  assert!(!outcome.ok);
  assert_eq!(outcome.message, "Error: component with id 'x' already exists");
  assert_eq!(circuit.components().len(), 1);
}

#[test]
fn test_connection_resolves_aliases() {
  let mut circuit = Circuit::new();
  run(&mut circuit, json!({ "tool": "add_arduino" }));
  run(&mut circuit, json!({ "tool": "add_led" }));
  let outcome = run(
    &mut circuit,
    json!({
      "tool": "add_connection",
      "args": {
        "from_component": "arduino-uno_1",
        "from_pin": "D13",
        "to_component": "led_1",
        "to_pin": "anode",
        "wire_routing": ["v10"]
      }
    }),
  );
  assert!(outcome.ok, "{}", outcome.message);
  assert_eq!(outcome.message, "Connected arduino-uno_1:13 to led_1:A");

  let wire = circuit.connections().list()[0];
  assert_eq!(wire.from, PinRef::new("arduino-uno_1", "13"));
  assert_eq!(wire.to, PinRef::new("led_1", "A"));
  assert_eq!(wire.color, "green");
  assert_eq!(wire.route, vec!["v10".to_string()]);
}

#[test]
fn test_connection_uses_configured_color() {
  let mut circuit = Circuit::new();
  run(&mut circuit, json!({ "tool": "add_arduino" }));
  run(&mut circuit, json!({ "tool": "add_servo" }));
  let config = CircuitConfig {
    default_wire_color: "orange".into(),
    ..CircuitConfig::default()
  };
  let call = ToolCall::from_parts(
    "add_connection",
    json!({
      "from_component": "arduino-uno_1",
      "from_pin": "9",
      "to_component": "servo_1",
      "to_pin": "signal"
    }),
  )
  .unwrap();
  assert!(dispatch(&mut circuit, &call, &config).ok);
  let wire = circuit.connections().list()[0];
  assert_eq!(wire.color, "orange");
  assert_eq!(wire.to.pin, "PWM");
}

#[test]
fn test_connection_to_unknown_component() {
  let mut circuit = Circuit::new();
  run(&mut circuit, json!({ "tool": "add_arduino" }));
  let outcome = run(
    &mut circuit,
    json!({
      "tool": "add_connection",
      "args": {
        "from_component": "arduino-uno_1",
        "from_pin": "13",
        "to_component": "ghost_9",
        "to_pin": "anode"
      }
    }),
  );
  assert!(!outcome.ok);
  assert_eq!(
    outcome.message,
    "Error: connection references unknown component 'ghost_9'"
  );
  assert!(circuit.connections().is_empty());
}

#[test]
fn test_unparseable_request() {
  let mut circuit = Circuit::new();
  let outcome = dispatch_json(&mut circuit, "{not json", &CircuitConfig::default());
  assert!(!outcome.ok);
  assert!(outcome.message.starts_with("Error: "));

  let outcome = run(&mut circuit, json!({ "tool": "solder" }));
  assert!(!outcome.ok);
  assert!(outcome.message.contains("unknown tool 'solder'"));
}

#[test]
fn test_generate_diagram() {
  let mut circuit = Circuit::new();
  let outcome = run(&mut circuit, json!({ "tool": "generate_diagram" }));
  assert!(!outcome.ok);
  assert_eq!(
    outcome.message,
    "Error: No components in circuit. Add some components first."
  );

  run(&mut circuit, json!({ "tool": "add_arduino" }));
  let outcome = run(&mut circuit, json!({ "tool": "generate_diagram" }));
  assert!(outcome.ok);
  let doc = crate::diagram::parse(&outcome.message).unwrap();
  assert_eq!(doc.parts.len(), 1);
  assert_eq!(doc.parts[0].part_type, "wokwi-arduino-uno");
}

#[test]
fn test_list_and_clear() {
  let mut circuit = Circuit::new();
  run(&mut circuit, json!({ "tool": "add_led", "args": { "color": "blue" } }));
  let outcome = run(&mut circuit, json!({ "tool": "list_components" }));
  assert!(outcome.ok);
  let listing: Value = serde_json::from_str(&outcome.message).unwrap();
  assert_eq!(listing["components"][0]["id"], "led_1");
  assert_eq!(listing["components"][0]["attrs"]["color"], "blue");
  assert_eq!(listing["connections"], json!([]));

  let outcome = run(&mut circuit, json!({ "tool": "clear_circuit" }));
  assert_eq!(outcome.message, "Circuit cleared successfully");
  assert!(circuit.is_empty());
  let outcome = run(&mut circuit, json!({ "tool": "add_led" }));
  assert_eq!(outcome.message, "Added wokwi-led with ID: led_1");
}

#[test]
fn test_outcome_serializes() {
  let mut circuit = Circuit::new();
  let outcome = run(&mut circuit, json!({ "tool": "clear_circuit" }));
  assert_eq!(
    serde_json::to_value(&outcome).unwrap(),
    json!({ "ok": true, "message": "Circuit cleared successfully" })
  );
}
