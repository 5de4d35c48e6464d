//! Tests for component kind names.

use crate::error::CircuitError;
use crate::kind::ComponentKind;

#[test]
fn test_names() {
  assert_eq!(ComponentKind::ArduinoUno.short_name(), "arduino-uno");
  assert_eq!(ComponentKind::Servo.wire_type(), "wokwi-servo");
  assert_eq!(ComponentKind::Led.to_string(), "led");
}

#[test]
fn test_lookup_both_forms() {
  for kind in ComponentKind::ALL {
    assert_eq!(ComponentKind::from_wire_type(kind.wire_type()), Some(kind));
    assert_eq!(ComponentKind::from_short_name(kind.short_name()), Some(kind));
    assert_eq!(kind.short_name().parse::<ComponentKind>(), Ok(kind));
    assert_eq!(kind.wire_type().parse::<ComponentKind>(), Ok(kind));
  }
}

#[test]
fn test_unsupported_kind() {
  assert_eq!(ComponentKind::from_wire_type("wokwi-buzzer"), None);
  assert!(matches!(
    "buzzer".parse::<ComponentKind>(),
    Err(CircuitError::MalformedDocument { .. })
  ));
}

#[test]
fn test_serde_names() {
  assert_eq!(
    serde_json::to_string(&ComponentKind::ArduinoUno).unwrap(),
    "\"arduino-uno\""
  );
  assert_eq!(
    serde_json::from_str::<ComponentKind>("\"servo\"").unwrap(),
    ComponentKind::Servo
  );
}
