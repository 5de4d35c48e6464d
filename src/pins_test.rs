//! Tests for pin aliases and circuit linting.

use crate::circuit::Circuit;
use crate::component::{PinRef, Position};
use crate::kind::ComponentKind;
use crate::pins::{LintIssue, SUPPLY_BUDGET_MA, is_known_pin, lint, pin_names, resolve_alias};

fn board_and_led() -> Circuit {
  let mut circuit = Circuit::new();
  circuit
    .add_component(ComponentKind::ArduinoUno, Position::default(), None, None)
    .unwrap();
  circuit
    .add_component(ComponentKind::Led, Position::default(), None, None)
    .unwrap();
  circuit
}

#[test]
fn test_pin_tables() {
  assert_eq!(pin_names(ComponentKind::Led), &["A", "C"]);
  assert_eq!(pin_names(ComponentKind::Servo), &["PWM", "V+", "GND"]);
  assert!(is_known_pin(ComponentKind::ArduinoUno, "13"));
  assert!(is_known_pin(ComponentKind::ArduinoUno, "GND.2"));
  assert!(!is_known_pin(ComponentKind::ArduinoUno, "14"));
  assert!(!is_known_pin(ComponentKind::Led, "a"));
}

#[test]
fn test_resolve_led_aliases() {
  assert_eq!(resolve_alias(ComponentKind::Led, "anode"), "A");
  assert_eq!(resolve_alias(ComponentKind::Led, "Cathode"), "C");
  assert_eq!(resolve_alias(ComponentKind::Led, "-"), "C");
  assert_eq!(resolve_alias(ComponentKind::Led, "A"), "A");
}

#[test]
fn test_resolve_board_aliases() {
  assert_eq!(resolve_alias(ComponentKind::ArduinoUno, "D13"), "13");
  assert_eq!(resolve_alias(ComponentKind::ArduinoUno, "pin 9"), "9");
  assert_eq!(resolve_alias(ComponentKind::ArduinoUno, "a0"), "A0");
  assert_eq!(resolve_alias(ComponentKind::ArduinoUno, "GND"), "GND.1");
  assert_eq!(resolve_alias(ComponentKind::ArduinoUno, "VCC"), "5V");
  assert_eq!(resolve_alias(ComponentKind::ArduinoUno, "3v3"), "3.3V");
  // out of range stays as given
  assert_eq!(resolve_alias(ComponentKind::ArduinoUno, "D20"), "D20");
}

#[test]
fn test_resolve_servo_aliases() {
  assert_eq!(resolve_alias(ComponentKind::Servo, "signal"), "PWM");
  assert_eq!(resolve_alias(ComponentKind::Servo, "vcc"), "V+");
  assert_eq!(resolve_alias(ComponentKind::Servo, "gnd"), "GND");
  assert_eq!(resolve_alias(ComponentKind::Servo, "horn"), "horn");
}

#[test]
fn test_lint_clean_circuit() {
  let mut circuit = board_and_led();
  circuit
    .add_connection(
      PinRef::new("arduino-uno_1", "13"),
      PinRef::new("led_1", "A"),
      None,
      None,
    )
    .unwrap();
  circuit
    .add_connection(
      PinRef::new("led_1", "C"),
      PinRef::new("arduino-uno_1", "GND.1"),
      None,
      None,
    )
    .unwrap();
  assert!(lint(&circuit).is_empty());
  assert!(lint(&Circuit::new()).is_empty());
}

#[test]
fn test_lint_no_controller() {
  let mut circuit = Circuit::new();
  circuit
    .add_component(ComponentKind::Servo, Position::default(), None, None)
    .unwrap();
  assert_eq!(lint(&circuit), vec![LintIssue::NoController]);
}

#[test]
fn test_lint_unknown_pin() {
  let mut circuit = board_and_led();
  circuit
    .add_connection(
      PinRef::new("arduino-uno_1", "13"),
      PinRef::new("led_1", "anode"),
      None,
      None,
    )
    .unwrap();
  let issues = lint(&circuit);
  assert_eq!(
    issues,
    vec![LintIssue::UnknownPin {
      pin: PinRef::new("led_1", "anode"),
      kind: ComponentKind::Led,
    }]
  );
  assert_eq!(
    issues[0].to_string(),
    "pin 'anode' does not exist on led 'led_1'"
  );
}

#[test]
fn test_lint_pin_conflict_skips_supply_pins() {
  let mut circuit = board_and_led();
  circuit
    .add_component(ComponentKind::Led, Position::default(), None, None)
    .unwrap();
  for led in ["led_1", "led_2"] {
    circuit
      .add_connection(
        PinRef::new("arduino-uno_1", "13"),
        PinRef::new(led, "A"),
        None,
        None,
      )
      .unwrap();
    circuit
      .add_connection(
        PinRef::new(led, "C"),
        PinRef::new("arduino-uno_1", "GND.1"),
        None,
        None,
      )
      .unwrap();
  }
  assert_eq!(
    lint(&circuit),
    vec![LintIssue::PinConflict {
      pin: PinRef::new("arduino-uno_1", "13"),
      wires: 2,
    }]
  );
}

#[test]
fn test_lint_current_budget() {
  let mut circuit = Circuit::new();
  circuit
    .add_component(ComponentKind::ArduinoUno, Position::default(), None, None)
    .unwrap();
  for _ in 0..6 {
    circuit
      .add_component(ComponentKind::Servo, Position::default(), None, None)
      .unwrap();
  }
  assert_eq!(
    lint(&circuit),
    vec![LintIssue::CurrentBudget {
      total_ma: 600,
      budget_ma: SUPPLY_BUDGET_MA,
    }]
  );
}
