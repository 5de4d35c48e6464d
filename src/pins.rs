//! Pin vocabulary and advisory circuit checks.
//!
//! The registries never look at pin names: the simulator is the authority and
//! rejects unknown pins when it loads a diagram. This module carries the pin
//! tables for the supported kinds so callers can resolve the names people
//! actually use (`anode`, `D13`, `signal`) and lint a circuit before handing it
//! over. Nothing here fails an operation.

use crate::circuit::Circuit;
use crate::component::PinRef;
use crate::kind::ComponentKind;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

const ARDUINO_UNO_PINS: &[&str] = &[
  "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "A0", "A1", "A2",
  "A3", "A4", "A5", "5V", "3.3V", "VIN", "GND.1", "GND.2", "GND.3", "IOREF", "RESET", "AREF",
];
const LED_PINS: &[&str] = &["A", "C"];
const SERVO_PINS: &[&str] = &["PWM", "V+", "GND"];

const ARDUINO_UNO_ALIASES: &[(&str, &str)] = &[
  ("gnd", "GND.1"),
  ("ground", "GND.1"),
  ("3v3", "3.3V"),
  ("+5v", "5V"),
  ("vcc", "5V"),
];
const LED_ALIASES: &[(&str, &str)] = &[
  ("anode", "A"),
  ("+", "A"),
  ("cathode", "C"),
  ("k", "C"),
  ("-", "C"),
];
const SERVO_ALIASES: &[(&str, &str)] = &[
  ("signal", "PWM"),
  ("sig", "PWM"),
  ("power", "V+"),
  ("vcc", "V+"),
  ("ground", "GND"),
  ("gnd", "GND"),
];

/// Supply pins that may carry any number of wires.
const SHARED_PINS: &[&str] = &["5V", "3.3V", "VIN", "GND.1", "GND.2", "GND.3", "IOREF"];

/// Current drawn per part, in milliamps.
pub const LED_CURRENT_MA: u32 = 20;
/// Current drawn per servo, in milliamps.
pub const SERVO_CURRENT_MA: u32 = 100;
/// Current an Uno can supply from its 5V rail, in milliamps.
pub const SUPPLY_BUDGET_MA: u32 = 500;

/// Pin names Wokwi defines for `kind`.
#[must_use]
pub fn pin_names(kind: ComponentKind) -> &'static [&'static str] {
  match kind {
    ComponentKind::ArduinoUno => ARDUINO_UNO_PINS,
    ComponentKind::Led => LED_PINS,
    ComponentKind::Servo => SERVO_PINS,
  }
}

/// Returns true if `pin` is a Wokwi pin name of `kind`.
#[must_use]
pub fn is_known_pin(kind: ComponentKind, pin: &str) -> bool {
  pin_names(kind).contains(&pin)
}

/// Maps a human pin name to the Wokwi one.
///
/// Known names pass through untouched. Otherwise the alias table of `kind` is
/// searched case-insensitively, and for boards `D<n>` / `pin <n>` map to the
/// digital pin `<n>`. Unrecognized names are returned as given.
///
/// ```rust
/// use wokwi_circuit::ComponentKind;
/// use wokwi_circuit::pins::resolve_alias;
///
/// assert_eq!(resolve_alias(ComponentKind::Led, "anode"), "A");
/// assert_eq!(resolve_alias(ComponentKind::ArduinoUno, "D13"), "13");
/// assert_eq!(resolve_alias(ComponentKind::Servo, "PWM"), "PWM");
/// ```
#[must_use]
pub fn resolve_alias(kind: ComponentKind, pin: &str) -> Cow<'_, str> {
  if is_known_pin(kind, pin) {
    return Cow::Borrowed(pin);
  }
  let lower = pin.trim().to_ascii_lowercase();
  let aliases = match kind {
    ComponentKind::ArduinoUno => ARDUINO_UNO_ALIASES,
    ComponentKind::Led => LED_ALIASES,
    ComponentKind::Servo => SERVO_ALIASES,
  };
  if let Some((_, target)) = aliases.iter().find(|(alias, _)| *alias == lower) {
    return Cow::Owned((*target).to_string());
  }
  if kind == ComponentKind::ArduinoUno {
    let digits = lower
      .strip_prefix('d')
      .or_else(|| lower.strip_prefix("pin"))
      .map(str::trim);
    if let Some(n) = digits {
      if is_known_pin(kind, n) {
        return Cow::Owned(n.to_string());
      }
    }
    let upper = lower.to_ascii_uppercase();
    if is_known_pin(kind, &upper) {
      return Cow::Owned(upper);
    }
  }
  Cow::Borrowed(pin)
}

/// A finding from [`lint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
  /// The circuit has parts but no board to drive them.
  NoController,
  /// A connection end names a pin the component's kind does not have.
  UnknownPin {
    /// The offending end.
    pin: PinRef,
    /// Kind of the component the pin is on.
    kind: ComponentKind,
  },
  /// A board signal pin has more than one wire on it.
  PinConflict {
    /// The over-connected pin.
    pin: PinRef,
    /// Number of wires ending on it.
    wires: usize,
  },
  /// Total part current exceeds what the board can supply.
  CurrentBudget {
    /// Estimated draw.
    total_ma: u32,
    /// Supply limit.
    budget_ma: u32,
  },
}

impl fmt::Display for LintIssue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LintIssue::NoController => write!(f, "circuit has no Arduino board"),
      LintIssue::UnknownPin { pin, kind } => {
        write!(f, "pin '{}' does not exist on {} '{}'", pin.pin, kind, pin.component_id)
      }
      LintIssue::PinConflict { pin, wires } => {
        write!(f, "pin {} is driven by {} wires", pin, wires)
      }
      LintIssue::CurrentBudget {
        total_ma,
        budget_ma,
      } => write!(
        f,
        "estimated draw {}mA exceeds the {}mA supply",
        total_ma, budget_ma
      ),
    }
  }
}

/// Checks a circuit for likely wiring mistakes.
///
/// Connections whose component has since been removed are skipped.
#[must_use]
pub fn lint(circuit: &Circuit) -> Vec<LintIssue> {
  let components = circuit.components();
  let mut issues = Vec::new();

  if !components.is_empty()
    && !components
      .list()
      .iter()
      .any(|c| c.kind == ComponentKind::ArduinoUno)
  {
    issues.push(LintIssue::NoController);
  }

  let mut signal_use: Vec<(PinRef, usize)> = Vec::new();
  let mut seen: HashMap<PinRef, usize> = HashMap::new();
  for connection in circuit.connections().list() {
    for end in [&connection.from, &connection.to] {
      let Ok(component) = components.get(&end.component_id) else {
        continue;
      };
      if !is_known_pin(component.kind, &end.pin) {
        issues.push(LintIssue::UnknownPin {
          pin: end.clone(),
          kind: component.kind,
        });
        continue;
      }
      if component.kind == ComponentKind::ArduinoUno && !SHARED_PINS.contains(&end.pin.as_str()) {
        match seen.get(end) {
          Some(&i) => signal_use[i].1 += 1,
          None => {
            seen.insert(end.clone(), signal_use.len());
            signal_use.push((end.clone(), 1));
          }
        }
      }
    }
  }
  issues.extend(
    signal_use
      .into_iter()
      .filter(|(_, wires)| *wires > 1)
      .map(|(pin, wires)| LintIssue::PinConflict { pin, wires }),
  );

  let total_ma: u32 = components
    .list()
    .iter()
    .map(|c| match c.kind {
      ComponentKind::Led => LED_CURRENT_MA,
      ComponentKind::Servo => SERVO_CURRENT_MA,
      ComponentKind::ArduinoUno => 0,
    })
    .sum();
  if total_ma > SUPPLY_BUDGET_MA {
    issues.push(LintIssue::CurrentBudget {
      total_ma,
      budget_ma: SUPPLY_BUDGET_MA,
    });
  }

  issues
}
