//! Component kinds supported by the circuit model.
//!
//! The set is closed: every kind maps to exactly one Wokwi part type string
//! (`wokwi-led`, ...) and one short name used as the prefix of generated ids
//! (`led_1`, ...).

use crate::error::CircuitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumerated category of a placed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
  /// Arduino Uno board.
  #[serde(rename = "arduino-uno")]
  ArduinoUno,
  /// Single 5mm LED.
  #[serde(rename = "led")]
  Led,
  /// Hobby servo motor.
  #[serde(rename = "servo")]
  Servo,
}

impl ComponentKind {
  /// All supported kinds, in declaration order.
  pub const ALL: [ComponentKind; 3] = [
    ComponentKind::ArduinoUno,
    ComponentKind::Led,
    ComponentKind::Servo,
  ];

  /// Short name used for generated ids and tool vocabulary.
  #[must_use]
  pub fn short_name(self) -> &'static str {
    match self {
      ComponentKind::ArduinoUno => "arduino-uno",
      ComponentKind::Led => "led",
      ComponentKind::Servo => "servo",
    }
  }

  /// Part type string written to the `"type"` field of a diagram part.
  #[must_use]
  pub fn wire_type(self) -> &'static str {
    match self {
      ComponentKind::ArduinoUno => "wokwi-arduino-uno",
      ComponentKind::Led => "wokwi-led",
      ComponentKind::Servo => "wokwi-servo",
    }
  }

  /// Looks up a kind by its diagram part type.
  #[must_use]
  pub fn from_wire_type(wire: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|k| k.wire_type() == wire)
  }

  /// Looks up a kind by its short name.
  #[must_use]
  pub fn from_short_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|k| k.short_name() == name)
  }
}

impl fmt::Display for ComponentKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.short_name())
  }
}

impl FromStr for ComponentKind {
  type Err = CircuitError;

  /// Accepts either the short name or the Wokwi part type.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_short_name(s)
      .or_else(|| Self::from_wire_type(s))
      .ok_or_else(|| CircuitError::malformed(format!("unsupported part type '{}'", s)))
  }
}
