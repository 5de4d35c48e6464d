//! Kind-specific component attributes.
//!
//! Each kind has a small set of attributes this crate understands (an LED's
//! `color`, a servo's `horn`). Anything else lands in an open `extra` map that
//! is carried through encode/decode unchanged, so attributes added by newer
//! Wokwi releases survive a round trip.
//!
//! A typed key is held in its typed field only when its value is a string. A
//! non-string `color` stays in `extra` as-is. [`Attributes::normalized`] moves
//! string-valued typed keys out of `extra`; the registry only ever stores
//! normalized attributes.

use crate::kind::ComponentKind;
use serde_json::Value;

/// Open attribute map as written to a diagram part's `"attrs"`.
pub type AttrMap = serde_json::Map<String, Value>;

/// Attributes of an Arduino Uno. No keys are interpreted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArduinoUnoAttrs {
  /// Pass-through attributes.
  pub extra: AttrMap,
}

/// Attributes of an LED.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedAttrs {
  /// Lens color (`"red"`, `"green"`, ...). Absent means the Wokwi default.
  pub color: Option<String>,
  /// Pass-through attributes.
  pub extra: AttrMap,
}

/// Attributes of a servo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServoAttrs {
  /// Horn shape (`"single"`, `"double"`, `"cross"`).
  pub horn: Option<String>,
  /// Pass-through attributes.
  pub extra: AttrMap,
}

/// Attributes tagged by component kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Attributes {
  /// Arduino Uno attributes.
  ArduinoUno(ArduinoUnoAttrs),
  /// LED attributes.
  Led(LedAttrs),
  /// Servo attributes.
  Servo(ServoAttrs),
}

const LED_COLOR: &str = "color";
const SERVO_HORN: &str = "horn";

impl Attributes {
  /// Empty attributes for `kind`.
  #[must_use]
  pub fn empty(kind: ComponentKind) -> Self {
    match kind {
      ComponentKind::ArduinoUno => Attributes::ArduinoUno(ArduinoUnoAttrs::default()),
      ComponentKind::Led => Attributes::Led(LedAttrs::default()),
      ComponentKind::Servo => Attributes::Servo(ServoAttrs::default()),
    }
  }

  /// LED attributes with the given lens color.
  #[must_use]
  pub fn led(color: impl Into<String>) -> Self {
    Attributes::Led(LedAttrs {
      color: Some(color.into()),
      extra: AttrMap::new(),
    })
  }

  /// Servo attributes with the given horn shape.
  #[must_use]
  pub fn servo(horn: impl Into<String>) -> Self {
    Attributes::Servo(ServoAttrs {
      horn: Some(horn.into()),
      extra: AttrMap::new(),
    })
  }

  /// The kind these attributes belong to.
  #[must_use]
  pub fn kind(&self) -> ComponentKind {
    match self {
      Attributes::ArduinoUno(_) => ComponentKind::ArduinoUno,
      Attributes::Led(_) => ComponentKind::Led,
      Attributes::Servo(_) => ComponentKind::Servo,
    }
  }

  /// Splits a raw attribute map into the typed fields of `kind` plus `extra`.
  ///
  /// # Arguments
  ///
  /// * `kind` - The component kind the map belongs to
  /// * `map` - Raw `"attrs"` object from a diagram part
  ///
  /// # Returns
  ///
  /// Normalized attributes; `to_map` on the result yields `map` again.
  #[must_use]
  pub fn from_map(kind: ComponentKind, mut map: AttrMap) -> Self {
    match kind {
      ComponentKind::ArduinoUno => Attributes::ArduinoUno(ArduinoUnoAttrs { extra: map }),
      ComponentKind::Led => {
        let color = take_string(&mut map, LED_COLOR);
        Attributes::Led(LedAttrs { color, extra: map })
      }
      ComponentKind::Servo => {
        let horn = take_string(&mut map, SERVO_HORN);
        Attributes::Servo(ServoAttrs { horn, extra: map })
      }
    }
  }

  /// Flattens into the raw map written to a diagram part. Typed fields win
  /// over same-named keys in `extra`.
  #[must_use]
  pub fn to_map(&self) -> AttrMap {
    let (mut map, typed) = match self {
      Attributes::ArduinoUno(a) => (a.extra.clone(), None),
      Attributes::Led(a) => (a.extra.clone(), a.color.as_ref().map(|c| (LED_COLOR, c))),
      Attributes::Servo(a) => (a.extra.clone(), a.horn.as_ref().map(|h| (SERVO_HORN, h))),
    };
    if let Some((key, value)) = typed {
      map.insert(key.to_string(), Value::String(value.clone()));
    }
    map
  }

  /// Canonical form: string-valued typed keys are moved out of `extra`.
  #[must_use]
  pub fn normalized(self) -> Self {
    let kind = self.kind();
    Self::from_map(kind, self.to_map())
  }

  /// Looks up an attribute by its wire key, typed fields included.
  #[must_use]
  pub fn get(&self, key: &str) -> Option<Value> {
    self.to_map().remove(key)
  }
}

fn take_string(map: &mut AttrMap, key: &str) -> Option<String> {
  match map.get(key) {
    Some(Value::String(_)) => match map.remove(key) {
      Some(Value::String(s)) => Some(s),
      _ => None,
    },
    _ => None,
  }
}
