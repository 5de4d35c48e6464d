//! # Tool Calls
//!
//! Structured tool-call requests, as an agent emits them, applied to a
//! [`Circuit`]. Each request names a tool and carries a JSON argument object:
//!
//! ```json
//! { "tool": "add_led", "args": { "color": "red", "top": 120 } }
//! ```
//!
//! Dispatch never fails and never panics. A rejected call comes back as a
//! [`ToolOutcome`] whose message starts with `"Error: "`, so the caller can show
//! it to the user or hand it back to the agent for another attempt.
//!
//! ## Tools
//!
//! | Tool              | Effect                                            |
//! |-------------------|---------------------------------------------------|
//! | `add_arduino`     | place an Arduino Uno                              |
//! | `add_led`         | place an LED (default position `top=90, left=9`)  |
//! | `add_servo`       | place a servo                                     |
//! | `add_connection`  | wire two pins; human pin names are resolved first |
//! | `list_components` | JSON listing of parts and wires                   |
//! | `clear_circuit`   | reset the circuit                                 |
//! | `generate_diagram`| the diagram in Wokwi editor layout                |

use crate::attrs::{Attributes, LedAttrs, ServoAttrs};
use crate::circuit::Circuit;
use crate::component::{PinRef, Position};
use crate::config::CircuitConfig;
use crate::error::{CircuitError, Result};
use crate::kind::ComponentKind;
use crate::pins::resolve_alias;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Arguments of `add_arduino`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddArduinoArgs {
  /// Top position in pixels.
  pub top: f64,
  /// Left position in pixels.
  pub left: f64,
  /// Optional custom component id.
  pub component_id: Option<String>,
}

/// Arguments of `add_led`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddLedArgs {
  /// Top position in pixels.
  pub top: f64,
  /// Left position in pixels.
  pub left: f64,
  /// Lens color.
  pub color: Option<String>,
  /// Optional custom component id.
  pub component_id: Option<String>,
}

impl Default for AddLedArgs {
  fn default() -> Self {
    Self {
      top: 90.0,
      left: 9.0,
      color: None,
      component_id: None,
    }
  }
}

/// Arguments of `add_servo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddServoArgs {
  /// Top position in pixels.
  pub top: f64,
  /// Left position in pixels.
  pub left: f64,
  /// Horn shape.
  pub horn: Option<String>,
  /// Optional custom component id.
  pub component_id: Option<String>,
}

/// Arguments of `add_connection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddConnectionArgs {
  /// Source component id.
  pub from_component: String,
  /// Source pin name.
  pub from_pin: String,
  /// Target component id.
  pub to_component: String,
  /// Target pin name.
  pub to_pin: String,
  /// Wire color; the configured default when absent.
  #[serde(default)]
  pub color: Option<String>,
  /// Routing hints.
  #[serde(default)]
  pub wire_routing: Vec<String>,
}

/// A parsed tool call.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
  /// `add_arduino`
  AddArduino(AddArduinoArgs),
  /// `add_led`
  AddLed(AddLedArgs),
  /// `add_servo`
  AddServo(AddServoArgs),
  /// `add_connection`
  AddConnection(AddConnectionArgs),
  /// `list_components`
  ListComponents,
  /// `clear_circuit`
  ClearCircuit,
  /// `generate_diagram`
  GenerateDiagram,
}

/// Wire shape of a tool-call request.
#[derive(Debug, Deserialize)]
struct ToolRequest {
  tool: String,
  #[serde(default)]
  args: Value,
}

impl ToolCall {
  /// Builds a call from a tool name and its JSON arguments. `null` arguments
  /// are treated as `{}`.
  ///
  /// # Errors
  ///
  /// [`CircuitError::MalformedDocument`] for an unknown tool or arguments
  /// that do not fit the tool's schema.
  pub fn from_parts(tool: &str, args: Value) -> Result<Self> {
    let args = if args.is_null() {
      Value::Object(Default::default())
    } else {
      args
    };
    let call = match tool {
      "add_arduino" => ToolCall::AddArduino(parse_args(tool, args)?),
      "add_led" => ToolCall::AddLed(parse_args(tool, args)?),
      "add_servo" => ToolCall::AddServo(parse_args(tool, args)?),
      "add_connection" => ToolCall::AddConnection(parse_args(tool, args)?),
      "list_components" => ToolCall::ListComponents,
      "clear_circuit" => ToolCall::ClearCircuit,
      "generate_diagram" => ToolCall::GenerateDiagram,
      other => return Err(CircuitError::malformed(format!("unknown tool '{}'", other))),
    };
    Ok(call)
  }

  /// Parses a `{"tool": ..., "args": {...}}` request.
  pub fn from_json(request: &str) -> Result<Self> {
    let request: ToolRequest = serde_json::from_str(request)?;
    Self::from_parts(&request.tool, request.args)
  }

  /// The tool name.
  #[must_use]
  pub fn name(&self) -> &'static str {
    match self {
      ToolCall::AddArduino(_) => "add_arduino",
      ToolCall::AddLed(_) => "add_led",
      ToolCall::AddServo(_) => "add_servo",
      ToolCall::AddConnection(_) => "add_connection",
      ToolCall::ListComponents => "list_components",
      ToolCall::ClearCircuit => "clear_circuit",
      ToolCall::GenerateDiagram => "generate_diagram",
    }
  }
}

fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T> {
  serde_json::from_value(args)
    .map_err(|e| CircuitError::malformed(format!("invalid arguments for '{}': {}", tool, e)))
}

/// Result of a dispatched tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
  /// Whether the call took effect.
  pub ok: bool,
  /// Text for the user or agent.
  pub message: String,
}

impl ToolOutcome {
  fn success(message: impl Into<String>) -> Self {
    Self {
      ok: true,
      message: message.into(),
    }
  }

  fn failure(message: impl std::fmt::Display) -> Self {
    Self {
      ok: false,
      message: format!("Error: {}", message),
    }
  }
}

/// Applies a tool call to `circuit`.
pub fn dispatch(circuit: &mut Circuit, call: &ToolCall, config: &CircuitConfig) -> ToolOutcome {
  let outcome = match run(circuit, call, config) {
    Ok(message) => ToolOutcome::success(message),
    Err(err) => ToolOutcome::failure(err),
  };
  if outcome.ok {
    debug!(tool = call.name(), "tool call applied");
  } else {
    warn!(tool = call.name(), message = %outcome.message, "tool call rejected");
  }
  outcome
}

/// Parses a JSON request and applies it. A request that does not parse is
/// reported like any other rejected call.
pub fn dispatch_json(circuit: &mut Circuit, request: &str, config: &CircuitConfig) -> ToolOutcome {
  match ToolCall::from_json(request) {
    Ok(call) => dispatch(circuit, &call, config),
    Err(err) => {
      warn!(error = %err, "unparseable tool call");
      ToolOutcome::failure(err)
    }
  }
}

/// Why a dispatched call was rejected.
#[derive(Debug, thiserror::Error)]
enum ToolError {
  #[error("{0}")]
  Circuit(#[from] CircuitError),
  #[error("No components in circuit. Add some components first.")]
  EmptyCircuit,
  #[error("could not render output: {0}")]
  Json(#[from] serde_json::Error),
}

fn run(
  circuit: &mut Circuit,
  call: &ToolCall,
  config: &CircuitConfig,
) -> std::result::Result<String, ToolError> {
  match call {
    ToolCall::AddArduino(args) => Ok(add_part(
      circuit,
      ComponentKind::ArduinoUno,
      Position::new(args.top, args.left),
      None,
      args.component_id.clone(),
    )?),
    ToolCall::AddLed(args) => {
      let attrs = Attributes::Led(LedAttrs {
        color: args.color.clone(),
        ..Default::default()
      });
      Ok(add_part(
        circuit,
        ComponentKind::Led,
        Position::new(args.top, args.left),
        Some(attrs),
        args.component_id.clone(),
      )?)
    }
    ToolCall::AddServo(args) => {
      let attrs = Attributes::Servo(ServoAttrs {
        horn: args.horn.clone(),
        ..Default::default()
      });
      Ok(add_part(
        circuit,
        ComponentKind::Servo,
        Position::new(args.top, args.left),
        Some(attrs),
        args.component_id.clone(),
      )?)
    }
    ToolCall::AddConnection(args) => {
      let from = resolve_end(circuit, &args.from_component, &args.from_pin);
      let to = resolve_end(circuit, &args.to_component, &args.to_pin);
      let color = args
        .color
        .clone()
        .unwrap_or_else(|| config.default_wire_color.clone());
      let message = format!("Connected {} to {}", from, to);
      circuit.add_connection(from, to, Some(color), Some(args.wire_routing.clone()))?;
      Ok(message)
    }
    ToolCall::ListComponents => Ok(serde_json::to_string_pretty(&circuit.summary())?),
    ToolCall::ClearCircuit => {
      circuit.reset();
      Ok("Circuit cleared successfully".to_string())
    }
    ToolCall::GenerateDiagram => {
      if circuit.is_empty() {
        return Err(ToolError::EmptyCircuit);
      }
      Ok(circuit.to_diagram(&config.metadata())?.to_wokwi_layout()?)
    }
  }
}

fn add_part(
  circuit: &mut Circuit,
  kind: ComponentKind,
  position: Position,
  attrs: Option<Attributes>,
  requested_id: Option<String>,
) -> Result<String> {
  let id = circuit.add_component(kind, position, attrs, requested_id)?;
  Ok(format!("Added {} with ID: {}", kind.wire_type(), id))
}

/// Pin reference with the pin name mapped to Wokwi's. Unknown components
/// keep the pin as given; the registry reports them.
fn resolve_end(circuit: &Circuit, component_id: &str, pin: &str) -> PinRef {
  let pin = match circuit.components().get(component_id) {
    Ok(component) => resolve_alias(component.kind, pin).into_owned(),
    Err(_) => pin.to_string(),
  };
  PinRef::new(component_id, pin)
}
