//! Command-line driver: applies tool calls read from stdin to one circuit.
//!
//! Each input line is a JSON request such as
//! `{"tool": "add_led", "args": {"color": "red"}}`. Every outcome is printed as
//! a JSON line on stdout. At end of input the diagram is written to the
//! configured path (`WOKWI_DIAGRAM_PATH`, default `diagram.json`), or to the
//! path given as the first argument.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use wokwi_circuit::diagram::file::write_diagram;
use wokwi_circuit::tools::dispatch_json;
use wokwi_circuit::{Circuit, CircuitConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_writer(io::stderr).init();

  let mut config = CircuitConfig::from_env();
  if let Some(path) = std::env::args().nth(1) {
    config.diagram_path = PathBuf::from(path);
  }

  let mut circuit = Circuit::new();
  let stdin = io::stdin();
  let mut stdout = io::stdout().lock();
  for line in stdin.lock().lines() {
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }
    let outcome = dispatch_json(&mut circuit, &line, &config);
    writeln!(stdout, "{}", serde_json::to_string(&outcome)?)?;
  }

  if circuit.is_empty() {
    warn!("no components, diagram not written");
    return Ok(());
  }
  let diagram = circuit.to_diagram(&config.metadata())?;
  write_diagram(&config.diagram_path, &diagram)?;
  info!(path = %config.diagram_path.display(), "diagram written");
  Ok(())
}
