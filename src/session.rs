//! Shared access to circuits.
//!
//! A [`CircuitSession`] puts one [`Circuit`] behind one mutex. Every operation
//! runs as a single closure while the lock is held, so concurrent callers see
//! the operations applied one at a time in lock-acquisition order. No
//! operation awaits inside the lock.
//!
//! A [`SessionStore`] maps session ids to independent sessions; nothing is
//! shared between two sessions.

use crate::circuit::Circuit;
use crate::diagram::{Diagram, Metadata};
use crate::error::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// A circuit shared between tasks.
#[derive(Debug, Clone, Default)]
pub struct CircuitSession {
  circuit: Arc<Mutex<Circuit>>,
}

impl CircuitSession {
  /// Creates a session around an empty circuit.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a session around an existing circuit.
  #[must_use]
  pub fn with_circuit(circuit: Circuit) -> Self {
    Self {
      circuit: Arc::new(Mutex::new(circuit)),
    }
  }

  /// Runs `f` against the circuit with exclusive access.
  ///
  /// # Arguments
  ///
  /// * `f` - The operation; it runs to completion before any other caller
  ///   observes the circuit
  ///
  /// # Returns
  ///
  /// Whatever `f` returns.
  ///
  /// # Example
  ///
  /// ```rust,no_run
  /// use wokwi_circuit::{ComponentKind, Position};
  /// use wokwi_circuit::session::CircuitSession;
  ///
  /// # async fn run() -> wokwi_circuit::Result<()> {
  /// let session = CircuitSession::new();
  /// let id = session
  ///   .apply(|c| c.add_component(ComponentKind::Led, Position::default(), None, None))
  ///   .await?;
  /// assert_eq!(id, "led_1");
  /// # Ok(())
  /// # }
  /// ```
  pub async fn apply<R>(&self, f: impl FnOnce(&mut Circuit) -> R) -> R {
    let mut circuit = self.circuit.lock().await;
    f(&mut circuit)
  }

  /// Encodes the current state.
  pub async fn snapshot(&self, metadata: &Metadata) -> Result<Diagram> {
    self.circuit.lock().await.to_diagram(metadata)
  }

  /// Clones the current state.
  pub async fn circuit(&self) -> Circuit {
    self.circuit.lock().await.clone()
  }
}

/// Session id → circuit.
#[derive(Debug, Default)]
pub struct SessionStore {
  sessions: Mutex<HashMap<String, CircuitSession>>,
}

impl SessionStore {
  /// Creates an empty store.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the session for `id`, creating an empty one if needed.
  pub async fn open(&self, id: &str) -> CircuitSession {
    let mut sessions = self.sessions.lock().await;
    sessions
      .entry(id.to_string())
      .or_insert_with(|| {
        debug!(session = id, "session opened");
        CircuitSession::new()
      })
      .clone()
  }

  /// Returns the session for `id` if it exists.
  pub async fn get(&self, id: &str) -> Option<CircuitSession> {
    self.sessions.lock().await.get(id).cloned()
  }

  /// Drops the session for `id`. Handles already given out stay usable.
  pub async fn close(&self, id: &str) -> bool {
    let removed = self.sessions.lock().await.remove(id).is_some();
    if removed {
      debug!(session = id, "session closed");
    }
    removed
  }

  /// Number of open sessions.
  pub async fn len(&self) -> usize {
    self.sessions.lock().await.len()
  }

  /// Returns true if no session is open.
  pub async fn is_empty(&self) -> bool {
    self.sessions.lock().await.is_empty()
  }
}
