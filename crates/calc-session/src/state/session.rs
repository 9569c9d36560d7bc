//! # Calculator Session
//!
//! Holds the calculator state for one user session and runs every button
//! press through `calc_core::calculate`.
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<Mutex<T>>` because:
//! 1. A front end may deliver presses from more than one thread
//! 2. Presses must be applied one at a time, in order
//! 3. Clones of the session share the same state
//!
//! ## Press Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    press(label)                                         │
//! │                                                                         │
//! │  parse_button(label) ──► Err ──► SessionError (state untouched)        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  lock state                                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  calculate(&state, button)                                              │
//! │         │                                                               │
//! │         ├── Ok(next)  ──► state = next                                  │
//! │         │                                                               │
//! │         └── Err(e)    ──► state = { total: e.message }                  │
//! │                           snapshot.error = e                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Snapshot { state, display, expression, error }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use calc_core::{calculate, parse_button, Button, CalcError, CalculatorState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::config::SessionConfig;
use super::tape::{Tape, TapeEntry};
use crate::error::SessionError;

/// What the front end renders after a press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The raw state, for front ends that keep their own copy
    pub state: CalculatorState,

    /// Primary display value: `next ?? total ?? "0"`
    pub display: String,

    /// Expression line, present when `total` and `operation` are
    pub expression: Option<String>,

    /// Set when the last press failed in the engine
    pub error: Option<SessionError>,
}

impl Snapshot {
    fn new(state: &CalculatorState, error: Option<SessionError>) -> Self {
        Snapshot {
            display: state.display().to_string(),
            expression: state.expression(),
            state: state.clone(),
            error,
        }
    }
}

/// Mutable part of a session, guarded by the mutex.
#[derive(Debug)]
struct SessionInner {
    state: CalculatorState,
    tape: Tape,
    last_error: Option<SessionError>,
}

impl SessionInner {
    /// Applies one press; engine errors are written into the display.
    fn apply(&mut self, button: Button, session_id: Uuid) {
        let resolving = matches!(button, Button::Equals | Button::Operator(_))
            && self.state.has_pending_computation();
        let expression = if resolving {
            self.state.expression()
        } else {
            None
        };

        match calculate(&self.state, button) {
            Ok(next) => {
                if let (Some(expression), Some(result)) = (expression, next.total.as_deref()) {
                    self.tape.record(expression, result.to_string(), false);
                }
                self.state = next;
                self.last_error = None;
            }
            Err(err) => {
                warn!(
                    %session_id,
                    code = err.code().as_str(),
                    button = %button,
                    "Calculation failed: {}",
                    err
                );
                if let Some(expression) = expression {
                    self.tape.record(expression, err.to_string(), true);
                }
                self.state = error_state(&err);
                self.last_error = Some(SessionError::from(err));
            }
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.state, self.last_error.clone())
    }
}

/// The state shown after an engine error: the message as `total`,
/// nothing pending.
fn error_state(err: &CalcError) -> CalculatorState {
    CalculatorState {
        total: Some(err.to_string()),
        next: None,
        operation: None,
    }
}

/// One user session.
///
/// ## Usage
/// ```rust
/// use calc_session::{CalculatorSession, SessionConfig};
///
/// let session = CalculatorSession::new(&SessionConfig::default());
/// for label in ["1", "2", "+", "3", "0", "="] {
///     session.press(label).unwrap();
/// }
/// assert_eq!(session.snapshot().display, "42");
/// ```
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    inner: Arc<Mutex<SessionInner>>,
}

impl CalculatorSession {
    /// Starts a session with the empty state.
    pub fn new(config: &SessionConfig) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, history_limit = config.history_limit, "Calculator session started");

        CalculatorSession {
            id,
            started_at: Utc::now(),
            inner: Arc::new(Mutex::new(SessionInner {
                state: CalculatorState::default(),
                tape: Tape::new(config.history_limit),
                last_error: None,
            })),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Validates a raw label and applies it.
    ///
    /// ## Returns
    /// - `Err(SessionError)` with code `INVALID_BUTTON` if the label is not
    ///   on the keypad; the state is left as it was
    /// - `Ok(snapshot)` otherwise, with `snapshot.error` set if the engine
    ///   failed
    pub fn press(&self, label: &str) -> Result<Snapshot, SessionError> {
        let button = parse_button(label).map_err(|e| {
            warn!(session_id = %self.id, label, "Rejected button: {}", e);
            SessionError::from(e)
        })?;

        Ok(self.press_button(button))
    }

    /// Applies an already-typed button.
    pub fn press_button(&self, button: Button) -> Snapshot {
        let session_id = self.id;
        let snapshot = self.with_inner_mut(|inner| {
            inner.apply(button, session_id);
            inner.snapshot()
        });

        debug!(
            %session_id,
            button = %button,
            display = %snapshot.display,
            "Button pressed"
        );

        snapshot
    }

    /// Returns what the front end should currently render.
    pub fn snapshot(&self) -> Snapshot {
        self.with_inner(|inner| inner.snapshot())
    }

    /// Returns the current state.
    pub fn state(&self) -> CalculatorState {
        self.with_inner(|inner| inner.state.clone())
    }

    /// Returns the tape, oldest entry first.
    pub fn tape(&self) -> Vec<TapeEntry> {
        self.with_inner(|inner| inner.tape.entries())
    }

    /// Clears the state, the tape and the last error.
    pub fn reset(&self) {
        self.with_inner_mut(|inner| {
            inner.state = CalculatorState::default();
            inner.tape.clear();
            inner.last_error = None;
        });
        info!(session_id = %self.id, "Calculator session reset");
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        // A panic while holding the lock cannot leave the state half-written:
        // it is only ever replaced wholesale.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_inner<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SessionInner) -> R,
    {
        let inner = self.lock();
        f(&inner)
    }

    fn with_inner_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SessionInner) -> R,
    {
        let mut inner = self.lock();
        f(&mut inner)
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}
