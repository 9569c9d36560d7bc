//! # State Module
//!
//! Per-session state held on behalf of the front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌──────────────┐  ┌──────────────────┐      │
//! │  │  CalculatorSession   │  │    Tape      │  │  SessionConfig   │      │
//! │  │                      │  │              │  │                  │      │
//! │  │  Arc<Mutex<          │  │  resolved    │  │  history_limit   │      │
//! │  │    CalculatorState   │──│  computations│  │  log_filter      │      │
//! │  │  >>                  │  │  (bounded)   │  │                  │      │
//! │  └──────────────────────┘  └──────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CalculatorSession: presses serialized by its mutex                  │
//! │  • Tape: lives inside the session's mutex                              │
//! │  • SessionConfig: read-only after initialization                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;
mod tape;

pub use config::{SessionConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_LOG_FILTER};
pub use session::{CalculatorSession, Snapshot};
pub use tape::{Tape, TapeEntry};
