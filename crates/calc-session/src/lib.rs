//! # calc-session
//!
//! The layer a keypad front end embeds to drive `calc-core`.
//!
//! ## Module Organization
//! ```text
//! calc_session/
//! ├── lib.rs          ◄─── You are here (re-exports & logging setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── CalculatorSession: press → snapshot
//! │   ├── tape.rs     ◄─── Bounded record of resolved computations
//! │   └── config.rs   ◄─── SessionConfig from the environment
//! └── error.rs        ◄─── SessionError handed to the front end
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Embedding Application                             │
//! │                                                                         │
//! │  1. SessionConfig::from_env() ────────────────────────────────────────► │
//! │     • CALC_HISTORY_LIMIT, CALC_LOG_FILTER                               │
//! │                                                                         │
//! │  2. init_tracing(&config) ────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • RUST_LOG wins over the configured filter                          │
//! │                                                                         │
//! │  3. CalculatorSession::new(&config) ──────────────────────────────────► │
//! │     • Empty state, empty tape                                           │
//! │                                                                         │
//! │  4. For every button: session.press(label) → render snapshot ────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod state;

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use error::{SessionError, SessionErrorCode};
pub use state::{CalculatorSession, SessionConfig, Snapshot, Tape, TapeEntry};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every button press
/// - `RUST_LOG=calc_session=trace` - Trace for this crate only
/// - Default: `config.log_filter`
///
/// Calling this when a global subscriber is already installed does nothing.
pub fn init_tracing(config: &SessionConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        debug!("Tracing subscriber not installed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        let config = SessionConfig::default();
        init_tracing(&config);
        init_tracing(&config);

        let session = CalculatorSession::new(&config);
        assert_eq!(session.press("5").unwrap().display, "5");
    }
}
