//! # Tape
//!
//! A bounded record of resolved computations, like the paper roll of a desk
//! calculator.
//!
//! ```text
//!   5 + 3          = 8
//!   8 × 2          = 16
//!   16 ÷ 0         = Cannot divide by zero
//! ```
//!
//! Entries are appended whenever equals or a chained operator resolves a
//! pending `total op next`. When the tape is full the oldest entry is dropped.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One resolved computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapeEntry {
    /// Expression that was resolved, e.g. `"5 + 3"`.
    pub expression: String,

    /// Display text of the result, or the error message.
    pub result: String,

    /// Whether the resolution failed.
    pub is_error: bool,

    /// When the computation was resolved
    pub resolved_at: DateTime<Utc>,
}

/// Bounded tape of [`TapeEntry`] values.
#[derive(Debug, Clone, Default)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    limit: usize,
}

impl Tape {
    /// Creates an empty tape holding at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Tape {
            entries: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    /// Appends an entry, dropping the oldest when full.
    ///
    /// A tape with a limit of zero records nothing.
    pub fn record(&mut self, expression: String, result: String, is_error: bool) {
        if self.limit == 0 {
            return;
        }

        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }

        self.entries.push_back(TapeEntry {
            expression,
            result,
            is_error,
            resolved_at: Utc::now(),
        });
    }

    /// Returns the entries, oldest first.
    pub fn entries(&self) -> Vec<TapeEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut tape = Tape::new(10);
        tape.record("5 + 3".to_string(), "8".to_string(), false);
        tape.record("8 × 2".to_string(), "16".to_string(), false);

        let results: Vec<String> = tape.entries().into_iter().map(|e| e.result).collect();
        assert_eq!(results, vec!["8", "16"]);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut tape = Tape::new(2);
        for i in 0..5 {
            tape.record(format!("{} + 0", i), i.to_string(), false);
        }

        assert_eq!(tape.len(), 2);
        let results: Vec<String> = tape.entries().into_iter().map(|e| e.result).collect();
        assert_eq!(results, vec!["3", "4"]);
    }

    #[test]
    fn test_zero_limit_disables_tape() {
        let mut tape = Tape::new(0);
        tape.record("1 + 1".to_string(), "2".to_string(), false);
        assert!(tape.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut tape = Tape::new(3);
        tape.record("1 ÷ 0".to_string(), "Cannot divide by zero".to_string(), true);
        assert!(tape.entries()[0].is_error);

        tape.clear();
        assert!(tape.is_empty());
    }
}
