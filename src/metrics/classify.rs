//! Heuristic dyslexia-screening classifier.
//!
//! A fixed decision table over `(wpm, clarity)`.  This is a screening
//! heuristic with hard-coded thresholds, not a calibrated or learned model.

use std::fmt;

/// Reading slower than this many words per minute is flagged as slow.
pub const SLOW_WPM_THRESHOLD: f64 = 80.0;

/// Clarity below this score is flagged as inaccurate / mismatched.
pub const LOW_CLARITY_THRESHOLD: f64 = 0.6;

// ---------------------------------------------------------------------------
// Diagnosis
// ---------------------------------------------------------------------------

/// Outcome of the screening heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    /// Both slow and inaccurate.
    SlowAndInaccurate,
    /// Slow but acceptably clear.
    SlowReading,
    /// Normal pace but low clarity.
    PronunciationMismatch,
    /// Neither threshold tripped.
    Normal,
}

impl Diagnosis {
    /// Human-readable screening message for the console report.
    pub fn message(&self) -> &'static str {
        match self {
            Diagnosis::SlowAndInaccurate => {
                "Possible signs of dyslexia: slow and inaccurate reading."
            }
            Diagnosis::SlowReading => "Reading is slow; might indicate dyslexia symptoms.",
            Diagnosis::PronunciationMismatch => {
                "Pronunciation mismatch; potential dyslexia symptoms."
            }
            Diagnosis::Normal => "Speech speed and clarity seem normal.",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

/// Map `(wpm, clarity)` to a [`Diagnosis`].
///
/// Evaluated in precedence order: the combined slow-and-inaccurate case wins
/// over either single flag, and slowness is checked before clarity.
pub fn classify(wpm: f64, clarity: f64) -> Diagnosis {
    let slow = wpm < SLOW_WPM_THRESHOLD;
    let unclear = clarity < LOW_CLARITY_THRESHOLD;

    match (slow, unclear) {
        (true, true) => Diagnosis::SlowAndInaccurate,
        (true, false) => Diagnosis::SlowReading,
        (false, true) => Diagnosis::PronunciationMismatch,
        (false, false) => Diagnosis::Normal,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
