//! Speech-rate metric — words per minute.

// ---------------------------------------------------------------------------
// ReadingSpeed
// ---------------------------------------------------------------------------

/// Speech rate derived from a transcript and the recording duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingSpeed {
    /// Words per minute.  Zero when the duration is not positive.
    pub wpm: f64,
    /// Number of whitespace-delimited words in the transcript.
    pub word_count: usize,
}

// ---------------------------------------------------------------------------
// word_count
// ---------------------------------------------------------------------------

/// Number of whitespace-delimited tokens in `text`.
///
/// Leading/trailing whitespace is irrelevant; `word_count("") == 0`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

// ---------------------------------------------------------------------------
// reading_speed
// ---------------------------------------------------------------------------

/// Compute words-per-minute for `transcript` read over `duration_secs`.
///
/// `wpm = word_count / duration_secs * 60`.  A non-positive duration yields
/// `wpm = 0.0` — a defined degenerate result, not an error — while the word
/// count is still reported.
pub fn reading_speed(transcript: &str, duration_secs: f64) -> ReadingSpeed {
    let word_count = word_count(transcript);
    let wpm = if duration_secs > 0.0 {
        word_count as f64 / duration_secs * 60.0
    } else {
        0.0
    };
    ReadingSpeed { wpm, word_count }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
