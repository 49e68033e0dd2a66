//! Reading-performance metrics.
//!
//! Three small, pure computations over the transcript:
//!
//! - [`reading_speed`] — words-per-minute and word count from the transcript
//!   and the recording duration.
//! - [`reading_accuracy`] — clarity score and correct-word count from a
//!   positional comparison against a reference sentence.
//! - [`classify`] — four-way heuristic [`Diagnosis`] from `(wpm, clarity)`.
//!
//! All three are deterministic functions of their inputs; nothing here
//! touches audio, the model, or the console.

pub mod accuracy;
pub mod classify;
pub mod speed;

pub use accuracy::{reading_accuracy, ReadingAccuracy};
pub use classify::{classify, Diagnosis, LOW_CLARITY_THRESHOLD, SLOW_WPM_THRESHOLD};
pub use speed::{reading_speed, word_count, ReadingSpeed};
