//! Transcription parameter types.
//!
//! [`TranscribeParams`] carries all settings that control a single Whisper
//! inference run.

// ---------------------------------------------------------------------------
// SamplingStrategy
// ---------------------------------------------------------------------------

/// Mirrors `whisper_rs::SamplingStrategy` but is owned and `Clone`.
///
/// Use [`SamplingStrategy::Greedy`] for single-pass decoding (the default —
/// a short read-aloud clip does not benefit from beam search latency).
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingStrategy {
    /// Greedy (single-pass) decoding.
    Greedy {
        /// Number of candidate tokens evaluated per step.  1 is fastest.
        best_of: i32,
    },
    /// Beam-search decoding.
    BeamSearch {
        /// Number of beams to maintain in parallel.
        beam_size: i32,
        /// Beam-search patience factor (≥1.0 = standard beam search).
        patience: f32,
    },
}

impl Default for SamplingStrategy {
    fn default() -> Self {
        Self::Greedy { best_of: 1 }
    }
}

// ---------------------------------------------------------------------------
// TranscribeParams
// ---------------------------------------------------------------------------

/// All parameters for a single Whisper transcription run.
///
/// Build with [`TranscribeParams::default()`] for English and override fields
/// as needed:
///
/// ```
/// use reading_coach::stt::TranscribeParams;
///
/// let params = TranscribeParams {
///     language: "de".into(),
///     ..TranscribeParams::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct TranscribeParams {
    /// ISO-639-1 language code (e.g. `"en"`), or `"auto"` to let Whisper
    /// detect the language automatically.
    pub language: String,

    /// Decoding strategy — Greedy is fastest, BeamSearch is more accurate.
    pub strategy: SamplingStrategy,

    /// Number of CPU threads handed to Whisper.  Defaults to
    /// [`optimal_threads()`], capped at 8.
    pub n_threads: i32,

    /// Suppress Whisper's progress output to stderr so it does not mix with
    /// the console report.
    pub suppress_progress: bool,
}

impl Default for TranscribeParams {
    fn default() -> Self {
        Self {
            language: "en".into(),
            strategy: SamplingStrategy::default(),
            n_threads: optimal_threads(),
            suppress_progress: true,
        }
    }
}

/// Returns the number of CPU threads to use for inference, capped at 8 to
/// avoid diminishing returns on Whisper.
pub(crate) fn optimal_threads() -> i32 {
    std::thread::available_parallelism()
        .map(|n| n.get().min(8) as i32)
        .unwrap_or(4)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_english_greedy() {
        let params = TranscribeParams::default();
        assert_eq!(params.language, "en");
        assert_eq!(params.strategy, SamplingStrategy::Greedy { best_of: 1 });
        assert!(params.suppress_progress);
    }

    #[test]
    fn optimal_threads_is_positive_and_at_most_8() {
        let t = optimal_threads();
        assert!((1..=8).contains(&t));
    }
}
