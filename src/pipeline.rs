//! Assessment pipeline — transcription plus metric computation.
//!
//! [`evaluate`] is the terminal-free core of the program: given an assembled
//! [`AudioBuffer`], an [`SttEngine`], and an optional reference sentence, it
//! produces a [`ReadingReport`].  The interactive binary is a thin wrapper
//! around this function, so the whole pipeline is testable with
//! `MockSttEngine` and synthetic buffers.
//!
//! ```text
//! AudioBuffer ──▶ SttEngine::transcribe ──▶ reading_speed ─┐
//!                                                          ├─▶ ReadingReport
//!          reference? ──▶ reading_accuracy ──▶ classify ───┘
//! ```

use crate::audio::AudioBuffer;
use crate::metrics::{
    classify, reading_accuracy, reading_speed, Diagnosis, ReadingAccuracy, ReadingSpeed,
};
use crate::stt::{SttEngine, SttError};

// ---------------------------------------------------------------------------
// ReadingReport
// ---------------------------------------------------------------------------

/// Everything the assessment produced for one recording.
///
/// `accuracy` and `diagnosis` are `None` when no reference sentence was
/// provided — skipping them is an expected branch, not an error.
#[derive(Debug, Clone)]
pub struct ReadingReport {
    /// Recording duration in seconds, derived from the sample count.
    pub duration_secs: f64,
    /// Trimmed transcript returned by the STT engine.
    pub transcript: String,
    /// Words-per-minute and word count.
    pub speed: ReadingSpeed,
    /// Clarity score against the reference sentence, when one was given.
    pub accuracy: Option<ReadingAccuracy>,
    /// Heuristic screening result; present exactly when `accuracy` is.
    pub diagnosis: Option<Diagnosis>,
}

// ---------------------------------------------------------------------------
// evaluate
// ---------------------------------------------------------------------------

/// Run the full assessment over an assembled recording.
///
/// A `reference` that is `None` or blank after trimming skips the accuracy
/// metric and the diagnosis.  The duration fed into the speed metric is the
/// audio duration of the buffer, not inference wall time.
///
/// # Errors
///
/// Propagates [`SttError`] from the engine (missing model, audio outside the
/// engine's length contract, inference failure).
pub fn evaluate(
    engine: &dyn SttEngine,
    audio: &AudioBuffer,
    reference: Option<&str>,
) -> Result<ReadingReport, SttError> {
    let duration_secs = audio.duration_secs();

    let transcript = engine.transcribe(audio.samples())?;
    log::debug!(
        "transcribed {:.2}s of audio into {} chars",
        duration_secs,
        transcript.len()
    );

    let speed = reading_speed(&transcript, duration_secs);

    let reference = reference.map(str::trim).filter(|r| !r.is_empty());
    let (accuracy, diagnosis) = match reference {
        Some(reference) => {
            let accuracy = reading_accuracy(reference, &transcript);
            let diagnosis = classify(speed.wpm, accuracy.clarity);
            (Some(accuracy), Some(diagnosis))
        }
        None => (None, None),
    };

    Ok(ReadingReport {
        duration_secs,
        transcript,
        speed,
        accuracy,
        diagnosis,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stt::MockSttEngine;

    /// One second of silence — satisfies the engine's minimum-length contract.
    fn one_second_buffer() -> AudioBuffer {
        AudioBuffer::from_samples(vec![0.0_f32; 16_000])
    }

    #[test]
    fn report_without_reference_skips_accuracy_and_diagnosis() {
        let engine = MockSttEngine::ok("the cat sat");
        let report = evaluate(&engine, &one_second_buffer(), None).unwrap();

        assert_eq!(report.transcript, "the cat sat");
        assert_eq!(report.speed.word_count, 3);
        assert!(report.accuracy.is_none());
        assert!(report.diagnosis.is_none());
    }

    #[test]
    fn blank_reference_is_treated_as_absent() {
        let engine = MockSttEngine::ok("words");
        let report = evaluate(&engine, &one_second_buffer(), Some("   ")).unwrap();
        assert!(report.accuracy.is_none());
        assert!(report.diagnosis.is_none());
    }

    #[test]
    fn duration_comes_from_the_buffer() {
        let engine = MockSttEngine::ok("one two three");
        // 2 s of audio → 3 words → 90 WPM
        let buffer = AudioBuffer::from_samples(vec![0.0_f32; 32_000]);
        let report = evaluate(&engine, &buffer, None).unwrap();

        assert!((report.duration_secs - 2.0).abs() < 1e-9);
        assert!((report.speed.wpm - 90.0).abs() < 1e-9);
    }

    #[test]
    fn reference_produces_accuracy_and_diagnosis() {
        let engine = MockSttEngine::ok("the dog sat");
        let report = evaluate(&engine, &one_second_buffer(), Some("the cat sat")).unwrap();

        let accuracy = report.accuracy.expect("reference given");
        assert_eq!(accuracy.correct_words, 2);
        assert!((accuracy.clarity - (1.0 - 1.0 / 3.0)).abs() < 1e-9);

        // 3 words in 1 s = 180 WPM, clarity ≈ 0.667 → Normal
        assert_eq!(report.diagnosis, Some(Diagnosis::Normal));
    }

    #[test]
    fn slow_inaccurate_reading_is_flagged() {
        // 1 matching word of 4 over 8 s → 30 WPM, clarity clamps low.
        let engine = MockSttEngine::ok("the mumble mumble mumble");
        let buffer = AudioBuffer::from_samples(vec![0.0_f32; 16_000 * 8]);
        let report = evaluate(&engine, &buffer, Some("the cat sat down")).unwrap();

        assert_eq!(report.diagnosis, Some(Diagnosis::SlowAndInaccurate));
    }

    #[test]
    fn stt_errors_propagate() {
        let engine = MockSttEngine::err(SttError::Transcription("boom".into()));
        let err = evaluate(&engine, &one_second_buffer(), None).unwrap_err();
        assert!(matches!(err, SttError::Transcription(_)));
    }

    #[test]
    fn short_buffer_hits_the_engine_length_contract() {
        let engine = MockSttEngine::ok("ignored");
        let buffer = AudioBuffer::from_samples(vec![0.0_f32; 100]);
        let err = evaluate(&engine, &buffer, None).unwrap_err();
        assert!(matches!(err, SttError::AudioTooShort));
    }
}
