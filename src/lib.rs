//! Reading Coach — read-aloud assessment from live microphone audio.
//!
//! # Pipeline
//!
//! ```text
//! Microphone → cpal callback → AudioChunk (mpsc) → Recorder (collector)
//!           → assemble (mono, 16 kHz) → SttEngine::transcribe
//!           → {reading_speed, reading_accuracy} → classify → ReadingReport
//! ```
//!
//! The library exposes every stage so the pipeline can be driven and tested
//! without a terminal or a physical audio device; the binary in `main.rs` is
//! thin interactive glue (prompts and plain console output).

pub mod audio;
pub mod config;
pub mod metrics;
pub mod pipeline;
pub mod stt;
