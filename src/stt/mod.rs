//! STT (Speech-to-Text) engine module.
//!
//! [`SttEngine`] is the object-safe interface the pipeline consumes;
//! [`WhisperEngine`] is the production implementation backed by a local
//! GGML model via `whisper_rs`.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use reading_coach::stt::{SttEngine, TranscribeParams, WhisperEngine};
//!
//! let params = TranscribeParams::default(); // language = "en", Greedy { best_of: 1 }
//! let engine = WhisperEngine::load("models/ggml-base.en.bin", params)
//!     .expect("model file missing");
//!
//! // audio: 16 kHz, mono, f32 PCM from the audio module
//! let audio: Vec<f32> = vec![0.0; 16_000]; // 1 s of silence
//! let text = engine.transcribe(&audio).unwrap();
//! println!("{text}");
//! ```

pub mod engine;
pub mod transcribe;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use engine::{SttEngine, SttError, WhisperEngine};
pub use transcribe::{SamplingStrategy, TranscribeParams};

// test-only re-export so other test modules can import MockSttEngine
// without `use reading_coach::stt::engine::MockSttEngine`.
#[cfg(test)]
pub use engine::MockSttEngine;
