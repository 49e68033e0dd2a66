//! Audio pipeline — microphone capture → chunk collection → assembly.
//!
//! # Pipeline
//!
//! ```text
//! Microphone → cpal callback → AudioChunk (mpsc) → Recorder collector thread
//!           → Recorder::stop() → Vec<AudioChunk> → assemble → AudioBuffer
//! ```
//!
//! The collector drains the channel with a coarse 100 ms receive timeout and
//! exits when the recorder's stop flag is set; assembly happens only after
//! the collector has joined, so the producer and the drain never overlap.

pub mod assemble;
pub mod capture;
pub mod recorder;

pub use assemble::{assemble, resample_to_16k, stereo_to_mono, AudioBuffer, WHISPER_SAMPLE_RATE};
pub use capture::{AudioCapture, AudioChunk, CaptureError, StreamHandle};
pub use recorder::Recorder;
