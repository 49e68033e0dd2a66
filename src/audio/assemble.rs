//! Chunk assembly — concatenation, channel downmix, and resampling.
//!
//! The Whisper STT engine requires **16 kHz mono `f32`** audio.  After a
//! recording stops, [`assemble`] turns the collected [`AudioChunk`]s into a
//! single contiguous [`AudioBuffer`] in that format, preserving arrival
//! order.  An empty chunk list yields `None` — "no audio" is a distinct
//! terminal case for the caller, not an error.

use super::capture::AudioChunk;

/// Sample rate (Hz) required by the Whisper engine.
pub const WHISPER_SAMPLE_RATE: u32 = 16_000;

// ---------------------------------------------------------------------------
// AudioBuffer
// ---------------------------------------------------------------------------

/// A complete recording: contiguous mono `f32` samples at 16 kHz.
///
/// Sample order equals the real-time arrival order of the source chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
}

impl AudioBuffer {
    /// Wrap raw 16 kHz mono samples.
    pub fn from_samples(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// The samples, in arrival order.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Recording duration in seconds (samples / 16 000).
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / WHISPER_SAMPLE_RATE as f64
    }
}

// ---------------------------------------------------------------------------
// assemble
// ---------------------------------------------------------------------------

/// Concatenate `chunks` into one 16 kHz mono [`AudioBuffer`].
///
/// Each chunk is downmixed to mono and resampled to 16 kHz before being
/// appended, so chunks from a 48 kHz stereo device and a 16 kHz mono device
/// land in the same canonical format.  Chunk order is preserved.
///
/// Returns `None` when `chunks` is empty.  Callers must treat that as the
/// "no audio recorded" terminal branch rather than an error.
pub fn assemble(chunks: Vec<AudioChunk>) -> Option<AudioBuffer> {
    if chunks.is_empty() {
        return None;
    }

    let mut samples = Vec::new();
    for chunk in chunks {
        let mono = stereo_to_mono(&chunk.samples, chunk.channels);
        if chunk.sample_rate == WHISPER_SAMPLE_RATE {
            samples.extend_from_slice(&mono);
        } else {
            samples.extend_from_slice(&resample_to_16k(&mono, chunk.sample_rate));
        }
    }

    Some(AudioBuffer::from_samples(samples))
}

// ---------------------------------------------------------------------------
// stereo_to_mono
// ---------------------------------------------------------------------------

/// Mix interleaved multi-channel audio down to mono by averaging all channels.
///
/// The output length is `samples.len() / channels`.
///
/// * If `channels == 1` the input slice is returned as an owned `Vec` with no
///   averaging (fast path — avoids the per-frame loop when already mono).
/// * If `channels == 0` an empty vector is returned.
///
/// # Example
///
/// ```rust
/// use reading_coach::audio::stereo_to_mono;
///
/// let stereo = vec![0.5_f32, -0.5, 0.2, -0.2]; // L R L R
/// let mono = stereo_to_mono(&stereo, 2);
/// assert_eq!(mono.len(), 2);
/// assert!((mono[0] - 0.0).abs() < 1e-6);
/// assert!((mono[1] - 0.0).abs() < 1e-6);
/// ```
pub fn stereo_to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    match channels {
        0 => Vec::new(),
        1 => samples.to_vec(),
        n => {
            let n = n as usize;
            samples
                .chunks_exact(n)
                .map(|frame| frame.iter().sum::<f32>() / n as f32)
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// resample_to_16k
// ---------------------------------------------------------------------------

/// Resample `samples` from `source_rate` Hz to 16 000 Hz using linear
/// interpolation.
///
/// * If `source_rate` is already `16_000` the input is cloned and returned
///   unchanged.
/// * If `samples` is empty an empty vector is returned.
///
/// The output length is approximately
/// `samples.len() * 16_000 / source_rate`.
pub fn resample_to_16k(samples: &[f32], source_rate: u32) -> Vec<f32> {
    if source_rate == WHISPER_SAMPLE_RATE {
        return samples.to_vec();
    }

    if samples.is_empty() {
        return Vec::new();
    }

    let ratio = WHISPER_SAMPLE_RATE as f64 / source_rate as f64;
    let output_len = (samples.len() as f64 * ratio).ceil() as usize;
    let mut output = Vec::with_capacity(output_len);

    for i in 0..output_len {
        let src_pos = i as f64 / ratio;
        let idx = src_pos as usize;
        let frac = src_pos - idx as f64;

        let sample = if idx + 1 < samples.len() {
            // Linear interpolation between adjacent samples
            samples[idx] * (1.0 - frac as f32) + samples[idx + 1] * frac as f32
        } else if idx < samples.len() {
            samples[idx]
        } else {
            0.0
        };

        output.push(sample);
    }

    output
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
