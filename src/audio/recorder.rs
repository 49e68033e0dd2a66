//! Recording session — capture worker with an explicit stop signal.
//!
//! [`Recorder`] ties a live [`StreamHandle`] to a collector thread that
//! accumulates [`AudioChunk`]s in arrival order.  The collector polls the
//! channel with a coarse 100 ms timeout instead of busy-waiting, and exits
//! when the stop flag is set (or the producer side disconnects).
//!
//! ```text
//! cpal callback ──AudioChunk──▶ mpsc channel ──▶ collector thread (Vec)
//!                                                      ▲
//! Recorder::stop(): drop stream, set flag, join ───────┘
//! ```
//!
//! Because [`Recorder::stop`] drops the stream handle *before* joining the
//! collector, the producer is silent by the time the final drain runs, so
//! the returned chunk list is complete.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::capture::{AudioCapture, AudioChunk, CaptureError, StreamHandle};

/// How often the collector wakes up to check the stop flag.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(100);

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

/// An in-progress recording.
///
/// Created with [`Recorder::start`]; consumed by [`Recorder::stop`], which
/// returns every chunk captured during the session in arrival order.
pub struct Recorder {
    stop: Arc<AtomicBool>,
    collector: JoinHandle<Vec<AudioChunk>>,
    stream: StreamHandle,
}

impl Recorder {
    /// Begin recording from `capture`.
    ///
    /// Starts the cpal stream and spawns the `audio-collector` thread.
    ///
    /// # Errors
    ///
    /// Propagates [`CaptureError`] when the stream cannot be built or
    /// started.
    pub fn start(capture: &AudioCapture) -> Result<Self, CaptureError> {
        let (tx, rx) = mpsc::channel::<AudioChunk>();
        let stream = capture.start(tx)?;

        let stop = Arc::new(AtomicBool::new(false));
        let collector = spawn_collector(rx, Arc::clone(&stop));

        log::debug!(
            "recording started ({} Hz, {} ch)",
            capture.sample_rate(),
            capture.channels()
        );

        Ok(Self {
            stop,
            collector,
            stream,
        })
    }

    /// Stop recording and return the captured chunks in arrival order.
    ///
    /// Tears down in producer-first order: the stream handle is dropped (no
    /// more callbacks fire), then the stop flag is raised and the collector
    /// joined.  The collector performs a final non-blocking drain before
    /// exiting, so chunks delivered between the signal and the teardown are
    /// not lost.
    pub fn stop(self) -> Vec<AudioChunk> {
        let Self {
            stop,
            collector,
            stream,
        } = self;

        drop(stream);
        stop.store(true, Ordering::Relaxed);

        match collector.join() {
            Ok(chunks) => {
                log::debug!("recording stopped: {} chunks collected", chunks.len());
                chunks
            }
            Err(_) => {
                log::warn!("audio-collector thread panicked; treating as no audio");
                Vec::new()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Collector thread
// ---------------------------------------------------------------------------

/// Spawn the thread that accumulates chunks until `stop` is set.
///
/// Factored out of [`Recorder::start`] so the collection loop can be tested
/// with a plain channel, without a physical audio device.
fn spawn_collector(rx: Receiver<AudioChunk>, stop: Arc<AtomicBool>) -> JoinHandle<Vec<AudioChunk>> {
    thread::Builder::new()
        .name("audio-collector".into())
        .spawn(move || {
            let mut chunks = Vec::new();

            while !stop.load(Ordering::Relaxed) {
                match rx.recv_timeout(STOP_POLL_INTERVAL) {
                    Ok(chunk) => chunks.push(chunk),
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            // Final drain: anything sent before the producer went quiet.
            while let Ok(chunk) = rx.try_recv() {
                chunks.push(chunk);
            }

            chunks
        })
        .expect("failed to spawn audio-collector thread")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(samples: &[f32]) -> AudioChunk {
        AudioChunk {
            samples: samples.to_vec(),
            sample_rate: 16_000,
            channels: 1,
        }
    }

    #[test]
    fn collector_preserves_arrival_order() {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let handle = spawn_collector(rx, Arc::clone(&stop));

        tx.send(chunk(&[1.0, 2.0])).unwrap();
        tx.send(chunk(&[3.0, 4.0])).unwrap();
        tx.send(chunk(&[5.0])).unwrap();

        // Producer goes quiet first, then the stop flag is raised.
        drop(tx);
        stop.store(true, Ordering::Relaxed);

        let chunks = handle.join().unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].samples, vec![1.0, 2.0]);
        assert_eq!(chunks[1].samples, vec![3.0, 4.0]);
        assert_eq!(chunks[2].samples, vec![5.0]);
    }

    #[test]
    fn collector_with_no_chunks_returns_empty() {
        let (tx, rx) = mpsc::channel::<AudioChunk>();
        let stop = Arc::new(AtomicBool::new(false));
        let handle = spawn_collector(rx, Arc::clone(&stop));

        drop(tx);
        stop.store(true, Ordering::Relaxed);

        let chunks = handle.join().unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn collector_exits_when_sender_disconnects() {
        let (tx, rx) = mpsc::channel::<AudioChunk>();
        // Stop flag never set: disconnect alone must end the loop.
        let stop = Arc::new(AtomicBool::new(false));
        let handle = spawn_collector(rx, stop);

        tx.send(chunk(&[0.5])).unwrap();
        drop(tx);

        let chunks = handle.join().unwrap();
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn collector_drains_chunks_sent_before_stop() {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(true)); // stop already raised

        // Chunks queued before the collector even starts must survive via
        // the final drain.
        tx.send(chunk(&[1.0])).unwrap();
        tx.send(chunk(&[2.0])).unwrap();

        let handle = spawn_collector(rx, stop);
        let chunks = handle.join().unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].samples, vec![1.0]);
        assert_eq!(chunks[1].samples, vec![2.0]);
    }
}
