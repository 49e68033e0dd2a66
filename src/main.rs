//! Application entry point — Reading Coach.
//!
//! # Session flow
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the Whisper model.
//! 4. Enter to start recording, Enter again to stop.
//! 5. Assemble chunks into a 16 kHz mono buffer (exit early on no audio).
//! 6. Prompt for the optional reference sentence.
//! 7. Run [`pipeline::evaluate`] and print the report as plain console
//!    lines: duration, transcript, WPM, word count, accuracy, diagnosis.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use reading_coach::{
    audio::{assemble, AudioCapture, Recorder},
    config::{AppConfig, AppPaths},
    pipeline,
    stt::{TranscribeParams, WhisperEngine},
};

// ---------------------------------------------------------------------------
// Console helpers
// ---------------------------------------------------------------------------

/// Read one line from stdin, trimmed of the trailing newline.
fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Print `prompt` without a newline and wait for Enter.
fn wait_for_enter(prompt: &str) -> io::Result<()> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_line()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Whisper model
    let model_path = AppPaths::new()
        .models_dir
        .join(format!("{}.bin", config.stt.model));

    println!("Loading Whisper model...");
    let params = TranscribeParams {
        language: config.stt.language.clone(),
        ..TranscribeParams::default()
    };
    let engine = WhisperEngine::load(&model_path, params)
        .with_context(|| format!("could not load model at {}", model_path.display()))?;
    log::info!("Whisper model loaded: {}", model_path.display());

    // 4. Record between two Enter presses.
    wait_for_enter("\nPress Enter to start recording.")?;

    let capture = AudioCapture::new().context("audio input device unavailable")?;
    let recorder = Recorder::start(&capture).context("could not start recording")?;
    println!("Recording... Press Enter again to stop.");

    read_line()?;
    let chunks = recorder.stop();
    println!("Recording stopped.");

    // 5. Assemble — zero chunks is a terminal branch, not an error.
    let Some(audio) = assemble(chunks) else {
        println!("No audio recorded.");
        return Ok(());
    };
    println!("\nAudio duration: {:.2} seconds", audio.duration_secs());

    // 6. Reference sentence (optional; blank skips accuracy and diagnosis).
    println!("\nEnter the reference sentence (what the reader was supposed to say):");
    let reference = read_line()?;
    let reference = (!reference.trim().is_empty()).then_some(reference);

    // 7. Transcribe and report.
    let report = pipeline::evaluate(&engine, &audio, reference.as_deref())
        .context("assessment failed")?;

    println!("\nTranscription:\n{}", report.transcript);
    println!(
        "Words Per Minute: {:.2} WPM | Total Words Spoken: {}",
        report.speed.wpm, report.speed.word_count
    );

    match (report.accuracy, report.diagnosis) {
        (Some(accuracy), Some(diagnosis)) => {
            println!(
                "Accuracy: {:.2}% | Correct Words: {} out of {}",
                accuracy.clarity * 100.0,
                accuracy.correct_words,
                accuracy.reference_words
            );
            println!("\nScreening result:\n{diagnosis}");
        }
        _ => {
            println!("No reference text provided. Skipping accuracy and diagnosis.");
        }
    }

    Ok(())
}
