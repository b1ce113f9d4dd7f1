//! Subtitler - Batch Subtitle Generation
//!
//! This is the main entry point for the subtitler binary, which generates
//! SRT subtitle files for video collections by extracting audio with ffmpeg
//! and transcribing it with whisper.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, rolling};

use subtitler::cli::Args;
use subtitler::config::Config;
use subtitler::error::SubtitlerError;
use subtitler::workflow::{RunSummary, Workflow};

#[tokio::main]
async fn main() -> ExitCode {
    let started = Instant::now();

    // Argument errors surface the usage text on stdout and a non-zero exit
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let informational = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            print!("{}", err);
            return if informational {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    // Validate the input path before anything touches the file system
    if !args.path.exists() {
        println!(
            "Error: {}",
            SubtitlerError::PathNotFound(args.path.display().to_string())
        );
        return ExitCode::FAILURE;
    }

    // Setup logging to both console and file
    if let Err(err) = setup_logging(args.verbose) {
        eprintln!("Failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }

    // Load configuration
    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path),
        None => {
            // Try to load config.toml from current directory first
            if Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")
            } else {
                Ok(Config::default())
            }
        }
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let workflow = Workflow::new(config);
    let prompt = args.prompt.as_deref();

    if args.path.is_file() {
        info!("Processing video file: {}", args.path.display());
        workflow.process_file(&args.path, &args.model, prompt).await;
    } else {
        info!("Processing directory: {}", args.path.display());
        let summary = workflow
            .process_directory(&args.path, &args.model, prompt)
            .await;
        print_summary(&summary);
    }

    let elapsed = started.elapsed().as_secs_f64();
    let minutes = (elapsed / 60.0) as u64;
    let seconds = elapsed % 60.0;
    println!(
        "\nTotal processing time: {} minutes {:.2} seconds",
        minutes, seconds
    );

    ExitCode::SUCCESS
}

/// Print the aggregate counts for a directory run
fn print_summary(summary: &RunSummary) {
    println!("\nProcessing complete!");
    println!("Total videos found: {}", summary.processed + summary.failed);
    println!("Successfully processed: {}", summary.processed);
    println!("Failed to process: {}", summary.failed);
    println!("Skipped non-video files: {}", summary.skipped);
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = std::env::current_dir()?.join(".subtitler").join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "subtitler.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Create console layer
    let console_layer = fmt::layer()
        .with_target(false);

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI colors in file

    // Setup layered subscriber
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    // Initialize the subscriber
    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
