use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::media::{AudioExtractor, AudioExtractorFactory};
use crate::subtitle::write_srt;
use crate::transcribe::{Transcriber, TranscriberFactory};

/// File extensions recognized as candidate videos
const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "mkv", "avi", "mov", "flv", "wmv"];

/// Fixed name of the transient decoded-audio file, created next to the video.
/// Not unique per file; safe only because files are processed one at a time.
const TEMP_AUDIO_NAME: &str = "temp_audio.wav";

/// Terminal outcome of processing one video file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Subtitles were generated and written
    Processed,
    /// A subtitle file already existed, nothing was done
    SkippedExisting,
    /// Extraction, transcription or writing failed
    Failed,
}

/// Aggregate counts for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: u64,
    pub failed: u64,
    pub skipped: u64,
}

impl RunSummary {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            // An existing subtitle counts as handled, same as a fresh one
            FileOutcome::Processed | FileOutcome::SkippedExisting => self.processed += 1,
            FileOutcome::Failed => self.failed += 1,
        }
    }
}

pub struct Workflow {
    extractor: Box<dyn AudioExtractor>,
    transcriber: Box<dyn Transcriber>,
}

impl Workflow {
    pub fn new(config: Config) -> Self {
        let extractor = AudioExtractorFactory::create_extractor(config.media.clone());
        let transcriber = TranscriberFactory::create_default(config.transcriber.clone());

        // A missing engine is not fatal here; each extraction will fail and
        // be counted against the file it belongs to.
        if let Err(err) = extractor.check_availability() {
            warn!("Media engine unavailable: {}", err);
        }

        Self {
            extractor,
            transcriber,
        }
    }

    /// Run the per-file pipeline: skip if already subtitled, extract audio,
    /// transcribe, write the SRT, then drop the temp audio.
    pub async fn process_file(
        &self,
        video_path: &Path,
        model: &str,
        prompt: Option<&str>,
    ) -> FileOutcome {
        info!("Processing: {}", video_path.display());

        let srt_path = subtitle_path(video_path);
        if srt_path.exists() {
            info!("Subtitles already exist: {}", srt_path.display());
            return FileOutcome::SkippedExisting;
        }

        let audio_path = temp_audio_path(video_path);
        if let Err(err) = self.extractor.extract_audio(video_path, &audio_path).await {
            warn!(
                "Failed to extract audio from {}: {}",
                video_path.display(),
                err
            );
            return FileOutcome::Failed;
        }

        let outcome = match self.transcriber.transcribe(&audio_path, model, prompt).await {
            Ok(segments) => match write_srt(&segments, &srt_path).await {
                Ok(()) => {
                    info!("Successfully created subtitles: {}", srt_path.display());
                    FileOutcome::Processed
                }
                Err(err) => {
                    warn!(
                        "Failed to write subtitles for {}: {}",
                        video_path.display(),
                        err
                    );
                    FileOutcome::Failed
                }
            },
            Err(err) => {
                warn!("Failed to transcribe {}: {}", video_path.display(), err);
                FileOutcome::Failed
            }
        };

        // The temp audio goes away on every path once extraction succeeded
        if let Err(err) = fs::remove_file(&audio_path).await {
            warn!(
                "Failed to remove temporary audio {}: {}",
                audio_path.display(),
                err
            );
        }

        outcome
    }

    /// Recursively process all candidate videos under a directory,
    /// strictly one file at a time.
    pub async fn process_directory(
        &self,
        root: &Path,
        model: &str,
        prompt: Option<&str>,
    ) -> RunSummary {
        info!("Scanning directory: {}", root.display());

        let mut summary = RunSummary::default();
        let mut candidates = Vec::new();

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            if is_video_file(entry.path()) {
                candidates.push(entry.path().to_path_buf());
            } else {
                summary.skipped += 1;
            }
        }

        info!("Found {} video files to process", candidates.len());

        let progress = ProgressBar::new(candidates.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );

        for video_path in candidates {
            let name = video_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            progress.set_message(name);

            let outcome = self.process_file(&video_path, model, prompt).await;
            summary.record(outcome);
            progress.inc(1);
        }

        progress.finish_and_clear();

        summary
    }
}

/// Expected subtitle path for a video (same base name, srt extension)
pub fn subtitle_path(video_path: &Path) -> PathBuf {
    video_path.with_extension("srt")
}

/// Transient decoded-audio path, co-located with the source video
pub fn temp_audio_path(video_path: &Path) -> PathBuf {
    video_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(TEMP_AUDIO_NAME)
}

/// Check whether a file's extension is on the video allow-list
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
