use async_trait::async_trait;
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

use crate::config::MediaConfig;
use crate::error::{Result, SubtitlerError};
use super::{AudioExtractor, MediaCommandBuilder};

/// Concrete implementation of audio extraction (FFmpeg-based)
pub struct FfmpegExtractor {
    config: MediaConfig,
    command_builder: MediaCommandBuilder,
}

impl FfmpegExtractor {
    /// Create a new ffmpeg-backed extractor
    pub fn new(config: MediaConfig) -> Self {
        let command_builder = MediaCommandBuilder::new(&config.binary_path);

        Self {
            config,
            command_builder,
        }
    }
}

#[async_trait]
impl AudioExtractor for FfmpegExtractor {
    /// Extract the audio track of a video into a 16kHz mono PCM file
    async fn extract_audio(&self, video_path: &Path, audio_path: &Path) -> Result<()> {
        info!(
            "Extracting audio from {} to {}",
            video_path.display(),
            audio_path.display()
        );

        let command = self.command_builder.extract_audio(video_path, audio_path);

        if let Err(err) = command.execute().await {
            // A failed run must not leave a truncated waveform behind that
            // downstream transcription could mistake for valid audio.
            if audio_path.exists() {
                if let Err(remove_err) = std::fs::remove_file(audio_path) {
                    warn!(
                        "Failed to remove partial audio file {}: {}",
                        audio_path.display(),
                        remove_err
                    );
                }
            }
            return Err(err);
        }

        info!("Audio extraction completed");
        Ok(())
    }

    /// Check if the media engine is available
    fn check_availability(&self) -> Result<()> {
        let output = Command::new(&self.config.binary_path)
            .arg("-version")
            .output()
            .map_err(|e| SubtitlerError::Extraction(format!("Media engine not found: {}", e)))?;

        if output.status.success() {
            info!("Media engine is available");
            Ok(())
        } else {
            Err(SubtitlerError::Extraction(
                "Media engine version check failed".to_string(),
            ))
        }
    }
}
