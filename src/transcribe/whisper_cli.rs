use async_trait::async_trait;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use crate::config::TranscriberConfig;
use crate::error::{Result, SubtitlerError};
use super::Transcriber;
use super::common::{Segment, WhisperOutput};

/// Transcriber backed by the OpenAI whisper command line tool.
///
/// The model is loaded by the child process on every invocation; an in-run
/// cache keyed by model and device cannot outlive the process boundary.
pub struct WhisperCliTranscriber {
    config: TranscriberConfig,
}

impl WhisperCliTranscriber {
    pub fn new(config: TranscriberConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Transcriber for WhisperCliTranscriber {
    async fn transcribe(
        &self,
        audio_path: &Path,
        model: &str,
        prompt: Option<&str>,
    ) -> Result<Vec<Segment>> {
        info!(
            "Transcribing {} with model {} on {}",
            audio_path.display(),
            model,
            self.config.device
        );

        // Whisper writes its result files into an output directory, so
        // stage them in a throwaway one.
        let temp_dir = tempfile::tempdir().map_err(|e| {
            SubtitlerError::Transcription(format!("Failed to create temp directory: {}", e))
        })?;
        let output_dir = temp_dir.path();

        let mut cmd = Command::new(&self.config.binary_path);
        cmd.arg(audio_path)
            .arg("--model").arg(model)
            .arg("--device").arg(&self.config.device)
            .arg("--fp16").arg("True")
            .arg("--output_dir").arg(output_dir)
            .arg("--output_format").arg("json");

        if let Some(prompt) = prompt {
            cmd.arg("--initial_prompt").arg(prompt);
        }

        debug!("Executing whisper command: {:?}", cmd);

        let output = cmd.output().map_err(|e| {
            SubtitlerError::Transcription(format!("Failed to execute whisper: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SubtitlerError::Transcription(format!(
                "Whisper failed: {}",
                stderr
            )));
        }

        // Whisper names the JSON after the audio file stem
        let audio_stem = audio_path
            .file_stem()
            .ok_or_else(|| SubtitlerError::Transcription("Invalid audio filename".to_string()))?;
        let json_file = output_dir.join(format!("{}.json", audio_stem.to_string_lossy()));

        let json_content = std::fs::read_to_string(&json_file).map_err(|e| {
            SubtitlerError::Transcription(format!("Failed to read whisper output: {}", e))
        })?;

        let whisper_output: WhisperOutput = serde_json::from_str(&json_content).map_err(|e| {
            SubtitlerError::Transcription(format!("Failed to parse whisper JSON: {}", e))
        })?;

        Ok(whisper_output.into_segments())
    }
}
