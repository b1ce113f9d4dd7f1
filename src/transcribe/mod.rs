// Modular transcription architecture
//
// Transcription runs behind a trait seam with a factory selecting the
// concrete service, so the workflow can be exercised against fakes in tests
// and other speech services can be added later:
// 1. Create service-specific data structures for parsing its output
// 2. Map them to Segment in a new implementation module
// 3. Add the service to TranscriberImplementation
// 4. Update the factory to create your implementation

pub mod common;
pub mod whisper_cli;

use async_trait::async_trait;
use std::path::Path;

pub use common::*;

use crate::config::TranscriberConfig;
use crate::error::Result;

/// Main trait for transcription operations
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio file into ordered timed segments
    async fn transcribe(
        &self,
        audio_path: &Path,
        model: &str,
        prompt: Option<&str>,
    ) -> Result<Vec<Segment>>;
}

/// Transcriber implementation type
#[derive(Debug, Clone)]
pub enum TranscriberImplementation {
    WhisperCli,
    // Future implementations can be added here:
    // WhisperCpp,
    // Azure,
}

/// Factory for creating transcriber instances
pub struct TranscriberFactory;

impl TranscriberFactory {
    /// Create a transcriber based on implementation type
    pub fn create_transcriber(
        implementation: TranscriberImplementation,
        config: TranscriberConfig,
    ) -> Box<dyn Transcriber> {
        match implementation {
            TranscriberImplementation::WhisperCli => {
                Box::new(whisper_cli::WhisperCliTranscriber::new(config))
            }
        }
    }

    /// Create with the default implementation
    pub fn create_default(config: TranscriberConfig) -> Box<dyn Transcriber> {
        Self::create_transcriber(TranscriberImplementation::WhisperCli, config)
    }
}
