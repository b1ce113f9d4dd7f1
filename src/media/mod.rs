// Modular media processing architecture
//
// This module abstracts the external audio decode/encode engine:
// - Commands: ffmpeg argument assembly
// - Processor: FFmpeg-backed extractor implementation

pub mod commands;
pub mod processor;

use async_trait::async_trait;
use std::path::Path;

pub use commands::*;
pub use processor::*;

use crate::config::MediaConfig;
use crate::error::Result;

/// Main trait for audio extraction operations
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    /// Decode the audio track of a video file into a PCM waveform file
    async fn extract_audio(&self, video_path: &Path, audio_path: &Path) -> Result<()>;

    /// Check if the media engine is available
    fn check_availability(&self) -> Result<()>;
}

/// Factory for creating audio extractor instances
pub struct AudioExtractorFactory;

impl AudioExtractorFactory {
    /// Create the default extractor implementation (FFmpeg-based)
    pub fn create_extractor(config: MediaConfig) -> Box<dyn AudioExtractor> {
        Box::new(processor::FfmpegExtractor::new(config))
    }
}
