use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Video file or directory to process
    pub path: PathBuf,

    /// Whisper model tier (tiny, base, small, medium, large)
    #[arg(default_value = "medium")]
    pub model: String,

    /// Priming prompt to bias the recognition vocabulary
    pub prompt: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
