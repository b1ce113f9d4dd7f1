use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::error::{Result, SubtitlerError};
use crate::transcribe::Segment;

/// Generate SRT subtitle file from timed segments
pub async fn write_srt<P: AsRef<Path>>(segments: &[Segment], output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    info!("Generating SRT file: {}", output_path.display());

    let mut srt_content = String::new();

    for (index, segment) in segments.iter().enumerate() {
        let start_time = format_srt_time(segment.start);
        let end_time = format_srt_time(segment.end);

        srt_content.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            start_time,
            end_time,
            segment.text.trim()
        ));
    }

    fs::write(output_path, srt_content)
        .await
        .map_err(|e| SubtitlerError::Write(format!("{}: {}", output_path.display(), e)))?;

    info!("SRT file generated successfully");
    Ok(())
}

/// Format time in seconds to SRT time format (HH:MM:SS,mmm)
pub fn format_srt_time(seconds: f64) -> String {
    let total_milliseconds = (seconds * 1000.0) as u64;
    let hours = total_milliseconds / 3_600_000;
    let minutes = (total_milliseconds % 3_600_000) / 60_000;
    let secs = (total_milliseconds % 60_000) / 1_000;
    let millis = total_milliseconds % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(start: f64, end: f64, text: &str) -> Segment {
        Segment {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_format_srt_time() {
        assert_eq!(format_srt_time(0.0), "00:00:00,000");
        assert_eq!(format_srt_time(3661.5), "01:01:01,500");
        assert_eq!(format_srt_time(7200.25), "02:00:00,250");
    }

    #[test]
    fn test_format_srt_time_no_millisecond_overflow() {
        // Milliseconds derive from a single truncated value, so the
        // component can never render as 1000.
        let formatted = format_srt_time(59.9995);
        assert!(!formatted.contains(",1000"), "got {}", formatted);
        assert!(formatted.starts_with("00:00:59,"), "got {}", formatted);
    }

    #[tokio::test]
    async fn test_write_srt_preserves_order_and_indices() {
        let dir = tempfile::tempdir().unwrap();
        let srt_path = dir.path().join("out.srt");

        let segments = vec![segment(0.0, 1.5, "a"), segment(1.5, 3.0, "b")];
        write_srt(&segments, &srt_path).await.unwrap();

        let content = std::fs::read_to_string(&srt_path).unwrap();
        let expected = format!(
            "1\n{} --> {}\na\n\n2\n{} --> {}\nb\n\n",
            format_srt_time(0.0),
            format_srt_time(1.5),
            format_srt_time(1.5),
            format_srt_time(3.0)
        );
        assert_eq!(content, expected);
    }

    #[tokio::test]
    async fn test_write_srt_trims_text_and_keeps_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let srt_path = dir.path().join("out.srt");

        let segments = vec![segment(0.0, 2.0, "  こんにちは、世界  ")];
        write_srt(&segments, &srt_path).await.unwrap();

        let content = std::fs::read_to_string(&srt_path).unwrap();
        assert!(content.contains("\nこんにちは、世界\n"));
    }

    #[tokio::test]
    async fn test_write_srt_empty_segments() {
        let dir = tempfile::tempdir().unwrap();
        let srt_path = dir.path().join("empty.srt");

        write_srt(&[], &srt_path).await.unwrap();

        let content = std::fs::read_to_string(&srt_path).unwrap();
        assert!(content.is_empty());
    }

    #[tokio::test]
    async fn test_write_srt_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let srt_path = dir.path().join("missing").join("out.srt");

        let result = write_srt(&[segment(0.0, 1.0, "a")], &srt_path).await;
        assert!(matches!(result, Err(SubtitlerError::Write(_))));
    }
}
