use serde::{Deserialize, Serialize};

/// One timed span of recognized speech
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Whisper JSON output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperOutput {
    pub text: String,
    pub segments: Vec<WhisperSegment>,
    pub language: Option<String>,
}

/// Whisper JSON segment format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperSegment {
    pub id: u64,
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub tokens: Option<Vec<i64>>,
    pub temperature: Option<f64>,
    pub avg_logprob: Option<f64>,
    pub compression_ratio: Option<f64>,
    pub no_speech_prob: Option<f64>,
}

impl From<WhisperSegment> for Segment {
    fn from(seg: WhisperSegment) -> Self {
        Segment {
            start: seg.start,
            end: seg.end,
            text: seg.text,
        }
    }
}

impl WhisperOutput {
    /// Reduce the service-specific output to ordered segments, model order
    /// preserved as-is.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments.into_iter().map(Segment::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whisper_output() {
        let json = r#"{
            "text": " Hello world. Second line.",
            "segments": [
                {
                    "id": 0,
                    "seek": 0,
                    "start": 0.0,
                    "end": 2.4,
                    "text": " Hello world.",
                    "tokens": [50364, 2425, 1002, 13],
                    "temperature": 0.0,
                    "avg_logprob": -0.25,
                    "compression_ratio": 1.1,
                    "no_speech_prob": 0.02
                },
                {
                    "id": 1,
                    "start": 2.4,
                    "end": 4.0,
                    "text": " Second line."
                }
            ],
            "language": "en"
        }"#;

        let output: WhisperOutput = serde_json::from_str(json).unwrap();
        let segments = output.into_segments();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].end, 2.4);
        assert_eq!(segments[0].text, " Hello world.");
        assert_eq!(segments[1].text, " Second line.");
    }
}
