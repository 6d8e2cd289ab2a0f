mod assemble;
mod classify;
mod config;
mod error;
mod landmarks;
mod pipeline;
mod suggest;

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use classify::{ClassifyError, CoarseClassifier, SkeletonCanvas};
use config::Config;
use error::{AppError, Result};
use landmarks::Point;
use pipeline::Pipeline;
use suggest::WordListSuggester;

/// One recorded frame of a capture session: landmark points plus the
/// probabilities the coarse model emitted for them at capture time.
#[derive(Debug, Deserialize)]
struct SessionFrame {
    points: Vec<[i32; 2]>,
    probs: Vec<f32>,
}

/// Replays recorded model output instead of running a live model.
struct ReplayClassifier {
    probs: VecDeque<Vec<f32>>,
}

impl ReplayClassifier {
    fn new(probs: Vec<Vec<f32>>) -> Self {
        Self {
            probs: probs.into(),
        }
    }
}

impl CoarseClassifier for ReplayClassifier {
    fn predict(&mut self, _canvas: &SkeletonCanvas) -> std::result::Result<Vec<f32>, ClassifyError> {
        self.probs.pop_front().ok_or_else(|| ClassifyError::Unavailable {
            details: "replay session exhausted".to_string(),
        })
    }
}

fn load_session(path: &Path) -> Result<Vec<SessionFrame>> {
    let contents = fs::read_to_string(path)?;
    let mut frames = Vec::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        frames.push(serde_json::from_str(line)?);
    }
    Ok(frames)
}

fn run_session(frames: Vec<SessionFrame>, suggester: WordListSuggester) -> Result<String> {
    let probs = frames.iter().map(|f| f.probs.clone()).collect();
    let classifier = ReplayClassifier::new(probs);
    let mut pipeline = Pipeline::new(classifier, suggester);

    let total = frames.len();
    let mut failed = 0usize;
    let mut last_error = None;
    for (i, session_frame) in frames.into_iter().enumerate() {
        let points: Vec<Point> = session_frame
            .points
            .iter()
            .map(|p| Point::new(p[0], p[1]))
            .collect();
        match pipeline.process_frame(&points) {
            Ok(update) => {
                debug!(frame = i, symbol = %update.symbol, text = %update.text, "frame replayed");
                if !update.suggestions.is_empty() {
                    debug!(frame = i, suggestions = ?update.suggestions, "completions");
                }
            }
            Err(e) => {
                warn!(frame = i, "skipping frame: {}", e);
                failed += 1;
                last_error = Some(e);
            }
        }
    }

    if let Some(e) = last_error {
        if failed == total && total > 0 {
            return Err(AppError::from(e));
        }
    }

    info!(frames = total, skipped = failed, "session replayed");
    Ok(pipeline.text().to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load();
    info!(config = %config.config_path.display(), "signtext starting");

    let session_path = std::env::args()
        .nth(1)
        .ok_or_else(|| AppError::from("usage: signtext <session.jsonl>".to_string()))?;

    let suggester = match &config.dictionary_path {
        Some(path) => WordListSuggester::from_file(path)
            .map_err(|e| AppError::Config(format!("dictionary {}: {}", path.display(), e)))?,
        None => WordListSuggester::new(),
    };

    let frames = load_session(Path::new(&session_path))?;
    if frames.is_empty() {
        return Err(AppError::Session(format!(
            "no frames in {}",
            session_path
        )));
    }

    let text = run_session(frames, suggester)?;
    println!("{}", text.trim());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_replay_classifier_exhaustion() {
        let mut classifier = ReplayClassifier::new(vec![vec![0.125; 8]]);
        let frame = landmarks::LandmarkFrame::from_points(&vec![
            Point::new(200, 200);
            landmarks::LANDMARK_COUNT
        ])
        .unwrap();
        let canvas = SkeletonCanvas::render(&frame);
        assert!(classifier.predict(&canvas).is_ok());
        assert!(matches!(
            classifier.predict(&canvas),
            Err(ClassifyError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_load_session_skips_blank_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.jsonl");
        let mut file = fs::File::create(&path).unwrap();
        let line = format!(
            "{{\"points\": {:?}, \"probs\": [0.125,0.125,0.125,0.125,0.125,0.125,0.125,0.125]}}",
            vec![[200, 200]; 21]
        );
        writeln!(file, "{}", line).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{}", line).unwrap();

        let frames = load_session(&path).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].points.len(), 21);
    }

    #[test]
    fn test_load_session_rejects_malformed_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.jsonl");
        fs::write(&path, "not json\n").unwrap();
        assert!(matches!(load_session(&path), Err(AppError::Session(_))));
    }

    #[test]
    fn test_run_session_survives_bad_frames() {
        // Second frame is short on landmarks; the session still finishes.
        let good = SessionFrame {
            points: vec![[200, 200]; 21],
            probs: vec![0.125; 8],
        };
        let bad = SessionFrame {
            points: vec![[200, 200]; 5],
            probs: vec![0.125; 8],
        };
        let text = run_session(
            vec![
                good,
                bad,
                SessionFrame {
                    points: vec![[200, 200]; 21],
                    probs: vec![0.125; 8],
                },
            ],
            WordListSuggester::new(),
        )
        .unwrap();
        assert_eq!(text, " ");
    }

    #[test]
    fn test_run_session_fails_when_nothing_replays() {
        let bad = SessionFrame {
            points: vec![[200, 200]; 5],
            probs: vec![0.125; 8],
        };
        assert!(run_session(vec![bad], WordListSuggester::new()).is_err());
    }
}
