//! Per-frame orchestration: landmarks in, committed text and suggestions out.

use tracing::debug;

use crate::assemble::Assembler;
use crate::classify::{
    refine, resolve, ClassifyError, CoarseClassifier, GroupPrediction, SkeletonCanvas, Symbol,
};
use crate::landmarks::{LandmarkFrame, Point};
use crate::suggest::SuggestionProvider;

/// Everything a frontend needs after one frame.
#[derive(Clone, Debug)]
pub struct FrameUpdate {
    /// The symbol this frame resolved to, committed or not.
    pub symbol: Symbol,
    /// The committed text after this frame's commit decision.
    pub text: String,
    /// Completions for the trailing word fragment, best first.
    pub suggestions: Vec<String>,
}

/// Drives one landmark frame through classification, resolution, assembly
/// and suggestion lookup.
///
/// All stages before assembly are pure; a frame that fails classification
/// returns `Err` without advancing the assembler, so a flaky model can never
/// corrupt committed text.
pub struct Pipeline<C, S> {
    classifier: C,
    suggester: S,
    assembler: Assembler,
}

impl<C: CoarseClassifier, S: SuggestionProvider> Pipeline<C, S> {
    pub fn new(classifier: C, suggester: S) -> Self {
        Self {
            classifier,
            suggester,
            assembler: Assembler::new(),
        }
    }

    /// Processes one frame of landmark points.
    pub fn process_frame(&mut self, points: &[Point]) -> Result<FrameUpdate, ClassifyError> {
        let frame = LandmarkFrame::from_points(points)?;
        let canvas = SkeletonCanvas::render(&frame);
        let probs = self.classifier.predict(&canvas)?;
        let prediction = GroupPrediction::from_probabilities(&probs)?;
        let group = refine(prediction, &frame);
        let symbol = resolve(group, &frame);
        debug!(
            primary = prediction.primary,
            refined = group,
            symbol = %symbol,
            "frame classified"
        );

        self.assembler.process(symbol);

        let fragment = self.assembler.current_word();
        let suggestions = if fragment.trim().is_empty() {
            Vec::new()
        } else {
            self.suggester.suggest(fragment)
        };

        Ok(FrameUpdate {
            symbol,
            text: self.assembler.text().to_string(),
            suggestions,
        })
    }

    /// The committed text so far.
    pub fn text(&self) -> &str {
        self.assembler.text()
    }

    /// Replaces the trailing word fragment with a picked completion.
    pub fn apply_suggestion(&mut self, word: &str) {
        self.assembler.replace_last_word(word);
    }

    /// Drops all committed text and buffered symbols.
    pub fn clear(&mut self) {
        self.assembler.clear();
    }
}
