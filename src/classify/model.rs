//! Seam to the external coarse shape-group model.
//!
//! The model itself (an image classifier trained on the synthetic skeleton
//! canvas) lives outside this crate. The pipeline only depends on the
//! `CoarseClassifier` trait and on the deterministic top-3 extraction below.

use super::canvas::SkeletonCanvas;
use super::errors::ClassifyError;

/// Number of coarse shape groups the model distinguishes.
pub const GROUP_COUNT: usize = 8;

/// Capability seam over the external 8-way shape-group model.
///
/// Implementations return one probability per group for a rendered skeleton
/// canvas. A failed or misloaded model reports `ClassifyError::Unavailable`;
/// the frame is then skipped without touching any downstream state.
#[cfg_attr(test, mockall::automock)]
pub trait CoarseClassifier {
    fn predict(&mut self, canvas: &SkeletonCanvas) -> Result<Vec<f32>, ClassifyError>;
}

/// The three most probable shape groups, ranked descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupPrediction {
    pub primary: u8,
    pub secondary: u8,
    pub tertiary: u8,
}

impl GroupPrediction {
    /// Peels the top three groups off a probability vector: take the argmax,
    /// retire that slot, and repeat twice. This is not a top-3 sort: on ties
    /// the lowest group index wins each round, and the peel order decides
    /// the ranking reproducibly. A retired slot can never be picked again,
    /// so the three indices are always distinct, even for sparse vectors
    /// where fewer than three groups carry any probability.
    pub fn from_probabilities(probs: &[f32]) -> Result<Self, ClassifyError> {
        if probs.len() != GROUP_COUNT {
            return Err(ClassifyError::MalformedOutput {
                got: probs.len(),
                expected: GROUP_COUNT,
            });
        }
        let mut working = [0f32; GROUP_COUNT];
        working.copy_from_slice(probs);

        let mut peel = || {
            let top = argmax(&working);
            working[top] = f32::NEG_INFINITY;
            top as u8
        };
        let primary = peel();
        let secondary = peel();
        let tertiary = peel();
        Ok(Self {
            primary,
            secondary,
            tertiary,
        })
    }
}

/// Index of the first maximum element. First occurrence wins on ties.
fn argmax(values: &[f32; GROUP_COUNT]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}
