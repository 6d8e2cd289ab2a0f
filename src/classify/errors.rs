use crate::landmarks::LandmarkError;

/// Errors that can occur while classifying a landmark frame.
///
/// Every variant is recoverable at per-frame granularity: the caller drops
/// the frame and the assembler's accumulated text is left untouched.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("coarse classifier unavailable: {details}")]
    Unavailable { details: String },

    #[error("coarse classifier returned {got} probabilities, expected {expected}")]
    MalformedOutput { got: usize, expected: usize },

    #[error("invalid landmark frame: {source}")]
    Landmark {
        #[from]
        source: LandmarkError,
    },
}
