//! Frame classification: skeleton rendering, the coarse model seam, and the
//! two geometric stages that turn a group prediction into a symbol.

pub mod canvas;
pub mod errors;
pub mod model;
pub mod refiner;
pub mod resolver;

pub use canvas::SkeletonCanvas;
pub use errors::ClassifyError;
pub use model::{CoarseClassifier, GroupPrediction, GROUP_COUNT};
pub use refiner::refine;
pub use resolver::{resolve, Symbol};

#[cfg(test)]
pub use model::MockCoarseClassifier;
