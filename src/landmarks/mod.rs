//! Hand landmark geometry.
//!
//! A detected hand arrives as 21 tracked joint positions in a fixed
//! anatomical order, already re-centered into the 400x400 reference canvas
//! by the external landmark extractor. Everything downstream (refiner,
//! resolver, canvas rendering) indexes into this frame.

use serde::{Deserialize, Serialize};

/// Number of tracked joints per hand.
pub const LANDMARK_COUNT: usize = 21;

/// Side length of the synthetic reference canvas, in pixels. All geometric
/// thresholds in the classifier are calibrated against this frame.
pub const CANVAS_SIZE: usize = 400;

// Landmark indices, wrist to pinky tip.
pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Bone segments drawn onto the skeleton canvas: the five finger chains plus
/// the palm ring. The coarse model is trained on exactly this drawing.
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC),
    (THUMB_CMC, THUMB_MCP),
    (THUMB_MCP, THUMB_IP),
    (THUMB_IP, THUMB_TIP),
    (INDEX_MCP, INDEX_PIP),
    (INDEX_PIP, INDEX_DIP),
    (INDEX_DIP, INDEX_TIP),
    (MIDDLE_MCP, MIDDLE_PIP),
    (MIDDLE_PIP, MIDDLE_DIP),
    (MIDDLE_DIP, MIDDLE_TIP),
    (RING_MCP, RING_PIP),
    (RING_PIP, RING_DIP),
    (RING_DIP, RING_TIP),
    (PINKY_MCP, PINKY_PIP),
    (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP),
    (MIDDLE_MCP, RING_MCP),
    (RING_MCP, PINKY_MCP),
    (WRIST, INDEX_MCP),
    (WRIST, PINKY_MCP),
];

/// A single tracked joint position, in canvas pixel coordinates.
/// Lower `y` is higher on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points, in pixels.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

#[derive(Debug, thiserror::Error)]
pub enum LandmarkError {
    #[error("expected {LANDMARK_COUNT} landmarks, got {got}")]
    InsufficientLandmarks { got: usize },
}

/// A validated frame of 21 landmarks. Construction is the only place the
/// point count is checked; everything downstream indexes freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandmarkFrame {
    points: [Point; LANDMARK_COUNT],
}

impl LandmarkFrame {
    /// Builds a frame from the extractor's point list. Extra trailing points
    /// are ignored; fewer than 21 is a rejected frame, not a degraded one.
    pub fn from_points(points: &[Point]) -> Result<Self, LandmarkError> {
        if points.len() < LANDMARK_COUNT {
            return Err(LandmarkError::InsufficientLandmarks { got: points.len() });
        }
        let mut fixed = [Point::default(); LANDMARK_COUNT];
        fixed.copy_from_slice(&points[..LANDMARK_COUNT]);
        Ok(Self { points: fixed })
    }

    pub fn point(&self, i: usize) -> Point {
        self.points[i]
    }

    pub fn x(&self, i: usize) -> i32 {
        self.points[i].x
    }

    pub fn y(&self, i: usize) -> i32 {
        self.points[i].y
    }

    /// Pixel distance between two landmarks.
    pub fn dist(&self, a: usize, b: usize) -> f64 {
        distance(self.points[a], self.points[b])
    }

    /// Tip strictly above the PIP joint: the finger is raised.
    pub fn raised(&self, pip: usize, tip: usize) -> bool {
        self.y(pip) > self.y(tip)
    }

    /// Tip strictly below the PIP joint: the finger is folded over.
    pub fn folded(&self, pip: usize, tip: usize) -> bool {
        self.y(pip) < self.y(tip)
    }

    /// All four non-thumb fingers raised.
    pub fn all_raised(&self) -> bool {
        self.raised(INDEX_PIP, INDEX_TIP)
            && self.raised(MIDDLE_PIP, MIDDLE_TIP)
            && self.raised(RING_PIP, RING_TIP)
            && self.raised(PINKY_PIP, PINKY_TIP)
    }

    /// All four non-thumb fingers folded.
    pub fn all_folded(&self) -> bool {
        self.folded(INDEX_PIP, INDEX_TIP)
            && self.folded(MIDDLE_PIP, MIDDLE_TIP)
            && self.folded(RING_PIP, RING_TIP)
            && self.folded(PINKY_PIP, PINKY_TIP)
    }
}
