//! Synthetic skeleton canvas fed to the coarse model.
//!
//! The model is trained on this exact representation: a white 400x400
//! three-channel image carrying only bone segments and joint markers, never
//! camera pixels. Rendering it here keeps the input contract in one place.

use crate::landmarks::{LandmarkFrame, CANVAS_SIZE, HAND_SKELETON, LANDMARK_COUNT};

const CHANNELS: usize = 3;
const BONE_COLOR: [u8; 3] = [0, 255, 0];
const JOINT_COLOR: [u8; 3] = [255, 0, 0];
const BONE_HALF_WIDTH: i32 = 1;
const JOINT_RADIUS: i32 = 4;

/// A rendered 400x400 RGB skeleton image.
pub struct SkeletonCanvas {
    pixels: Vec<u8>,
}

impl SkeletonCanvas {
    /// Draws the frame's skeleton: white ground, green bones, red joints.
    pub fn render(frame: &LandmarkFrame) -> Self {
        let mut canvas = Self {
            pixels: vec![255; CANVAS_SIZE * CANVAS_SIZE * CHANNELS],
        };
        for (a, b) in HAND_SKELETON {
            canvas.draw_segment(
                frame.x(a),
                frame.y(a),
                frame.x(b),
                frame.y(b),
            );
        }
        for i in 0..LANDMARK_COUNT {
            canvas.draw_joint(frame.x(i), frame.y(i));
        }
        canvas
    }

    /// Raw RGB bytes, row-major, 400x400x3.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> usize {
        CANVAS_SIZE
    }

    pub fn height(&self) -> usize {
        CANVAS_SIZE
    }

    fn set(&mut self, x: i32, y: i32, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= CANVAS_SIZE as i32 || y >= CANVAS_SIZE as i32 {
            return;
        }
        let base = (y as usize * CANVAS_SIZE + x as usize) * CHANNELS;
        self.pixels[base..base + CHANNELS].copy_from_slice(&color);
    }

    /// Bresenham line, thickened by stamping a small square at each step.
    fn draw_segment(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            for ox in -BONE_HALF_WIDTH..=BONE_HALF_WIDTH {
                for oy in -BONE_HALF_WIDTH..=BONE_HALF_WIDTH {
                    self.set(x + ox, y + oy, BONE_COLOR);
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_joint(&mut self, cx: i32, cy: i32) {
        for ox in -JOINT_RADIUS..=JOINT_RADIUS {
            for oy in -JOINT_RADIUS..=JOINT_RADIUS {
                if ox * ox + oy * oy <= JOINT_RADIUS * JOINT_RADIUS {
                    self.set(cx + ox, cy + oy, JOINT_COLOR);
                }
            }
        }
    }
}
