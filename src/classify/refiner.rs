//! Geometric refinement of the coarse shape group.
//!
//! The coarse model confuses groups with similar silhouettes, so a fixed
//! table of geometric rules corrects the primary group using the raw
//! landmark positions. Each rule fires when the current (primary, secondary)
//! pair is in its trigger set and its predicate holds, and then overwrites
//! the working group. Rules are evaluated in sequence, unconditionally: a
//! later rule may re-fire because an earlier one moved the working group into
//! its trigger set. The order and the literal pixel thresholds are calibrated
//! against the 400x400 canvas and are load-bearing; do not re-order,
//! de-duplicate, or turn this into mutually exclusive branches.

use super::model::GroupPrediction;
use crate::landmarks::LandmarkFrame;

// Shape groups, named by the letter family each one covers.
pub const G_AEMNST: u8 = 0;
pub const G_BDFIKRUVW: u8 = 1;
pub const G_CO: u8 = 2;
pub const G_GH: u8 = 3;
pub const G_L: u8 = 4;
pub const G_PQZ: u8 = 5;
pub const G_X: u8 = 6;
pub const G_JY: u8 = 7;

/// One entry of the refinement table.
pub struct Rule {
    /// Literal (primary, secondary) pairs this rule applies to.
    pub triggers: &'static [(u8, u8)],
    /// Geometric test over the landmark frame.
    pub predicate: fn(&LandmarkFrame) -> bool,
    /// Group written into the working variable when the rule fires.
    pub refined: u8,
}

/// The refinement table, ported threshold-for-threshold from the calibrated
/// rule set (including its duplicate trigger pairs, which are harmless).
pub static RULES: &[Rule] = &[
    // Fist silhouettes -> AEMNST: all four fingers folded over.
    Rule {
        triggers: &[
            (5, 2), (5, 3), (3, 5), (3, 6), (3, 0), (3, 2), (6, 4), (6, 1), (6, 2),
            (6, 6), (6, 7), (6, 0), (6, 5), (4, 1), (1, 0), (1, 1), (6, 3), (1, 6),
            (5, 6), (5, 1), (4, 5), (1, 4), (1, 5), (2, 0), (2, 6), (4, 6), (1, 0),
            (5, 7), (1, 6), (6, 1), (7, 6), (2, 5), (7, 1), (5, 4), (7, 0), (7, 5),
            (7, 2),
        ],
        predicate: |f| f.all_folded(),
        refined: G_AEMNST,
    },
    // O mistaken for S: thumb tip past the index base.
    Rule {
        triggers: &[(2, 2), (2, 1)],
        predicate: |f| f.x(5) < f.x(4),
        refined: G_AEMNST,
    },
    // AEMNST mistaken for C/O: wrist right of every tip, thumb inside.
    Rule {
        triggers: &[
            (0, 0), (0, 6), (0, 2), (0, 5), (0, 1), (0, 7), (5, 2), (7, 6), (7, 1),
        ],
        predicate: |f| {
            f.x(0) > f.x(8)
                && f.x(0) > f.x(4)
                && f.x(0) > f.x(12)
                && f.x(0) > f.x(16)
                && f.x(0) > f.x(20)
                && f.x(5) > f.x(4)
        },
        refined: G_CO,
    },
    // C/O: index and ring tips pinched together.
    Rule {
        triggers: &[(6, 0), (6, 6), (6, 2)],
        predicate: |f| f.dist(8, 16) < 52.0,
        refined: G_CO,
    },
    // G/H: index raised, ring and pinky folded, wrist left of the tips.
    Rule {
        triggers: &[(1, 4), (1, 5), (1, 6), (1, 3), (1, 0)],
        predicate: |f| {
            f.raised(6, 8)
                && f.folded(14, 16)
                && f.folded(18, 20)
                && f.x(0) < f.x(8)
                && f.x(0) < f.x(12)
                && f.x(0) < f.x(16)
                && f.x(0) < f.x(20)
        },
        refined: G_GH,
    },
    // G/H mistaken for L: thumb right of the wrist.
    Rule {
        triggers: &[(4, 6), (4, 1), (4, 5), (4, 3), (4, 7)],
        predicate: |f| f.x(4) > f.x(0),
        refined: G_GH,
    },
    // G/H mistaken for P/Q/Z: thumb base well above the ring tip.
    Rule {
        triggers: &[(5, 3), (5, 0), (5, 7), (5, 4), (5, 2), (5, 1), (5, 5)],
        predicate: |f| f.y(2) + 15 < f.y(16),
        refined: G_GH,
    },
    // L mistaken for X: thumb far from the middle finger.
    Rule {
        triggers: &[(6, 4), (6, 1), (6, 2)],
        predicate: |f| f.dist(4, 11) > 55.0,
        refined: G_L,
    },
    // L mistaken for D: thumb spread, only the index raised.
    Rule {
        triggers: &[(1, 4), (1, 6), (1, 1)],
        predicate: |f| {
            f.dist(4, 11) > 50.0
                && f.raised(6, 8)
                && f.folded(10, 12)
                && f.folded(14, 16)
                && f.folded(18, 20)
        },
        refined: G_L,
    },
    // L mistaken for G/H: thumb left of the wrist.
    Rule {
        triggers: &[(3, 6), (3, 4)],
        predicate: |f| f.x(4) < f.x(0),
        refined: G_L,
    },
    // L mistaken for C/O: thumb base left of the middle tip.
    Rule {
        triggers: &[(2, 2), (2, 5), (2, 4)],
        predicate: |f| f.x(1) < f.x(12),
        refined: G_L,
    },
    // P/Q/Z mistaken for G/H: index pointing, thumb hanging low.
    Rule {
        triggers: &[(3, 6), (3, 5), (3, 4)],
        predicate: |f| {
            f.raised(6, 8)
                && f.folded(10, 12)
                && f.folded(14, 16)
                && f.folded(18, 20)
                && f.y(4) > f.y(10)
        },
        refined: G_PQZ,
    },
    // P/Q/Z mistaken for G/H: thumb level with all the tips.
    Rule {
        triggers: &[(3, 2), (3, 1), (3, 6)],
        predicate: |f| {
            f.y(4) + 17 > f.y(8)
                && f.y(4) + 17 > f.y(12)
                && f.y(4) + 17 > f.y(16)
                && f.y(4) + 17 > f.y(20)
        },
        refined: G_PQZ,
    },
    // P/Q/Z mistaken for L or J/Y: thumb right of the wrist.
    Rule {
        triggers: &[(4, 4), (4, 5), (4, 2), (7, 5), (7, 6), (7, 0)],
        predicate: |f| f.x(4) > f.x(0),
        refined: G_PQZ,
    },
    // P/Q/Z mistaken for AEMNST: wrist left of every tip.
    Rule {
        triggers: &[
            (0, 2), (0, 6), (0, 1), (0, 5), (0, 0), (0, 7), (0, 4), (0, 3), (2, 7),
        ],
        predicate: |f| {
            f.x(0) < f.x(8) && f.x(0) < f.x(12) && f.x(0) < f.x(16) && f.x(0) < f.x(20)
        },
        refined: G_PQZ,
    },
    // J/Y mistaken for P/Q/Z: thumb joint left of the wrist.
    Rule {
        triggers: &[(5, 7), (5, 2), (5, 6)],
        predicate: |f| f.x(3) < f.x(0),
        refined: G_JY,
    },
    // J/Y mistaken for L: index folded.
    Rule {
        triggers: &[(4, 6), (4, 2), (4, 4), (4, 1), (4, 5), (4, 7)],
        predicate: |f| f.folded(6, 8),
        refined: G_JY,
    },
    // J/Y mistaken for X or AEMNST: pinky raised.
    Rule {
        triggers: &[
            (6, 7), (0, 7), (0, 1), (0, 0), (6, 4), (6, 6), (6, 5), (6, 1),
        ],
        predicate: |f| f.raised(18, 20),
        refined: G_JY,
    },
    // X mistaken for AEMNST: index base right of the ring tip.
    Rule {
        triggers: &[(0, 4), (0, 2), (0, 3), (0, 1), (0, 6)],
        predicate: |f| f.x(5) > f.x(16),
        refined: G_X,
    },
    // X mistaken for J/Y: pinky folded, index tip above the middle joint.
    Rule {
        triggers: &[(7, 2)],
        predicate: |f| f.folded(18, 20) && f.y(8) < f.y(10),
        refined: G_X,
    },
    // X mistaken for C/O: index and ring tips apart.
    Rule {
        triggers: &[(2, 1), (2, 2), (2, 6), (2, 7), (2, 0)],
        predicate: |f| f.dist(8, 16) > 50.0,
        refined: G_X,
    },
    // X mistaken for L: thumb close to the middle finger.
    Rule {
        triggers: &[(4, 6), (4, 2), (4, 1), (4, 4)],
        predicate: |f| f.dist(4, 11) < 60.0,
        refined: G_X,
    },
    // X mistaken for D: wide thumb-to-index gap.
    Rule {
        triggers: &[(1, 4), (1, 6), (1, 0), (1, 2)],
        predicate: |f| f.x(5) - f.x(4) - 15 > 0,
        refined: G_X,
    },
    // B: all four fingers raised.
    Rule {
        triggers: &[
            (5, 0), (5, 1), (5, 4), (5, 5), (5, 6), (6, 1), (7, 6), (0, 2), (7, 1),
            (7, 4), (6, 6), (7, 2), (5, 0), (6, 3), (6, 4), (7, 5), (7, 2),
        ],
        predicate: |f| f.all_raised(),
        refined: G_BDFIKRUVW,
    },
    // F: index folded, the other three raised.
    Rule {
        triggers: &[
            (6, 1), (6, 0), (0, 3), (6, 4), (2, 2), (0, 6), (6, 2), (7, 6), (4, 6),
            (4, 1), (4, 2), (0, 2), (7, 1), (7, 4), (6, 6), (7, 2), (7, 5), (7, 2),
        ],
        predicate: |f| {
            f.folded(6, 8) && f.raised(10, 12) && f.raised(14, 16) && f.raised(18, 20)
        },
        refined: G_BDFIKRUVW,
    },
    // Middle, ring and pinky raised.
    Rule {
        triggers: &[(6, 1), (6, 0), (4, 2), (4, 1), (4, 6), (4, 4)],
        predicate: |f| f.raised(10, 12) && f.raised(14, 16) && f.raised(18, 20),
        refined: G_BDFIKRUVW,
    },
    // D: index pointing, thumb tucked low behind the palm.
    Rule {
        triggers: &[
            (5, 0), (3, 4), (3, 0), (3, 1), (3, 5), (5, 5), (5, 4), (5, 1), (7, 6),
        ],
        predicate: |f| {
            f.raised(6, 8)
                && f.folded(10, 12)
                && f.folded(14, 16)
                && f.folded(18, 20)
                && f.x(2) < f.x(0)
                && f.y(4) > f.y(14)
        },
        refined: G_BDFIKRUVW,
    },
    // D: index pointing with the thumb near the middle finger.
    Rule {
        triggers: &[(4, 1), (4, 2), (4, 4)],
        predicate: |f| {
            f.dist(4, 11) < 50.0
                && f.raised(6, 8)
                && f.folded(10, 12)
                && f.folded(14, 16)
                && f.folded(18, 20)
        },
        refined: G_BDFIKRUVW,
    },
    // D: index pointing, thumb above the ring joint.
    Rule {
        triggers: &[(3, 4), (3, 0), (3, 1), (3, 5), (3, 6)],
        predicate: |f| {
            f.raised(6, 8)
                && f.folded(10, 12)
                && f.folded(14, 16)
                && f.folded(18, 20)
                && f.x(2) < f.x(0)
                && f.y(14) < f.y(4)
        },
        refined: G_BDFIKRUVW,
    },
    // Narrow thumb-to-index gap.
    Rule {
        triggers: &[(6, 6), (6, 4), (6, 1), (6, 2)],
        predicate: |f| f.x(5) - f.x(4) - 15 < 0,
        refined: G_BDFIKRUVW,
    },
    // I: index, middle and ring folded, pinky raised.
    Rule {
        triggers: &[
            (5, 4), (5, 5), (5, 1), (0, 3), (0, 7), (5, 0), (0, 2), (6, 2), (7, 5),
            (7, 1), (7, 6), (7, 7),
        ],
        predicate: |f| {
            f.folded(6, 8) && f.folded(10, 12) && f.folded(14, 16) && f.raised(18, 20)
        },
        refined: G_BDFIKRUVW,
    },
    // J/Y misread as the nine-letter cluster: thumb near the index base,
    // pinky up.
    Rule {
        triggers: &[(1, 5), (1, 7), (1, 1), (1, 6), (1, 3), (1, 0)],
        predicate: |f| {
            f.x(4) < f.x(5) + 15
                && f.folded(6, 8)
                && f.folded(10, 12)
                && f.folded(14, 16)
                && f.raised(18, 20)
        },
        refined: G_JY,
    },
    // U/V/R: index and middle raised, ring and pinky folded, thumb low.
    Rule {
        triggers: &[
            (5, 5), (5, 0), (5, 4), (5, 1), (4, 6), (4, 1), (7, 6), (3, 0), (3, 5),
        ],
        predicate: |f| {
            f.raised(6, 8)
                && f.raised(10, 12)
                && f.folded(14, 16)
                && f.folded(18, 20)
                && f.y(4) > f.y(14)
        },
        refined: G_BDFIKRUVW,
    },
    // W: wrist horizontally inside the tip cluster, thumb near the middle.
    Rule {
        triggers: &[
            (3, 5), (3, 0), (3, 6), (5, 1), (4, 1), (2, 0), (5, 0), (5, 5),
        ],
        predicate: |f| {
            let fg = 13;
            !(f.x(0) + fg < f.x(8)
                && f.x(0) + fg < f.x(12)
                && f.x(0) + fg < f.x(16)
                && f.x(0) + fg < f.x(20))
                && !(f.x(0) > f.x(8)
                    && f.x(0) > f.x(12)
                    && f.x(0) > f.x(16)
                    && f.x(0) > f.x(20))
                && f.dist(4, 11) < 50.0
        },
        refined: G_BDFIKRUVW,
    },
    // W: index, middle and ring raised.
    Rule {
        triggers: &[(5, 0), (5, 5), (0, 1)],
        predicate: |f| f.raised(6, 8) && f.raised(10, 12) && f.raised(14, 16),
        refined: G_BDFIKRUVW,
    },
];

/// Runs the full table over the primary group. The secondary group is fixed
/// for the whole pass; only the working (primary) value mutates.
pub fn refine(prediction: GroupPrediction, frame: &LandmarkFrame) -> u8 {
    let mut group = prediction.primary;
    for rule in RULES {
        if rule.triggers.contains(&(group, prediction.secondary)) && (rule.predicate)(frame) {
            group = rule.refined;
        }
    }
    group
}
