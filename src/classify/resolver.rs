//! Final symbol resolution within a refined shape group.
//!
//! Each group narrows to a concrete letter through a ladder of independent
//! position tests with the same overwrite semantics as the refiner: every
//! test re-reads the working value and a later match wins. After the letter
//! ladder, three control poses (space, next, backspace) may override the
//! result.

use std::fmt;

use crate::landmarks::LandmarkFrame;

use super::refiner::{G_AEMNST, G_BDFIKRUVW, G_CO, G_GH, G_JY, G_L, G_PQZ, G_X};

/// One recognized token per usable frame: a letter or a control gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Letter(char),
    /// Word separator gesture.
    Space,
    /// Commit gesture: durably writes the symbol seen two frames earlier.
    Next,
    /// Deletion gesture, applied on the following commit.
    Backspace,
    /// A group-1 shape that matched none of the letter ladders. Displayed
    /// but never committed as text.
    Unresolved,
}

impl Symbol {
    /// The character this symbol contributes when committed, if any.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Letter(c) => Some(*c),
            Symbol::Space => Some(' '),
            _ => None,
        }
    }

    fn is_letter(&self, c: char) -> bool {
        matches!(self, Symbol::Letter(l) if *l == c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Letter(c) => write!(f, "{}", c),
            Symbol::Space => write!(f, "Space"),
            Symbol::Next => write!(f, "Next"),
            Symbol::Backspace => write!(f, "Backspace"),
            Symbol::Unresolved => write!(f, "?"),
        }
    }
}

/// Maps a refined group plus landmark geometry to the final symbol.
pub fn resolve(group: u8, f: &LandmarkFrame) -> Symbol {
    let mut sym = match group {
        G_AEMNST => resolve_fist(f),
        G_BDFIKRUVW => resolve_letter_cluster(f),
        G_CO => {
            if f.dist(12, 4) > 42.0 {
                Symbol::Letter('C')
            } else {
                Symbol::Letter('O')
            }
        }
        G_GH => {
            if f.dist(8, 12) > 72.0 {
                Symbol::Letter('G')
            } else {
                Symbol::Letter('H')
            }
        }
        G_JY => {
            if f.dist(8, 4) > 42.0 {
                Symbol::Letter('Y')
            } else {
                Symbol::Letter('J')
            }
        }
        G_L => Symbol::Letter('L'),
        G_X => Symbol::Letter('X'),
        G_PQZ => {
            if f.x(4) > f.x(12) && f.x(4) > f.x(16) && f.x(4) > f.x(20) {
                if f.y(8) < f.y(5) {
                    Symbol::Letter('Z')
                } else {
                    Symbol::Letter('Q')
                }
            } else {
                Symbol::Letter('P')
            }
        }
        _ => Symbol::Unresolved,
    };

    // Space gesture: index and pinky up, middle and ring folded. Only fist
    // letters, the unresolved cluster and X/Y/B can degrade into this pose.
    if matches!(sym, Symbol::Unresolved)
        || sym.is_letter('E')
        || sym.is_letter('S')
        || sym.is_letter('X')
        || sym.is_letter('Y')
        || sym.is_letter('B')
    {
        if f.raised(6, 8) && f.folded(10, 12) && f.folded(14, 16) && f.raised(18, 20) {
            sym = Symbol::Space;
        }
    }

    // Commit gesture: open palm with the thumb tucked inside the index base.
    if sym.is_letter('E') || sym.is_letter('Y') || sym.is_letter('B') {
        if f.x(4) < f.x(5) && f.all_raised() {
            sym = Symbol::Next;
        }
    }

    // Deletion gesture: closed fist, wrist past every tip, thumb raised above
    // all fingers. Checked on every frame regardless of the letter resolved
    // above.
    if f.x(0) > f.x(8)
        && f.x(0) > f.x(12)
        && f.x(0) > f.x(16)
        && f.x(0) > f.x(20)
        && f.y(4) < f.y(8)
        && f.y(4) < f.y(12)
        && f.y(4) < f.y(16)
        && f.y(4) < f.y(20)
        && f.y(4) < f.y(6)
        && f.y(4) < f.y(10)
        && f.y(4) < f.y(14)
        && f.y(4) < f.y(18)
    {
        sym = Symbol::Backspace;
    }

    sym
}

/// Fist family: S unless the thumb position picks A, T, E, M or N.
fn resolve_fist(f: &LandmarkFrame) -> Symbol {
    let mut sym = Symbol::Letter('S');
    if f.x(4) < f.x(6) && f.x(4) < f.x(10) && f.x(4) < f.x(14) && f.x(4) < f.x(18) {
        sym = Symbol::Letter('A');
    }
    if f.x(4) > f.x(6)
        && f.x(4) < f.x(10)
        && f.x(4) < f.x(14)
        && f.x(4) < f.x(18)
        && f.y(4) < f.y(14)
        && f.y(4) < f.y(18)
    {
        sym = Symbol::Letter('T');
    }
    if f.y(4) > f.y(8) && f.y(4) > f.y(12) && f.y(4) > f.y(16) && f.y(4) > f.y(20) {
        sym = Symbol::Letter('E');
    }
    if f.x(4) > f.x(6) && f.x(4) > f.x(10) && f.x(4) > f.x(14) && f.y(4) < f.y(18) {
        sym = Symbol::Letter('M');
    }
    if f.x(4) > f.x(6) && f.x(4) > f.x(10) && f.y(4) < f.y(18) && f.y(4) < f.y(14) {
        sym = Symbol::Letter('N');
    }
    sym
}

/// The nine-letter cluster: finger extension patterns plus two distance
/// tests tell B, D, F, I, W, K, U, V and R apart. A shape matching none of
/// them stays unresolved.
fn resolve_letter_cluster(f: &LandmarkFrame) -> Symbol {
    let mut sym = Symbol::Unresolved;
    if f.all_raised() {
        sym = Symbol::Letter('B');
    }
    if f.raised(6, 8) && f.folded(10, 12) && f.folded(14, 16) && f.folded(18, 20) {
        sym = Symbol::Letter('D');
    }
    if f.folded(6, 8) && f.raised(10, 12) && f.raised(14, 16) && f.raised(18, 20) {
        sym = Symbol::Letter('F');
    }
    if f.folded(6, 8) && f.folded(10, 12) && f.folded(14, 16) && f.raised(18, 20) {
        sym = Symbol::Letter('I');
    }
    if f.raised(6, 8) && f.raised(10, 12) && f.raised(14, 16) && f.folded(18, 20) {
        sym = Symbol::Letter('W');
    }
    if f.raised(6, 8)
        && f.raised(10, 12)
        && f.folded(14, 16)
        && f.folded(18, 20)
        && f.y(4) < f.y(9)
    {
        sym = Symbol::Letter('K');
    }
    if f.dist(8, 12) - f.dist(6, 10) < 8.0
        && f.raised(6, 8)
        && f.raised(10, 12)
        && f.folded(14, 16)
        && f.folded(18, 20)
    {
        sym = Symbol::Letter('U');
    }
    if f.dist(8, 12) - f.dist(6, 10) >= 8.0
        && f.raised(6, 8)
        && f.raised(10, 12)
        && f.folded(14, 16)
        && f.folded(18, 20)
        && f.y(4) > f.y(9)
    {
        sym = Symbol::Letter('V');
    }
    if f.x(8) > f.x(12)
        && f.raised(6, 8)
        && f.raised(10, 12)
        && f.folded(14, 16)
        && f.folded(18, 20)
    {
        sym = Symbol::Letter('R');
    }
    sym
}
