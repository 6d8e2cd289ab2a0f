//! Token-stream assembler: turns the per-frame symbol stream into committed
//! text.
//!
//! Letters are never written directly. Every frame's symbol lands in a
//! ten-slot ring buffer, and a `Next` gesture commits the symbol observed two
//! frames earlier. The two-frame lag means the committed letter is the one
//! the hand was actually holding before it started moving into the commit
//! pose.

use tracing::debug;

use crate::classify::Symbol;

/// Ring buffer capacity. Two frames of commit lag plus headroom for the
/// double-`Next` path.
pub const HISTORY_LEN: usize = 10;

/// The last ten per-frame symbols, indexed by frame counter.
#[derive(Clone, Debug)]
pub struct SymbolHistory {
    slots: [Symbol; HISTORY_LEN],
}

impl SymbolHistory {
    pub fn new() -> Self {
        Self {
            slots: [Symbol::Space; HISTORY_LEN],
        }
    }

    /// Reads the slot for a frame counter value. Negative counters wrap
    /// (frame -2 before any input reads the seeded `Space` slots).
    pub fn get(&self, frame: i64) -> Symbol {
        self.slots[frame.rem_euclid(HISTORY_LEN as i64) as usize]
    }

    pub fn put(&mut self, frame: i64, symbol: Symbol) {
        self.slots[frame.rem_euclid(HISTORY_LEN as i64) as usize] = symbol;
    }
}

impl Default for SymbolHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Commit state machine over the symbol stream.
///
/// The text starts as a single space and grows only through `Next` commits
/// and the double-space word separator. The frame counter starts at -1 and
/// is incremented after each frame's commit decision, so during processing it
/// names the previous frame's history slot.
pub struct Assembler {
    text: String,
    history: SymbolHistory,
    frame: i64,
    previous: Option<Symbol>,
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            text: " ".to_string(),
            history: SymbolHistory::new(),
            frame: -1,
            previous: None,
        }
    }

    /// Feeds one frame's symbol through the commit rules, then records it in
    /// history. Repeating the same symbol across frames is idempotent for
    /// the text: only the `Next` and `Space` transitions mutate it.
    pub fn process(&mut self, symbol: Symbol) {
        if symbol == Symbol::Next && self.previous != Some(Symbol::Next) {
            let lagged = self.history.get(self.frame - 2);
            if lagged == Symbol::Next {
                // The commit pose itself was buffered two frames back; fall
                // forward to the most recent slot instead.
                let current = self.history.get(self.frame);
                if current != Symbol::Backspace {
                    self.append(current);
                }
            } else if lagged == Symbol::Backspace {
                self.text.pop();
                debug!(text = %self.text, "committed backspace");
            } else {
                self.append(lagged);
            }
        }

        if symbol == Symbol::Space && self.previous != Some(Symbol::Space) {
            self.text.push_str("  ");
        }

        self.previous = Some(symbol);
        self.frame += 1;
        self.history.put(self.frame, symbol);
    }

    fn append(&mut self, symbol: Symbol) {
        // Control tokens and unresolved shapes carry no character.
        if let Some(c) = symbol.as_char() {
            self.text.push(c);
            debug!(symbol = %symbol, text = %self.text, "committed symbol");
        }
    }

    /// The committed text, including the leading sentinel space.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The trailing word fragment: everything after the last space.
    pub fn current_word(&self) -> &str {
        match self.text.rfind(' ') {
            Some(i) => &self.text[i + 1..],
            None => &self.text,
        }
    }

    /// Swaps the trailing word fragment for `word`. Used when the operator
    /// picks a completion.
    pub fn replace_last_word(&mut self, word: &str) {
        let mut words: Vec<&str> = self.text.split_whitespace().collect();
        match words.last_mut() {
            Some(last) => *last = word,
            None => words.push(word),
        }
        self.text = format!(" {}", words.join(" "));
        self.previous = None;
    }

    /// Resets text, history, frame counter and debounce state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Symbol {
        Symbol::Letter(c)
    }

    #[test]
    fn test_history_wraps_negative_frames() {
        let mut history = SymbolHistory::new();
        history.put(8, letter('A'));
        assert_eq!(history.get(-2), letter('A'));
        assert_eq!(history.get(18), letter('A'));
    }

    #[test]
    fn test_letters_alone_commit_nothing() {
        let mut asm = Assembler::new();
        for _ in 0..5 {
            asm.process(letter('H'));
        }
        assert_eq!(asm.text(), " ");
    }

    #[test]
    fn test_next_commits_the_lagged_symbol() {
        let mut asm = Assembler::new();
        asm.process(letter('H'));
        asm.process(letter('H'));
        asm.process(letter('H'));
        asm.process(Symbol::Next);
        // Two-frame lag: the slot written by the first H is committed.
        assert_eq!(asm.text(), " H");
    }

    #[test]
    fn test_repeated_next_commits_once() {
        let mut asm = Assembler::new();
        asm.process(letter('A'));
        asm.process(letter('A'));
        asm.process(letter('A'));
        asm.process(Symbol::Next);
        asm.process(Symbol::Next);
        asm.process(Symbol::Next);
        assert_eq!(asm.text(), " A");
    }

    #[test]
    fn test_double_next_falls_forward_to_current_slot() {
        let mut asm = Assembler::new();
        asm.process(letter('X'));
        asm.process(Symbol::Next); // commits a seeded Space slot
        asm.process(letter('Y'));
        asm.process(letter('Z'));
        asm.process(Symbol::Next); // lagged slot holds Next; commit Z instead
        assert_eq!(asm.text(), "  Z");
    }

    #[test]
    fn test_double_next_never_commits_backspace() {
        let mut asm = Assembler::new();
        asm.process(letter('X'));
        asm.process(Symbol::Next);
        asm.process(letter('Y'));
        asm.process(Symbol::Backspace);
        asm.process(Symbol::Next);
        // Fall-forward slot holds Backspace: nothing is appended.
        assert_eq!(asm.text(), "  ");
    }

    #[test]
    fn test_backspace_via_history_deletes_one_char() {
        let mut asm = Assembler::new();
        for c in ['H', 'H', 'H'] {
            asm.process(letter(c));
        }
        asm.process(Symbol::Next);
        assert_eq!(asm.text(), " H");
        asm.process(Symbol::Backspace);
        asm.process(letter('X'));
        asm.process(letter('X'));
        asm.process(Symbol::Next);
        assert_eq!(asm.text(), " ");
    }

    #[test]
    fn test_backspace_commit_trims_a_word() {
        let mut asm = Assembler::new();
        asm.text = " HELLO".to_string();
        asm.process(Symbol::Backspace);
        asm.process(letter('O'));
        asm.process(letter('O'));
        asm.process(Symbol::Next);
        assert_eq!(asm.text(), " HELL");
    }

    #[test]
    fn test_backspace_on_empty_text_is_harmless() {
        let mut asm = Assembler::new();
        asm.process(Symbol::Backspace);
        asm.process(letter('X'));
        asm.process(letter('X'));
        asm.process(Symbol::Next);
        // Only the sentinel space existed; the pop leaves an empty string
        // and never panics.
        assert_eq!(asm.text(), "");
        asm.process(Symbol::Next);
        assert_eq!(asm.text(), "");
    }

    #[test]
    fn test_space_appends_double_space_once() {
        let mut asm = Assembler::new();
        asm.process(Symbol::Space);
        asm.process(Symbol::Space);
        asm.process(Symbol::Space);
        assert_eq!(asm.text(), "   ");
        asm.process(letter('A'));
        asm.process(Symbol::Space);
        assert_eq!(asm.text(), "     ");
    }

    #[test]
    fn test_unresolved_commits_nothing() {
        let mut asm = Assembler::new();
        asm.process(Symbol::Unresolved);
        asm.process(Symbol::Unresolved);
        asm.process(Symbol::Unresolved);
        asm.process(Symbol::Next);
        assert_eq!(asm.text(), " ");
    }

    #[test]
    fn test_current_word_is_trailing_fragment() {
        let mut asm = Assembler::new();
        assert_eq!(asm.current_word(), "");
        for c in ['H', 'H', 'H'] {
            asm.process(letter(c));
        }
        asm.process(Symbol::Next);
        for c in ['E', 'E'] {
            asm.process(letter(c));
        }
        asm.process(Symbol::Next);
        // First commit takes the lagged H; the second sees the buffered
        // Next and falls forward to E.
        assert_eq!(asm.text(), " HE");
        assert_eq!(asm.current_word(), "HE");
    }

    #[test]
    fn test_replace_last_word() {
        let mut asm = Assembler::new();
        asm.text = " HEL".to_string();
        asm.replace_last_word("HELLO");
        assert_eq!(asm.text(), " HELLO");

        asm.text = " HELLO  WOR".to_string();
        asm.replace_last_word("WORLD");
        assert_eq!(asm.text(), " HELLO WORLD");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut asm = Assembler::new();
        for c in ['A', 'A', 'A'] {
            asm.process(letter(c));
        }
        asm.process(Symbol::Next);
        assert_eq!(asm.text(), " A");
        asm.clear();
        assert_eq!(asm.text(), " ");
        assert_eq!(asm.current_word(), "");
        // A Next right after clear reads the reseeded Space slots.
        asm.process(Symbol::Next);
        assert_eq!(asm.text(), "  ");
    }
}
