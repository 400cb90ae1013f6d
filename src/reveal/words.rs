//! Word tokenization and inline word layout for word-by-word reveals.
//!
//! Tokenization splits on single spaces only. Consecutive spaces produce
//! empty tokens and non-space whitespace is not special-cased; both ride
//! along as zero-width spans. This mirrors the site copy it renders,
//! which never contains either.

use spark_signals::Signal;

use crate::layout::text_measure::string_width;

// =============================================================================
// TOKENIZATION
// =============================================================================

/// Split text into word tokens on single-space boundaries.
pub fn split_words(text: &str) -> Vec<String> {
    text.split(' ').map(str::to_string).collect()
}

/// Delay before token `index` starts revealing.
pub fn token_delay(base_delay_ms: u32, word_delay_ms: u32, index: usize) -> u32 {
    base_delay_ms + word_delay_ms * index as u32
}

// =============================================================================
// BINDING
// =============================================================================

/// Per-element word reveal state, shared between layout and compositing.
///
/// All tokens share one visibility signal; each token carries only its
/// index-derived delay.
pub struct WordsBinding {
    pub tokens: Vec<String>,
    pub visible: Signal<bool>,
    pub base_delay_ms: u32,
    pub word_delay_ms: u32,
}

// =============================================================================
// INLINE LAYOUT
// =============================================================================

/// Position of one token inside its element, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPos {
    pub row: u16,
    pub col: u16,
    pub width: u16,
}

/// Inline flow of all tokens at a given element width.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordLayout {
    pub positions: Vec<WordPos>,
    pub rows: u16,
}

/// Flow tokens left to right, wrapping at the element width. Tokens are
/// separated by one cell; zero-width tokens still occupy a position so
/// indices stay aligned with the token list.
pub fn layout_words(tokens: &[String], width: u16) -> WordLayout {
    let mut positions = Vec::with_capacity(tokens.len());
    let mut row: u16 = 0;
    let mut col: u16 = 0;

    for token in tokens {
        let w = string_width(token);
        if col > 0 && width > 0 && col + w > width {
            row += 1;
            col = 0;
        }
        positions.push(WordPos { row, col, width: w });
        col = col.saturating_add(w + 1);
    }

    WordLayout {
        positions,
        rows: if tokens.is_empty() { 0 } else { row + 1 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_count_and_order() {
        let tokens = split_words("I lead design teams");
        assert_eq!(tokens, vec!["I", "lead", "design", "teams"]);
    }

    #[test]
    fn test_token_delays() {
        // delay + index * wordDelay, strictly increasing when wordDelay > 0
        for (i, expected) in [(0, 120), (1, 160), (2, 200), (3, 240)] {
            assert_eq!(token_delay(120, 40, i), expected);
        }
    }

    #[test]
    fn test_zero_word_delay_collapses() {
        assert_eq!(token_delay(100, 0, 0), token_delay(100, 0, 7));
    }

    #[test]
    fn test_consecutive_spaces_keep_empty_tokens() {
        // Naive split: not special-cased, by contract
        let tokens = split_words("a  b");
        assert_eq!(tokens, vec!["a", "", "b"]);
    }

    #[test]
    fn test_layout_words_wraps() {
        let tokens = split_words("one two three");
        let layout = layout_words(&tokens, 9);
        // "one two" fits on row 0; "three" wraps
        assert_eq!(layout.positions[0], WordPos { row: 0, col: 0, width: 3 });
        assert_eq!(layout.positions[1], WordPos { row: 0, col: 4, width: 3 });
        assert_eq!(layout.positions[2], WordPos { row: 1, col: 0, width: 5 });
        assert_eq!(layout.rows, 2);
    }

    #[test]
    fn test_layout_words_empty() {
        let layout = layout_words(&[], 10);
        assert_eq!(layout.rows, 0);
        assert!(layout.positions.is_empty());
    }
}
