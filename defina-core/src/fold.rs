//! Accent folding for lookup keys.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes diacritics by decomposing (NFKD) and dropping combining marks.
///
/// Case is preserved: `fold_accents("Ação") == "Acao"`.
pub fn fold_accents(word: &str) -> String {
    word.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_portuguese_diacritics() {
        assert_eq!(fold_accents("café"), "cafe");
        assert_eq!(fold_accents("maçã"), "maca");
        assert_eq!(fold_accents("avô à pôr"), "avo a por");
        assert_eq!(fold_accents("ÁGUA"), "AGUA");
    }

    #[test]
    fn folding_is_idempotent() {
        for word in ["café", "maçã", "coração", "pão", "ASCII", "", "über"] {
            let once = fold_accents(word);
            assert_eq!(fold_accents(&once), once);
        }
    }

    #[test]
    fn handles_decomposed_input() {
        assert_eq!(fold_accents("e\u{0301}"), "e");
    }
}
