//! Output formatting for a looked-up definition.
//!
//! The headword is printed in bold green above the description. Each source
//! keeps its own layout: Dicio descriptions are indented clause lists, while
//! Wiktionary descriptions already carry their own bullets.

use defina_core::{capitalize, title_case, Definition, DictionarySource};
use owo_colors::{OwoColorize, Style};

/// Indent placed before a Dicio description; matches the clause joiner.
const DICIO_INDENT: &str = "    ";

/// The headword as displayed: title case for Wiktionary, capitalized for Dicio.
pub fn headword(word: &str, source: DictionarySource) -> String {
    match source {
        DictionarySource::Wiktionary => title_case(word),
        DictionarySource::Dicio => capitalize(word),
    }
}

/// Builds the printable block for a definition.
pub fn format_definition(definition: &Definition) -> String {
    let head = headword(&definition.word, definition.source);
    let styled = head.style(Style::new().bold().green());
    let indent = match definition.source {
        DictionarySource::Wiktionary => "",
        DictionarySource::Dicio => DICIO_INDENT,
    };
    format!("\n{}\n\n{}{}\n", styled, indent, definition.description)
}

/// Removes every ANSI escape sequence, including those in the description.
pub fn strip_styles(text: &str) -> String {
    let stripped = strip_ansi_escapes::strip(text.as_bytes());
    String::from_utf8_lossy(&stripped).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(word: &str, source: DictionarySource, description: &str) -> Definition {
        Definition {
            word: word.to_string(),
            source,
            description: description.to_string(),
            found: true,
        }
    }

    #[test]
    fn headword_casing_per_source() {
        assert_eq!(headword("guarda-chuva", DictionarySource::Wiktionary), "Guarda-Chuva");
        assert_eq!(headword("guarda-chuva", DictionarySource::Dicio), "Guarda-chuva");
    }

    #[test]
    fn wiktionary_layout() {
        let out = format_definition(&definition("maçã", DictionarySource::Wiktionary, "● fruta"));
        assert!(out.contains("\x1b["));
        assert!(out.contains("Maçã"));
        assert_eq!(strip_styles(&out), "\nMaçã\n\n● fruta\n");
    }

    #[test]
    fn dicio_layout_is_indented() {
        let out = format_definition(&definition("casa", DictionarySource::Dicio, "Moradia;\n    Lar."));
        assert_eq!(strip_styles(&out), "\nCasa\n\n    Moradia;\n    Lar.\n");
    }

    #[test]
    fn strip_removes_description_styles() {
        assert_eq!(strip_styles("\x1b[1mcasa\x1b[0m e \x1b[3mlar\x1b[0m"), "casa e lar");
    }
}
