// defina-core/tests/pipeline_tests.rs
//! Behavioural tests for the built-in Wiktionary table run through the
//! ordered rewrite pipeline.

use anyhow::Result;

use defina_core::config::{RuleTable, WIKTIONARY_TABLE};
use defina_core::engine::NormalizationEngine;
use defina_core::{apply_rules, compile_rules, get_or_compile_rules, WikitextEngine};

const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const RESET: &str = "\x1b[0m";

const FALLBACKS: [&str; 7] = [
    "Result not Found",
    "Result not found",
    "Bad request",
    "Unauthorized request",
    "Forbidden",
    "Not found",
    "Something is wrong with the server",
];

const PAGE: &str = "={{-pt-}}=
{{Wikipédia}}
[[Imagem:Casa.jpg|thumb|Uma casa]]
==Substantivo==
{{paroxítona|ca|sa}}
'''ca.sa''', [[feminino]]

# [[construção]] destinada a [[habitação]]
# [[família]]
#* ''A casa dos Silva.''

===Tradução===
{{tradini}}
* {{trad|en|house}}
";

fn wiktionary() -> Result<RuleTable> {
    RuleTable::load_builtin(WIKTIONARY_TABLE)
}

#[test]
fn fallback_strings_pass_through_unchanged() -> Result<()> {
    let rules = get_or_compile_rules(&wiktionary()?)?;
    let engine = WikitextEngine::with_builtin_rules()?;
    for fallback in FALLBACKS {
        assert_eq!(apply_rules(fallback, &rules), fallback);
        assert_eq!(engine.normalize(fallback)?, fallback);
    }
    Ok(())
}

#[test]
fn pipeline_is_deterministic() -> Result<()> {
    let engine = WikitextEngine::with_builtin_rules()?;
    assert_eq!(engine.normalize(PAGE)?, engine.normalize(PAGE)?);
    Ok(())
}

#[test]
fn full_page_is_cleaned() -> Result<()> {
    let engine = WikitextEngine::with_builtin_rules()?;
    let out = engine.normalize(PAGE)?;

    for leftover in ["Tradução", "trad", "Wikipédia", "Imagem", "=", "[[", "]]", "{{", "}}", "#", "-pt-"] {
        assert!(!out.contains(leftover), "found {:?} in {:?}", leftover, out);
    }
    assert!(out.contains(&format!("● {BOLD}construção{RESET} destinada a {BOLD}habitação{RESET}")));
    assert!(out.contains(&format!("{ITALIC}paroxítona | ca | sa{RESET}")));
    assert!(out.contains(&format!("{BOLD}ca.sa{RESET}")));

    let expected = format!(
        "{BOLD}Substantivo\n{ITALIC}paroxítona | ca | sa{RESET}\n{BOLD}ca.sa{RESET}, {BOLD}feminino{RESET}\n\n\
         ● {BOLD}construção{RESET} destinada a {BOLD}habitação{RESET}\n● {BOLD}família{RESET}"
    );
    assert_eq!(out, expected);
    Ok(())
}

#[test]
fn heading_rule_alone_styles_heading() -> Result<()> {
    let table = wiktionary()?;
    let heading = table.rule("headings").expect("built-in table has a heading rule").clone();
    let rules = compile_rules(vec![heading])?;

    let out = apply_rules("==Etymology==\n", &rules);
    let italic = out.find(ITALIC).expect("italic-on");
    let word = out.find("Etymology").expect("heading text");
    let reset = out.find(RESET).expect("reset");
    assert!(italic < word && word < reset);
    assert!(out[reset + RESET.len()..].starts_with('\n'));
    Ok(())
}

#[test]
fn heading_rule_is_shadowed_by_marker_removal() -> Result<()> {
    let engine = WikitextEngine::with_builtin_rules()?;
    assert_eq!(engine.normalize("==Etymology==\n")?, "Etymology");

    let mut table = wiktionary()?;
    table.set_disabled_rules(&["heading_markers_and_spaces".to_string()]);
    let engine = WikitextEngine::new(table)?;
    assert_eq!(engine.normalize("==Etymology==\n")?, format!("{ITALIC}Etymology{RESET}"));
    Ok(())
}

#[test]
fn no_run_of_three_newlines_survives() -> Result<()> {
    let rules = get_or_compile_rules(&wiktionary()?)?;
    let samples = [
        "a\n\n\n\n\nb",
        "a\n\n\n\n\nb\n\n\n#\n\n\nc",
        "[[x]]\n\n\n\n{{y}}",
        "# um\n\n\n\n# dois\n\n\n\n\n\n",
        PAGE,
    ];
    for sample in samples {
        let out = apply_rules(sample, &rules);
        assert!(!out.contains("\n\n\n"), "triple newline in {:?}", out);
    }
    Ok(())
}

#[test]
fn blank_lines_around_styles_are_removed() -> Result<()> {
    let engine = WikitextEngine::with_builtin_rules()?;
    let out = engine.normalize("[[x]]\n\n\n\n{{y}}")?;
    assert_eq!(out, format!("{BOLD}x{RESET}\n{ITALIC}y{RESET}"));
    Ok(())
}

#[test]
fn translations_section_is_dropped() -> Result<()> {
    let engine = WikitextEngine::with_builtin_rules()?;
    assert_eq!(engine.normalize("Some text\n\nTradução\nFrench: ...")?, "Some text");
    Ok(())
}

#[test]
fn empty_styled_header_is_removed() -> Result<()> {
    let engine = WikitextEngine::with_builtin_rules()?;
    assert_eq!(engine.normalize("[[{{\n\n\nfoo")?, "foo");
    Ok(())
}

#[test]
fn empty_styled_header_needs_its_rule() -> Result<()> {
    let mut table = wiktionary()?;
    table.set_disabled_rules(&["empty_styled_header".to_string()]);
    let engine = WikitextEngine::new(table)?;
    assert_eq!(engine.normalize("[[{{\n\n\nfoo")?, format!("{BOLD}{ITALIC}\nfoo"));
    Ok(())
}

#[test]
fn dangling_bullet_is_collapsed() -> Result<()> {
    let engine = WikitextEngine::with_builtin_rules()?;
    assert_eq!(engine.normalize("a\n\n#\n\nb")?, "a\n\nb");

    let mut table = wiktionary()?;
    table.set_disabled_rules(&["dangling_bullets".to_string()]);
    let engine = WikitextEngine::new(table)?;
    assert_eq!(engine.normalize("a\n\n#\n\nb")?, "a\n\n●\n\nb");
    Ok(())
}

#[test]
fn dangling_template_at_end_of_text() -> Result<()> {
    let table = wiktionary()?;
    let rule = table.rule("heading_markers_and_spaces").expect("built-in rule").clone();
    let rules = compile_rules(vec![rule])?;
    assert_eq!(apply_rules("texto {{\n", &rules), "texto \n");
    assert_eq!(apply_rules("texto {{", &rules), "texto ");
    assert_eq!(apply_rules("a {{\nb", &rules), "a {{\nb");
    Ok(())
}
