//! End-to-end pipeline suite: full document passes through
//! `reckon_core::DocumentEvaluator` with the shipped calculator backend.
//!
//! Organized by category:
//!   A. Display scenarios
//!   B. Incremental recomputation
//!   C. Variable validation
//!   D. Normalization
//!   E. Currency conversion

use std::collections::BTreeMap;

use reckon_core::{
    DisplayToken, DocumentEvaluator, EnglishCatalog, LineToken, RateTable,
};
use reckon_eval::Calculator;

// ──────────────────────────────────────────────
// Test helpers
// ──────────────────────────────────────────────

fn engine() -> DocumentEvaluator {
    DocumentEvaluator::new(Box::new(Calculator), RateTable::fallback())
}

fn engine_with_rates(home: &str, triples: &[(&str, &str, f64)]) -> DocumentEvaluator {
    let mut rates: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for (from, to, rate) in triples {
        rates
            .entry((*from).to_string())
            .or_default()
            .insert((*to).to_string(), *rate);
    }
    let table = RateTable {
        home_currency: home.to_string(),
        rates,
    };
    DocumentEvaluator::new(Box::new(Calculator), table)
}

fn render(text: &str) -> Vec<DisplayToken> {
    let mut engine = engine();
    engine.update(text);
    engine.results(&EnglishCatalog)
}

fn result_value(token: &DisplayToken) -> f64 {
    match token {
        DisplayToken::Result { value } => *value,
        other => panic!("expected result token, got {:?}", other),
    }
}

// ──────────────────────────────────────────────
// A. Display scenarios
// ──────────────────────────────────────────────

#[test]
fn simple_arithmetic_yields_result() {
    let display = render("2 + 2");
    assert_eq!(display, vec![DisplayToken::Result { value: 4.0 }]);
}

#[test]
fn variable_capture_and_use() {
    let display = render("x = 5\nx * 2");
    assert_eq!(
        display[0],
        DisplayToken::Variable {
            name: "x".to_string(),
            value: Some(5.0)
        }
    );
    assert_eq!(display[1], DisplayToken::Result { value: 10.0 });
}

#[test]
fn empty_right_side_is_unresolved_not_a_crash() {
    let display = render("total = ");
    assert_eq!(
        display,
        vec![DisplayToken::Variable {
            name: "total".to_string(),
            value: None
        }]
    );
}

#[test]
fn referencing_an_unresolved_variable_yields_null() {
    let display = render("total = \ntotal + 1");
    assert_eq!(display[1], DisplayToken::Null);
}

#[test]
fn prose_without_digits_is_null() {
    let display = render("hello world");
    assert_eq!(display, vec![DisplayToken::Null]);
}

#[test]
fn comments_headings_and_blanks_are_null() {
    let display = render("// comment\nMarch budget:\n\n2 + 2");
    assert_eq!(display[0], DisplayToken::Null);
    assert_eq!(display[1], DisplayToken::Null);
    assert_eq!(display[2], DisplayToken::Null);
    assert_eq!(display[3], DisplayToken::Result { value: 4.0 });
}

#[test]
fn incomplete_typing_shows_no_result() {
    let display = render("2 +");
    assert_eq!(display, vec![DisplayToken::Null]);
}

#[test]
fn stray_equals_on_expression_line_is_dropped() {
    let display = render("2 + 2 =");
    assert_eq!(display, vec![DisplayToken::Result { value: 4.0 }]);
}

#[test]
fn division_by_zero_yields_null() {
    let display = render("1 / 0");
    assert_eq!(display, vec![DisplayToken::Null]);
}

#[test]
fn constants_resolve() {
    let display = render("2 * pi");
    assert_eq!(result_value(&display[0]), 2.0 * 3.1415926535);
}

#[test]
fn unknown_word_in_assignment_is_erased() {
    let display = render("v = 5 bananas");
    assert_eq!(
        display[0],
        DisplayToken::Variable {
            name: "v".to_string(),
            value: Some(5.0)
        }
    );
}

#[test]
fn variable_chain_evaluates_through() {
    let display = render("a = 2\nb = a * 3\na + b");
    assert_eq!(result_value(&display[2]), 8.0);
}

// ──────────────────────────────────────────────
// B. Incremental recomputation
// ──────────────────────────────────────────────

#[test]
fn second_pass_on_unchanged_text_recomputes_nothing() {
    let mut engine = engine();
    let text = "x = 5\nx * 2\n// done";
    assert_eq!(engine.update(text), 3);
    let before = engine.tokens().to_vec();
    assert_eq!(engine.update(text), 0);
    assert_eq!(engine.tokens(), &before[..]);
}

#[test]
fn forward_reference_does_not_substitute() {
    let display = render("x * 2\n\nx = 5\n\nx * 2");
    // Line 0: `x` is a bare word above its definition; `x * 2` fails.
    assert_eq!(display[0], DisplayToken::Null);
    // Line 4 sees the definition.
    assert_eq!(display[4], DisplayToken::Result { value: 10.0 });
}

#[test]
fn value_edit_recomputes_dependents() {
    let mut engine = engine();
    engine.update("a = 1\nb = a + 1\nc = b + 1");
    engine.update("a = 2\nb = a + 1\nc = b + 1");
    let display = engine.results(&EnglishCatalog);
    assert_eq!(
        display[2],
        DisplayToken::Variable {
            name: "c".to_string(),
            value: Some(4.0)
        }
    );
}

#[test]
fn rename_recomputes_lines_mentioning_old_and_new_names() {
    let mut engine = engine();
    engine.update("a = 1\na + 1\nb + 1");
    let display = engine.results(&EnglishCatalog);
    assert_eq!(display[1], DisplayToken::Result { value: 2.0 });
    assert_eq!(display[2], DisplayToken::Null);

    // Rename a → b: line 1 loses its binding, line 2 gains one, and
    // neither line's own text changed.
    engine.update("b = 1\na + 1\nb + 1");
    let display = engine.results(&EnglishCatalog);
    assert_eq!(display[1], DisplayToken::Null);
    assert_eq!(display[2], DisplayToken::Result { value: 2.0 });
}

#[test]
fn removing_a_definition_invalidates_dependents() {
    let mut engine = engine();
    engine.update("a = 1\na + 1");
    engine.update("// a = 1\na + 1");
    let display = engine.results(&EnglishCatalog);
    assert_eq!(display[1], DisplayToken::Null);
}

#[test]
fn inserted_line_shifts_and_recomputes_below() {
    let mut engine = engine();
    engine.update("x = 5\nx * 2");
    engine.update("// note\nx = 5\nx * 2");
    let display = engine.results(&EnglishCatalog);
    assert_eq!(display[2], DisplayToken::Result { value: 10.0 });
}

#[test]
fn shrinking_the_document_discards_overflow() {
    let mut engine = engine();
    engine.update("1 + 1\n2 + 2\n3 + 3");
    engine.update("1 + 1");
    assert_eq!(engine.tokens().len(), 1);
}

#[test]
fn later_duplicate_does_not_shadow_earlier_definition() {
    let mut engine = engine();
    engine.update("n = 5\nn = 6\nn * 2");
    let display = engine.results(&EnglishCatalog);
    // The first definition wins for lines below.
    assert_eq!(result_value(&display[2]), 10.0);
}

// ──────────────────────────────────────────────
// C. Variable validation
// ──────────────────────────────────────────────

#[test]
fn duplicate_definition_errors_on_the_later_line_only() {
    let display = render("n = 5\n\nn = 6");
    assert_eq!(
        display[0],
        DisplayToken::Variable {
            name: "n".to_string(),
            value: Some(5.0)
        }
    );
    assert_eq!(
        display[2],
        DisplayToken::Error {
            value: "Duplicate variable name".to_string()
        }
    );
}

#[test]
fn reserved_names_are_rejected_regardless_of_right_side() {
    for line in ["pi = 3", "e = 1", "sqrt = 2 + 2", "to = 9"] {
        let display = render(line);
        assert_eq!(
            display[0],
            DisplayToken::Error {
                value: "Invalid variable name".to_string()
            },
            "line: {}",
            line
        );
    }
}

#[test]
fn errored_definition_does_not_bind_a_symbol() {
    let display = render("pi = 3\n2 * pi");
    // `pi` still resolves to the built-in constant below the error.
    assert_eq!(result_value(&display[1]), 2.0 * 3.1415926535);
}

// ──────────────────────────────────────────────
// D. Normalization
// ──────────────────────────────────────────────

#[test]
fn suffix_expansion_feeds_evaluation() {
    let display = render("12k + 1");
    assert_eq!(display, vec![DisplayToken::Result { value: 12001.0 }]);
}

#[test]
fn bare_suffix_literal() {
    let mut engine = engine();
    engine.update("3M");
    assert_eq!(
        engine.tokens()[0],
        Some(LineToken::Expression {
            text: "3000000".to_string(),
            result: Some(3_000_000.0)
        })
    );
}

#[test]
fn tabs_are_stripped_before_anything_else() {
    let display = render("\t2 + 2");
    assert_eq!(display, vec![DisplayToken::Result { value: 4.0 }]);
}

#[test]
fn x_works_as_multiplication_sign() {
    let display = render("3 x 4");
    assert_eq!(display, vec![DisplayToken::Result { value: 12.0 }]);
}

// ──────────────────────────────────────────────
// E. Currency conversion
// ──────────────────────────────────────────────

#[test]
fn pairwise_conversion() {
    let mut engine = engine_with_rates("GBP", &[("USD", "GBP", 0.8)]);
    engine.update("1 usd to gbp");
    let display = engine.results(&EnglishCatalog);
    assert_eq!(display, vec![DisplayToken::Result { value: 0.8 }]);
}

#[test]
fn conversion_with_in_preposition() {
    let mut engine = engine_with_rates("GBP", &[("USD", "GBP", 0.8)]);
    engine.update("10 usd in gbp");
    let display = engine.results(&EnglishCatalog);
    assert_eq!(display, vec![DisplayToken::Result { value: 8.0 }]);
}

#[test]
fn bare_code_converts_to_home_currency() {
    let mut engine = engine_with_rates("GBP", &[("USD", "GBP", 0.8)]);
    engine.update("100 usd");
    let display = engine.results(&EnglishCatalog);
    assert_eq!(display, vec![DisplayToken::Result { value: 80.0 }]);
}

#[test]
fn unknown_pair_fails_evaluation_silently() {
    let mut engine = engine_with_rates("GBP", &[("USD", "GBP", 0.8)]);
    engine.update("1 gbp to usd");
    let display = engine.results(&EnglishCatalog);
    assert_eq!(display, vec![DisplayToken::Null]);
}

#[test]
fn empty_rate_table_makes_conversions_unavailable() {
    let display = render("1 usd to gbp");
    assert_eq!(display, vec![DisplayToken::Null]);
}

#[test]
fn pair_registration_is_once_per_session() {
    let mut engine = engine_with_rates("GBP", &[("USD", "GBP", 0.8)]);
    engine.update("1 usd to gbp");
    engine.update("1 usd to gbp\n2 usd to gbp");
    assert_eq!(engine.registry().pair_count(), 1);
}

#[test]
fn conversion_combines_with_arithmetic() {
    let mut engine = engine_with_rates("GBP", &[("USD", "GBP", 0.8)]);
    engine.update("10 usd to gbp + 2");
    let display = engine.results(&EnglishCatalog);
    assert_eq!(display, vec![DisplayToken::Result { value: 10.0 }]);
}
