//! The document evaluator: one instance owns all mutable pipeline state
//! for one document and runs one full synchronous pass per edit event.

use crate::catalog::MessageCatalog;
use crate::classify::{classify, LineClass};
use crate::constants::is_reserved;
use crate::currency::{ConversionRegistry, RateTable};
use crate::dirty::{is_line_dirty, EditedNames};
use crate::evaluator::ExpressionEvaluator;
use crate::normalize::normalize;
use crate::project::{project, DisplayToken};
use crate::resolve::{resolve_assignment, resolve_expression, Symbols};
use crate::types::{LineToken, ValidationKind};

/// Incremental evaluator for one document.
///
/// Holds the line snapshot, the per-line token cache, and the conversion
/// registry. `update` runs one full pass; passes are synchronous and
/// serialized by exclusive ownership — there is no shared state.
pub struct DocumentEvaluator {
    evaluator: Box<dyn ExpressionEvaluator>,
    registry: ConversionRegistry,
    /// Raw line text from the previous pass, by index.
    snapshot: Vec<String>,
    /// One cached token per current line; `None` until first computed.
    tokens: Vec<Option<LineToken>>,
}

impl DocumentEvaluator {
    pub fn new(evaluator: Box<dyn ExpressionEvaluator>, rates: RateTable) -> DocumentEvaluator {
        DocumentEvaluator {
            evaluator,
            registry: ConversionRegistry::new(rates),
            snapshot: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Clear per-document state for a document load/switch. Conversion
    /// registrations are session-lived and survive.
    pub fn reset(&mut self) {
        self.snapshot.clear();
        self.tokens.clear();
    }

    pub fn registry(&self) -> &ConversionRegistry {
        &self.registry
    }

    /// The token cache, one entry per current line.
    pub fn tokens(&self) -> &[Option<LineToken>] {
        &self.tokens
    }

    /// Project the cache into the display model.
    pub fn results(&self, catalog: &dyn MessageCatalog) -> Vec<DisplayToken> {
        project(&self.tokens, catalog)
    }

    /// Run one full pipeline pass over the current text. Returns the
    /// number of lines recomputed.
    pub fn update(&mut self, text: &str) -> usize {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut edited = EditedNames::default();
        let mut recomputed = 0;

        // Cache and snapshot track the current line count; overflow
        // entries are discarded, new indices start uninitialized.
        self.tokens.resize(lines.len(), None);

        for (i, raw) in lines.iter().enumerate() {
            let current = normalize(raw);
            let previous = self.snapshot.get(i).map(|s| normalize(s));
            if !is_line_dirty(&current, previous.as_deref(), &edited) {
                continue;
            }
            recomputed += 1;

            self.registry.scan(&current);

            let old_name = self.tokens[i]
                .as_ref()
                .and_then(LineToken::name)
                .map(str::to_owned);
            let token = self.compute(&current, i);

            // Feed name changes forward: a dirty defining line makes every
            // later mention dirty too, whether the name was introduced,
            // removed, renamed, or merely recomputed.
            if let Some(name) = &old_name {
                edited.add(name);
            }
            if let Some(name) = token.name() {
                edited.add(name);
            }

            self.tokens[i] = Some(token);
        }

        self.snapshot = lines.iter().map(|s| s.to_string()).collect();
        recomputed
    }

    fn compute(&self, line: &str, index: usize) -> LineToken {
        match classify(line) {
            LineClass::Blank => LineToken::Blank,
            LineClass::Comment => LineToken::Comment {
                text: line.trim().to_string(),
            },
            LineClass::Assignment { name, rest } => self.compute_assignment(name, &rest, index),
            LineClass::Expression => self.compute_expression(line, index),
        }
    }

    fn compute_assignment(&self, name: String, rest: &str, index: usize) -> LineToken {
        if is_reserved(&name) {
            return LineToken::Error {
                name,
                kind: ValidationKind::ReservedName,
            };
        }
        let duplicate = self.tokens[..index]
            .iter()
            .flatten()
            .any(|t| t.name() == Some(name.as_str()));
        if duplicate {
            return LineToken::Error {
                name,
                kind: ValidationKind::DuplicateName,
            };
        }

        let symbols = Symbols::new(&self.tokens);
        let resolved = resolve_assignment(rest, &symbols, index);
        let value = self.eval_number(&resolved);
        LineToken::Variable { name, value }
    }

    fn compute_expression(&self, line: &str, index: usize) -> LineToken {
        // A stray `=` on a non-assignment line is user typing, not syntax.
        let stripped = line.replace('=', "");
        let symbols = Symbols::new(&self.tokens);
        let resolved = resolve_expression(&stripped, &symbols, index);

        // Without a digit there is nothing to evaluate: degrade to comment
        // so prose never reaches the evaluator.
        if !resolved.chars().any(|c| c.is_ascii_digit()) {
            return LineToken::Comment {
                text: resolved.trim().to_string(),
            };
        }

        let result = self.eval_number(&resolved);
        LineToken::Expression {
            text: resolved.trim().to_string(),
            result,
        }
    }

    /// Evaluate a resolved string to a finite number, or nothing.
    fn eval_number(&self, resolved: &str) -> Option<f64> {
        let trimmed = resolved.trim();
        if trimmed.is_empty() {
            return None;
        }
        // Plain numeric literals skip the evaluator.
        if let Ok(value) = trimmed.parse::<f64>() {
            return value.is_finite().then_some(value);
        }
        let rewritten = self.registry.rewrite(trimmed);
        match self.evaluator.evaluate(rewritten.trim()) {
            Ok(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }
}

/// Derive a document title from its text: the first line, cut to 30
/// characters at a space where possible.
pub fn derive_title(text: &str) -> String {
    const MAX_LENGTH: usize = 30;
    let first = text.trim().lines().next().unwrap_or("");
    let chars: Vec<char> = first.chars().collect();
    if chars.len() <= MAX_LENGTH {
        return first.to_string();
    }
    let head: String = chars[..MAX_LENGTH].iter().collect();
    if !head.contains(' ') {
        return head;
    }
    // Cut at the last space at or before the limit.
    let window: String = chars[..=MAX_LENGTH].iter().collect();
    match window.rfind(' ') {
        Some(cut) => window[..cut].to_string(),
        None => head,
    }
}
