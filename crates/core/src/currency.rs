//! Currency conversion: rate table, provider trait, and the conversion
//! registry queried before expressions reach the evaluator.
//!
//! Registration is additive and monotonic for the lifetime of the
//! session: a capability is registered at most once per currency (to the
//! home currency, at startup) and at most once per distinct `(from, to)`
//! pair (lazily, when a dirty line first mentions it). A pair with no
//! rate in the table is silently skipped; the expression then fails
//! evaluation instead of raising a setup error.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Rate table + provider
// ──────────────────────────────────────────────

/// Conversion rates keyed by upper-case currency code:
/// `rates[from][to]` is the multiplier taking `from` into `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub home_currency: String,
    pub rates: BTreeMap<String, BTreeMap<String, f64>>,
}

impl RateTable {
    /// Currency used when no provider data is available.
    pub const FALLBACK_CURRENCY: &'static str = "USD";

    /// Fallback table: home currency only, no rates.
    pub fn fallback() -> RateTable {
        RateTable {
            home_currency: RateTable::FALLBACK_CURRENCY.to_string(),
            rates: BTreeMap::new(),
        }
    }

    /// The multiplier for `from` → `to`, if the table has one.
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.rates
            .get(&from.to_uppercase())
            .and_then(|row| row.get(&to.to_uppercase()))
            .copied()
    }

    /// Obtain a table from a provider, degrading to [`RateTable::fallback`]
    /// on any provider failure.
    pub fn from_provider(provider: &dyn RateProvider) -> RateTable {
        provider.rates().unwrap_or_else(|_| RateTable::fallback())
    }
}

/// Errors reported by a rate provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// A provider-specific failure (network, malformed payload, ...).
    Provider(String),
}

impl fmt::Display for RateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateError::Provider(msg) => write!(f, "rate provider error: {}", msg),
        }
    }
}

impl std::error::Error for RateError {}

/// Supplies the home currency and conversion rates at startup.
pub trait RateProvider {
    fn rates(&self) -> Result<RateTable, RateError>;
}

/// A provider that returns a fixed table. Useful for tests and for
/// hosts that load rates themselves.
pub struct StaticRateProvider {
    table: RateTable,
}

impl StaticRateProvider {
    pub fn new(table: RateTable) -> Self {
        StaticRateProvider { table }
    }
}

impl RateProvider for StaticRateProvider {
    fn rates(&self) -> Result<RateTable, RateError> {
        Ok(self.table.clone())
    }
}

// ──────────────────────────────────────────────
// Conversion phrase scanning
// ──────────────────────────────────────────────

/// A `<amount> <FROM> (to|in) <TO>` phrase found in a line.
#[derive(Debug, Clone, PartialEq)]
struct Phrase {
    from: String,
    to: String,
    /// Char index one past the TO code.
    end: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A three-letter currency code at `at`, bounded on the right by a
/// non-word character or the end of input.
fn code_at(chars: &[char], at: usize) -> Option<(String, usize)> {
    if at + 3 > chars.len() {
        return None;
    }
    if !chars[at..at + 3].iter().all(|c| c.is_alphabetic()) {
        return None;
    }
    if chars.get(at + 3).is_some_and(|c| is_word_char(*c)) {
        return None;
    }
    Some((chars[at..at + 3].iter().collect(), at + 3))
}

fn skip_whitespace(chars: &[char], mut at: usize) -> usize {
    while at < chars.len() && chars[at].is_whitespace() {
        at += 1;
    }
    at
}

/// Match `<FROM> (to|in) <TO>` starting at `at` (the position right after
/// any whitespace following the amount).
fn phrase_at(chars: &[char], at: usize) -> Option<Phrase> {
    let (from, after_from) = code_at(chars, at)?;
    let after_ws = skip_whitespace(chars, after_from);
    if after_ws == after_from {
        return None;
    }
    let prep: String = chars.get(after_ws..after_ws + 2)?.iter().collect();
    if prep != "to" && prep != "in" {
        return None;
    }
    let after_prep = after_ws + 2;
    let before_to = skip_whitespace(chars, after_prep);
    if before_to == after_prep {
        return None;
    }
    let (to, end) = code_at(chars, before_to)?;
    Some(Phrase { from, to, end })
}

/// Skip a numeric literal (digits with an optional fractional part).
fn skip_number(chars: &[char], mut at: usize) -> usize {
    while at < chars.len() && chars[at].is_ascii_digit() {
        at += 1;
    }
    if at + 1 < chars.len() && chars[at] == '.' && chars[at + 1].is_ascii_digit() {
        at += 1;
        while at < chars.len() && chars[at].is_ascii_digit() {
            at += 1;
        }
    }
    at
}

/// All conversion phrases preceded by an amount in `text`.
fn phrases(text: &str) -> Vec<Phrase> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            i = skip_number(&chars, i);
            let at = skip_whitespace(&chars, i);
            if let Some(p) = phrase_at(&chars, at) {
                i = p.end;
                out.push(p);
            }
        } else {
            i += 1;
        }
    }
    out
}

// ──────────────────────────────────────────────
// Conversion registry
// ──────────────────────────────────────────────

/// Registered conversion capabilities, queried to rewrite expressions
/// before they reach the evaluator.
#[derive(Debug)]
pub struct ConversionRegistry {
    table: RateTable,
    /// Lower-case code → multiplier into the home currency.
    home_units: BTreeMap<String, f64>,
    /// Lower-case (from, to) → multiplier. Grows monotonically.
    pairs: BTreeMap<(String, String), f64>,
}

impl ConversionRegistry {
    /// Build the registry: every currency in the table with a rate into
    /// the home currency gets its baseline capability up front.
    pub fn new(table: RateTable) -> ConversionRegistry {
        let home = table.home_currency.to_uppercase();
        let mut home_units = BTreeMap::new();
        for (from, row) in &table.rates {
            if let Some(rate) = row.get(&home) {
                home_units.insert(from.to_lowercase(), *rate);
            }
        }
        ConversionRegistry {
            table,
            home_units,
            pairs: BTreeMap::new(),
        }
    }

    pub fn home_currency(&self) -> &str {
        &self.table.home_currency
    }

    /// Number of distinct registered `(from, to)` pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Scan one dirty line for pairwise conversion phrases and register
    /// each new pair that has a rate in the table.
    pub fn scan(&mut self, line: &str) {
        for p in phrases(line) {
            let key = (p.from.to_lowercase(), p.to.to_lowercase());
            if self.pairs.contains_key(&key) {
                continue;
            }
            if let Some(rate) = self.table.rate(&p.from, &p.to) {
                self.pairs.insert(key, rate);
            }
        }
    }

    /// Rewrite registered conversions in an expression into plain
    /// multiplications: `1 usd to gbp` → `1 * 0.8`, `5 eur` →
    /// `5 * <rate eur→home>`. Unregistered conversions are left
    /// untouched and fail evaluation downstream.
    pub fn rewrite(&self, expr: &str) -> String {
        let chars: Vec<char> = expr.chars().collect();
        let mut out = String::with_capacity(expr.len());
        let mut i = 0;
        while i < chars.len() {
            if !chars[i].is_ascii_digit() {
                out.push(chars[i]);
                i += 1;
                continue;
            }
            let start = i;
            i = skip_number(&chars, i);
            out.extend(&chars[start..i]);
            let at = skip_whitespace(&chars, i);
            if let Some(p) = phrase_at(&chars, at) {
                let key = (p.from.to_lowercase(), p.to.to_lowercase());
                if let Some(rate) = self.pairs.get(&key) {
                    out.push_str(&format!(" * {}", rate));
                    i = p.end;
                }
                // A phrase with no registered pair stays as-is, including
                // its amount-to-code gap, copied by the outer loop.
            } else if let Some((code, end)) = code_at(&chars, at) {
                if let Some(rate) = self.home_units.get(&code.to_lowercase()) {
                    out.push_str(&format!(" * {}", rate));
                    i = end;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_gbp_table() -> RateTable {
        let mut rates = BTreeMap::new();
        let mut usd = BTreeMap::new();
        usd.insert("GBP".to_string(), 0.8);
        rates.insert("USD".to_string(), usd);
        RateTable {
            home_currency: "GBP".to_string(),
            rates,
        }
    }

    #[test]
    fn fallback_on_provider_failure() {
        struct Failing;
        impl RateProvider for Failing {
            fn rates(&self) -> Result<RateTable, RateError> {
                Err(RateError::Provider("offline".into()))
            }
        }
        let table = RateTable::from_provider(&Failing);
        assert_eq!(table.home_currency, "USD");
        assert!(table.rates.is_empty());
    }

    #[test]
    fn finds_conversion_phrases() {
        let found = phrases("1 usd to gbp + 2 eur in jpy");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].from, "usd");
        assert_eq!(found[0].to, "gbp");
        assert_eq!(found[1].from, "eur");
        assert_eq!(found[1].to, "jpy");
    }

    #[test]
    fn phrase_needs_an_amount() {
        assert!(phrases("usd to gbp").is_empty());
    }

    #[test]
    fn phrase_codes_are_three_letters() {
        assert!(phrases("1 usdx to gbp").is_empty());
        assert!(phrases("1 us to gbp").is_empty());
    }

    #[test]
    fn registers_each_pair_once() {
        let mut registry = ConversionRegistry::new(usd_gbp_table());
        registry.scan("1 usd to gbp");
        registry.scan("250 usd to gbp");
        assert_eq!(registry.pair_count(), 1);
    }

    #[test]
    fn missing_rate_is_silently_skipped() {
        let mut registry = ConversionRegistry::new(usd_gbp_table());
        registry.scan("1 gbp to usd");
        assert_eq!(registry.pair_count(), 0);
    }

    #[test]
    fn rewrites_registered_pair() {
        let mut registry = ConversionRegistry::new(usd_gbp_table());
        registry.scan("1 usd to gbp");
        assert_eq!(registry.rewrite("1 usd to gbp"), "1 * 0.8");
        assert_eq!(registry.rewrite("3 + 1 usd in gbp"), "3 + 1 * 0.8");
    }

    #[test]
    fn leaves_unregistered_pair_untouched() {
        let registry = ConversionRegistry::new(usd_gbp_table());
        assert_eq!(registry.rewrite("1 usd to gbp"), "1 usd to gbp");
    }

    #[test]
    fn rewrites_bare_code_to_home_currency() {
        let registry = ConversionRegistry::new(usd_gbp_table());
        // USD has a GBP rate and GBP is home.
        assert_eq!(registry.rewrite("100 usd"), "100 * 0.8");
        assert_eq!(registry.rewrite("100 usd + 1"), "100 * 0.8 + 1");
    }

    #[test]
    fn bare_code_without_home_rate_is_untouched() {
        let registry = ConversionRegistry::new(usd_gbp_table());
        assert_eq!(registry.rewrite("100 eur"), "100 eur");
    }
}
