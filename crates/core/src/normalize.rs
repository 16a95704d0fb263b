//! Text normalization: tab stripping and shorthand-suffix expansion.
//!
//! Runs before any other per-line analysis. Suffix expansion rewrites
//! `12k` to `12000`, `3M` to `3000000` and `5B` to `5000000000` as a
//! single left-to-right scan, so repeated literals on one line are each
//! expanded independently.

/// Normalize one raw line: remove literal tabs, then expand suffixes.
pub fn normalize(line: &str) -> String {
    expand_suffixes(&strip_tabs(line))
}

/// Remove literal tab characters inserted by the editing surface.
pub fn strip_tabs(line: &str) -> String {
    line.chars().filter(|c| *c != '\t').collect()
}

fn multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'k' | 'K' => Some(1_000.0),
        'M' => Some(1_000_000.0),
        'B' => Some(1_000_000_000.0),
        _ => None,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Format an expanded value as a plain decimal literal.
fn decimal_literal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Expand abbreviated numbers: `<digits>[.<digits>]` immediately followed
/// by `k`/`K` (×1e3), `M` (×1e6) or `B` (×1e9), with a word boundary after
/// the suffix. Malformed suffixes are left untouched.
pub fn expand_suffixes(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        // Numeric literal: digits with an optional fractional part.
        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
        let literal: String = chars[start..i].iter().collect();

        // A suffix counts only when followed by a non-word char or the end.
        let suffix = chars.get(i).copied().and_then(multiplier);
        let bounded = match chars.get(i + 1) {
            Some(c) => !is_word_char(*c),
            None => true,
        };

        match suffix {
            Some(factor) if bounded => {
                match literal.parse::<f64>() {
                    Ok(value) => {
                        out.push_str(&decimal_literal(value * factor));
                        i += 1; // consume the suffix char
                    }
                    Err(_) => out.push_str(&literal),
                }
            }
            _ => out.push_str(&literal),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tabs() {
        assert_eq!(strip_tabs("\t2 + 2"), "2 + 2");
    }

    #[test]
    fn tab_removal_does_not_insert_spaces() {
        assert_eq!(strip_tabs("2 +\t2"), "2 +2");
        assert_eq!(strip_tabs("\t\ta\tb\t"), "ab");
    }

    #[test]
    fn expands_thousand_suffix() {
        assert_eq!(expand_suffixes("12k + 1"), "12000 + 1");
        assert_eq!(expand_suffixes("12K + 1"), "12000 + 1");
    }

    #[test]
    fn expands_million_and_billion() {
        assert_eq!(expand_suffixes("3M"), "3000000");
        assert_eq!(expand_suffixes("5B"), "5000000000");
    }

    #[test]
    fn expands_fractional_values() {
        assert_eq!(expand_suffixes("2.5k"), "2500");
        assert_eq!(expand_suffixes("0.1M"), "100000");
    }

    #[test]
    fn expands_repeated_literals_independently() {
        // The replace-by-value hazard: both 2k occurrences must expand.
        assert_eq!(expand_suffixes("2k + 2k"), "2000 + 2000");
        assert_eq!(expand_suffixes("1k + 1K + 1k"), "1000 + 1000 + 1000");
    }

    #[test]
    fn leaves_unbounded_suffixes_untouched() {
        assert_eq!(expand_suffixes("12kg"), "12kg");
        assert_eq!(expand_suffixes("3Mx"), "3Mx");
        assert_eq!(expand_suffixes("12k2"), "12k2");
    }

    #[test]
    fn leaves_unknown_suffixes_untouched() {
        assert_eq!(expand_suffixes("12T"), "12T");
        assert_eq!(expand_suffixes("12m"), "12m");
    }

    #[test]
    fn expands_mid_line() {
        assert_eq!(expand_suffixes("price = 1.5k usd"), "price = 1500 usd");
    }
}
