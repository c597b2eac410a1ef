use std::fmt;

/// Ordered, comma-joined sequence of numeric tokens derived from raw user
/// input. Construction goes through [`CanonicalQuery::parse`], so a value of
/// this type always holds at least one token and every token parses back to
/// a finite number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalQuery(String);

impl CanonicalQuery {
    /// Normalizes free-form input into a canonical query.
    ///
    /// Splits on any run of commas and whitespace, drops tokens that do not
    /// parse to a finite number, and renders each survivor back to its
    /// canonical decimal form (the numeric round-trip strips leading zeros,
    /// plus signs and exponent notation). Order is preserved, duplicates are
    /// kept. Returns `None` when nothing survives, so callers can skip the
    /// network call entirely.
    pub fn parse(raw: &str) -> Option<Self> {
        let tokens: Vec<String> = raw
            .trim()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .filter_map(|token| token.parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .map(|n| n.to_string())
            .collect();

        if tokens.is_empty() {
            None
        } else {
            Some(Self(tokens.join(",")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
