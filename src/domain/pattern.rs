//! Node name predicates used as start and termination conditions.
//!
//! Patterns are written as regular expressions and always match the whole
//! name. The common shapes (`^ZZZ$`, `.*Z$`, `^AB.*`) are recognised up front
//! and evaluated as plain string comparisons; anything else is compiled once.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::domain::error::{DomainError, DomainResult};

#[derive(Debug, Clone)]
pub enum Matcher {
    Exact(String),
    Prefix(String),
    Suffix(String),
    /// Anchored regex, full-match semantics
    Regex(Regex),
}

#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    matcher: Matcher,
}

impl NamePattern {
    pub fn new(pattern: &str) -> DomainResult<Self> {
        let body = strip_anchors(pattern);
        let leading_any = body.strip_prefix(".*");
        let trailing_any = body.strip_suffix(".*");

        let matcher = match (leading_any, trailing_any) {
            (None, None) if is_literal(body) => Matcher::Exact(body.to_string()),
            (Some(rest), None) if is_literal(rest) => Matcher::Suffix(rest.to_string()),
            (None, Some(rest)) if is_literal(rest) => Matcher::Prefix(rest.to_string()),
            _ => {
                let anchored = format!("^(?:{body})$");
                let regex = Regex::new(&anchored).map_err(|source| DomainError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
                Matcher::Regex(regex)
            }
        };

        Ok(Self {
            source: pattern.to_string(),
            matcher,
        })
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::Exact(s) => name == s,
            Matcher::Prefix(s) => name.starts_with(s.as_str()),
            Matcher::Suffix(s) => name.ends_with(s.as_str()),
            Matcher::Regex(re) => re.is_match(name),
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for NamePattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// Outer anchors are redundant under full-match semantics. An escaped `\$` is kept.
fn strip_anchors(pattern: &str) -> &str {
    let body = pattern.strip_prefix('^').unwrap_or(pattern);
    match body.strip_suffix('$') {
        Some(rest) if !rest.ends_with('\\') => rest,
        _ => body,
    }
}

fn is_literal(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
