//! The fixed tag substitution table.
//!
//! Rules are applied in order, each one rewriting the whole document before
//! the next one runs. A later rule therefore also sees text inserted by an
//! earlier rule.

use anyhow::{Result, bail};

/// Opening markup shared by both code block openers.
const CODE_BLOCK_OPEN: &str = r##"<font size="3" color="#000066" face="verdana"><pre>"##;

/// A literal pattern and the literal text that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl TagRule {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }
}

const STANDARD_RULES: &[TagRule] = &[
    TagRule::new("[b]", "<b>"),
    TagRule::new("[i]", "<i>"),
    TagRule::new("\r\n", "<br>"),
    TagRule::new("\n", "<br>"),
    TagRule::new("[/b]", "</b>"),
    TagRule::new("[/i]", "</i>"),
    TagRule::new("[center]", "<center>"),
    TagRule::new("[/center]", "</center>"),
    TagRule::new("[img]", "<img src=\""),
    TagRule::new("[/img]", "\">"),
    TagRule::new("[code]", CODE_BLOCK_OPEN),
    TagRule::new("[code=python]", CODE_BLOCK_OPEN),
    TagRule::new("[/code]", "</pre></font>"),
    TagRule::new("[/href]", "</a>"),
];

/// An ordered list of [`TagRule`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagTable {
    rules: &'static [TagRule],
}

impl TagTable {
    pub const fn new(rules: &'static [TagRule]) -> Self {
        Self { rules }
    }

    /// The table every conversion uses.
    pub const fn standard() -> Self {
        Self::new(STANDARD_RULES)
    }

    pub fn rules(&self) -> impl Iterator<Item = &TagRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check that no rule can be shadowed by an earlier one.
    ///
    /// A rule is shadowed when an earlier pattern is a substring of its own
    /// pattern: by the time it runs, the earlier rule has already rewritten
    /// part of every text it could have matched.
    pub fn validate(&self) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                bail!("Tag rule #{} has an empty pattern", index + 1);
            }
            if let Some(earlier) = self.rules[..index]
                .iter()
                .find(|earlier| rule.pattern.contains(earlier.pattern))
            {
                bail!(
                    "Tag rule {:?} is shadowed by earlier rule {:?}",
                    rule.pattern,
                    earlier.pattern
                );
            }
        }
        Ok(())
    }
}

impl Default for TagTable {
    fn default() -> Self {
        Self::standard()
    }
}
