//! Ordering Policy
//!
//! Fragments named in the priority list come first, in list order. Everything
//! else follows alphabetically. The policy comes from configuration and is
//! never derived from file contents.

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Fragment expected at the top of every combined document
pub const DEFAULT_BASE: &str = "base.mdc";

/// Built-in priority list
pub const DEFAULT_PRIORITY: &[&str] = &[
    "base.mdc",
    "requirements-definition.mdc",
    "basic-design.mdc",
    "architecture.mdc",
    "implementation.mdc",
    "code-quality.mdc",
    "error-handling.mdc",
    "testing.mdc",
    "bun-test-mock.mdc",
    "git.mdc",
    "git-commit.mdc",
    "review.mdc",
    "package-json-template.mdc",
];

/// Priority ordering for rule fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingPolicy {
    base: String,
    priority: Vec<String>,
}

/// Result of sorting a set of fragment names.
///
/// Sorting never fails; the flags let the caller decide what to warn about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// Every input name exactly once, in output order
    pub order: Vec<String>,
    /// The base fragment was not among the inputs
    pub base_missing: bool,
    /// Names not in the priority list, in the order they were appended
    pub unlisted: Vec<String>,
}

impl OrderingPolicy {
    /// Create a policy.
    ///
    /// The base name is moved to the front of the priority list (inserted if
    /// absent) and repeated names keep only their first position.
    pub fn new<I, S>(base: impl Into<String>, priority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let base = base.into();
        let mut seen = BTreeSet::new();
        seen.insert(base.clone());

        let mut ordered = vec![base.clone()];
        for name in priority {
            let name = name.into();
            if seen.insert(name.clone()) {
                ordered.push(name);
            }
        }

        Self {
            base,
            priority: ordered,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    pub fn is_listed(&self, name: &str) -> bool {
        self.priority.iter().any(|p| p == name)
    }

    /// Order a set of fragment names. Duplicates in the input collapse.
    pub fn sort<I, S>(&self, names: I) -> SortOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut remaining: BTreeSet<String> =
            names.into_iter().map(|n| n.as_ref().to_string()).collect();
        let base_missing = !remaining.contains(&self.base);

        let mut order = Vec::with_capacity(remaining.len());
        for name in &self.priority {
            if remaining.remove(name) {
                order.push(name.clone());
            }
        }

        let mut unlisted: Vec<String> = remaining.into_iter().collect();
        unlisted.sort_by(|a, b| locale_cmp(a, b));
        order.extend(unlisted.iter().cloned());

        SortOutcome {
            order,
            base_missing,
            unlisted,
        }
    }
}

impl Default for OrderingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BASE, DEFAULT_PRIORITY.iter().copied())
    }
}

/// Human-friendly name comparison.
///
/// Characters are ranked punctuation and whitespace, then digits, then
/// letters, and compared case-insensitively within a rank. Inside the
/// punctuation rank code-point order applies, which is coarser than a full
/// collation table. On a case-only tie the lowercase spelling sorts first,
/// so the result is still a total order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| b.cmp(a))
}

fn collation_key(name: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    name.chars().flat_map(char::to_lowercase).map(|c| {
        let rank = if c.is_alphabetic() {
            2
        } else if c.is_numeric() {
            1
        } else {
            0
        };
        (rank, c)
    })
}
