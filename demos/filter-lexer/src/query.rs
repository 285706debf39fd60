use core::cmp::Ordering;

use relex::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `field:value`, or a bare term: case-insensitive substring match.
    Contains,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl Comparison {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            ":" => Self::Contains,
            "<" => Self::Less,
            "<=" => Self::LessEq,
            ">" => Self::Greater,
            ">=" => Self::GreaterEq,
            _ => return None,
        })
    }

    fn accepts(self, actual: &str, expected: &str) -> bool {
        if self == Self::Contains {
            return actual.to_lowercase().contains(&expected.to_lowercase());
        }

        // numbers compare numerically, anything else lexically
        let ordering = match (actual.parse::<f64>(), expected.parse::<f64>()) {
            (Ok(a), Ok(b)) => a.partial_cmp(&b),
            _ => Some(actual.cmp(expected)),
        };

        match (self, ordering) {
            (_, None) => false,
            (Self::Less, Some(o)) => o == Ordering::Less,
            (Self::LessEq, Some(o)) => o != Ordering::Greater,
            (Self::Greater, Some(o)) => o == Ordering::Greater,
            (Self::GreaterEq, Some(o)) => o != Ordering::Less,
            (Self::Contains, Some(_)) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub negated: bool,
    /// `None` for bare terms, which are checked against every field.
    pub field: Option<String>,
    pub comparison: Comparison,
    pub value: String,
    pub at: Location,
}

impl Term {
    pub fn new(
        negated: bool,
        field: Option<String>,
        comparison: Comparison,
        value: String,
        at: Location,
    ) -> Self {
        Self {
            negated,
            field,
            comparison,
            value,
            at,
        }
    }

    pub fn matches(&self, record: &[(&str, &str)]) -> bool {
        let hit = record
            .iter()
            .filter(|(name, _)| self.field.as_deref().is_none_or(|field| field == *name))
            .any(|(_, actual)| self.comparison.accepts(actual, &self.value));
        hit != self.negated
    }
}

/// Disjunction of conjunctions: `a b OR c` is `(a AND b) OR c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    branches: Vec<Vec<Term>>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            branches: vec![Vec::new()],
        }
    }
}

impl Query {
    /// Non-empty branches, in source order.
    pub fn branches(&self) -> impl Iterator<Item = &[Term]> {
        self.branches
            .iter()
            .filter(|branch| !branch.is_empty())
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.branches().next().is_none()
    }

    /// An empty query matches everything.
    pub fn matches(&self, record: &[(&str, &str)]) -> bool {
        self.is_empty()
            || self
                .branches()
                .any(|branch| branch.iter().all(|term| term.matches(record)))
    }

    pub(crate) fn push(&mut self, term: Term) {
        if let Some(branch) = self.branches.last_mut() {
            branch.push(term);
        }
    }

    pub(crate) fn branch(&mut self) {
        self.branches.push(Vec::new());
    }

    pub(crate) fn discard_branch(&mut self) {
        if let Some(branch) = self.branches.last_mut() {
            branch.clear();
        }
    }
}
