//! Structured search criteria: the caller-facing input to the builder.
//!
//! A `FilterRequest` is an ordered list of `CriteriaGroup`s; each group is a
//! list of `Criterion`s. Groups are OR-combined, criteria within a group are
//! AND-combined. A field the caller does not want to filter on is simply
//! omitted, never represented as a null value.

use std::fmt;

/// Comparison operator applied by a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Native equality, case-sensitive for text.
    Equals,
    /// Case-sensitive substring match; text fields only.
    Contains,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Equals => write!(f, "="),
            Operator::Contains => write!(f, "CONTAINS"),
        }
    }
}

/// Literal value a criterion compares against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Text(String),
    Int(i64),
}

impl Literal {
    /// Short name of the literal's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Text(_) => "text",
            Literal::Int(_) => "int",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Text(s) => write!(f, "\"{}\"", s),
            Literal::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Text(s)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n)
    }
}

/// A single field/operator/value comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Criterion {
    pub field: String,
    pub operator: Operator,
    pub value: Literal,
}

impl Criterion {
    pub fn equals(field: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self {
            field: field.into(),
            operator: Operator::Equals,
            value: value.into(),
        }
    }

    pub fn contains(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: Operator::Contains,
            value: Literal::Text(text.into()),
        }
    }
}

/// An AND-combination of criteria describing one candidate match.
///
/// A group with no criteria means "match everything" (the AND identity);
/// see the builder for how that degenerates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CriteriaGroup {
    pub criteria: Vec<Criterion>,
}

impl CriteriaGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl FromIterator<Criterion> for CriteriaGroup {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self {
            criteria: iter.into_iter().collect(),
        }
    }
}

/// The external-facing input: an ordered sequence of criteria groups.
///
/// Group order does not change which records match (OR is commutative) but
/// is preserved through building so that diagnostics and generated query
/// text are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterRequest {
    pub groups: Vec<CriteriaGroup>,
}

impl FilterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: CriteriaGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<CriteriaGroup> for FilterRequest {
    fn from_iter<I: IntoIterator<Item = CriteriaGroup>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}
