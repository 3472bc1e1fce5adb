//! The predicate expression tree: an immutable boolean algebra over field
//! comparisons.
//!
//! Trees are plain values with no external references. Once built they can
//! be cloned, hashed (the hash is structural, so identical requests hash
//! identically), shared across threads, and consumed by the evaluator or
//! any translator without synchronization.

use std::fmt;

use crate::criteria::{Literal, Operator};

/// A node in the predicate tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// The distinguished empty predicate: matches no record. Produced by an
    /// empty filter request; callers must treat it as "select nothing",
    /// never as "no filter applied".
    MatchNone,
    /// Neutral element of AND: matches every record. Produced by a criteria
    /// group with no criteria.
    MatchAll,
    /// Leaf comparison of one record field against a literal.
    Comparison {
        field: String,
        op: Operator,
        value: Literal,
    },
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    pub fn comparison(field: impl Into<String>, op: Operator, value: impl Into<Literal>) -> Self {
        Predicate::Comparison {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn and(self, other: Predicate) -> Self {
        Predicate::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Predicate) -> Self {
        Predicate::Or(Box::new(self), Box::new(other))
    }

    /// True for the distinguished empty predicate.
    pub fn matches_nothing(&self) -> bool {
        matches!(self, Predicate::MatchNone)
    }
}

/// Compact diagnostic rendering, e.g.
/// `((AssignedTo = "Bob") OR ((AssignedTo = "Mary") AND (Status = "Cancelled")))`.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::MatchNone => write!(f, "FALSE"),
            Predicate::MatchAll => write!(f, "TRUE"),
            Predicate::Comparison { field, op, value } => {
                write!(f, "({} {} {})", field, op, value)
            }
            Predicate::And(left, right) => write!(f, "({} AND {})", left, right),
            Predicate::Or(left, right) => write!(f, "({} OR {})", left, right),
        }
    }
}
