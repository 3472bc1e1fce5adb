//! In-memory interpretation of a predicate tree against individual records,
//! plus a lazy, order-preserving filter adapter over any record source.

use crate::criteria::{Literal, Operator};
use crate::predicate::Predicate;

/// A field value surfaced by a record. Enum fields surface as the textual
/// name of their variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
}

/// Minimal view of a record the evaluator needs: field lookup by name.
///
/// `None` from [`Record::field`] means the record does not carry the field
/// at all; for a field the schema declares, that is a contract violation in
/// the data layer (see [`evaluate`]).
pub trait Record {
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Evaluate a predicate tree against one record.
///
/// And/Or short-circuit left to right. `MatchNone` is false for every
/// record, `MatchAll` true for every record.
///
/// # Panics
///
/// Panics if the record lacks a field the tree compares against. The tree
/// was validated against the schema at build time, so a missing field means
/// the data source violates the schema contract; that is a bug, not a
/// recoverable condition.
pub fn evaluate<R: Record + ?Sized>(predicate: &Predicate, record: &R) -> bool {
    match predicate {
        Predicate::MatchNone => false,
        Predicate::MatchAll => true,
        Predicate::And(left, right) => evaluate(left, record) && evaluate(right, record),
        Predicate::Or(left, right) => evaluate(left, record) || evaluate(right, record),
        Predicate::Comparison { field, op, value } => {
            let Some(actual) = record.field(field) else {
                panic!(
                    "record is missing field `{field}` declared by the schema; \
                     the data source violates the schema contract"
                );
            };
            compare(actual, *op, value)
        }
    }
}

fn compare(actual: FieldValue<'_>, op: Operator, expected: &Literal) -> bool {
    match (op, actual, expected) {
        (Operator::Equals, FieldValue::Text(a), Literal::Text(e)) => a == e.as_str(),
        (Operator::Equals, FieldValue::Int(a), Literal::Int(e)) => a == *e,
        (Operator::Contains, FieldValue::Text(a), Literal::Text(e)) => a.contains(e.as_str()),
        // Kind mismatches are ruled out at build time; a hand-built tree
        // that disagrees with the record simply never matches.
        _ => false,
    }
}

/// Lazily filter a record source through a predicate tree.
///
/// Matching records come out in their original relative order; nothing is
/// pulled from the source until the returned iterator is advanced.
pub fn filter<'p, R, I>(source: I, predicate: &'p Predicate) -> impl Iterator<Item = R> + 'p
where
    R: Record,
    I: IntoIterator<Item = R>,
    I::IntoIter: 'p,
{
    source
        .into_iter()
        .filter(move |record| evaluate(predicate, record))
}
