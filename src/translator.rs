//! Compilation of a predicate tree into a backend-native filter.
//!
//! [`Translate`] is the seam a backend adapter implements; [`SqlTranslator`]
//! is the reference adapter, producing a parameterized Postgres query via
//! sea-query. Whatever the backend, a translated filter must accept exactly
//! the record set [`crate::evaluator::evaluate`] would accept.

use sea_query::{
    Asterisk, Expr, Iden, PostgresQueryBuilder, QueryStatementWriter, SelectStatement, SimpleExpr,
    Value, Values,
};

use crate::criteria::{Literal, Operator};
use crate::error::TranslateError;
use crate::predicate::Predicate;

/// Converts predicate trees into one backend's native filter representation.
///
/// Implementations must keep comparison values as bound parameters rather
/// than interpolating them into query text, and must map the empty
/// predicate to a filter guaranteed to match zero rows.
pub trait Translate {
    type Output;

    fn translate(&self, predicate: &Predicate) -> Result<Self::Output, TranslateError>;
}

/// A parameterized SQL filter: query text plus bound values, ready to hand
/// to a query-execution collaborator.
#[derive(Debug, Clone)]
pub struct SqlFilter {
    pub sql: String,
    pub params: Values,
}

/// Capabilities of the target backend.
#[derive(Debug, Clone)]
pub struct SqlTranslatorConfig {
    /// Whether the backend supports `LIKE`. Disabling it makes `Contains`
    /// fail with `UnsupportedOperator`, leaving the caller to fall back to
    /// client-side evaluation.
    pub enable_like: bool,
}

impl Default for SqlTranslatorConfig {
    fn default() -> Self {
        Self { enable_like: true }
    }
}

#[derive(Debug, Clone)]
struct TableName(String);

impl Iden for TableName {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "{}", self.0).unwrap();
    }
}

#[derive(Debug, Clone)]
struct ColumnName(String);

impl Iden for ColumnName {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "{}", self.0).unwrap();
    }
}

/// Reference backend adapter: compiles a predicate tree into
/// `SELECT * FROM <table> WHERE <filter>` for Postgres.
pub struct SqlTranslator {
    table: String,
    config: SqlTranslatorConfig,
}

impl SqlTranslator {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            config: SqlTranslatorConfig::default(),
        }
    }

    pub fn with_config(table: impl Into<String>, config: SqlTranslatorConfig) -> Self {
        Self {
            table: table.into(),
            config,
        }
    }

    fn condition(&self, predicate: &Predicate) -> Result<SimpleExpr, TranslateError> {
        let expr = match predicate {
            // A raw constant, not a bound value: the zero-row guarantee
            // stays visible in the query text.
            Predicate::MatchNone => Expr::cust("FALSE").into(),
            Predicate::MatchAll => Expr::cust("TRUE").into(),
            Predicate::Comparison { field, op, value } => self.comparison(field, *op, value)?,
            Predicate::And(left, right) => self.condition(left)?.and(self.condition(right)?),
            Predicate::Or(left, right) => self.condition(left)?.or(self.condition(right)?),
        };
        Ok(expr)
    }

    fn comparison(
        &self,
        field: &str,
        op: Operator,
        value: &Literal,
    ) -> Result<SimpleExpr, TranslateError> {
        let col = Expr::col(ColumnName(field.to_string()));
        match op {
            Operator::Equals => Ok(col.eq(literal_to_value(value))),
            Operator::Contains => {
                if !self.config.enable_like {
                    return Err(TranslateError::UnsupportedOperator(Operator::Contains));
                }
                let pattern = match value {
                    Literal::Text(needle) => format!("%{}%", escape_like(needle)),
                    Literal::Int(n) => format!("%{}%", n),
                };
                // sea-query carries the pattern as a bound value, like any
                // other comparison operand.
                Ok(col.like(pattern))
            }
        }
    }
}

impl Translate for SqlTranslator {
    type Output = SqlFilter;

    fn translate(&self, predicate: &Predicate) -> Result<SqlFilter, TranslateError> {
        let mut select = SelectStatement::new();
        select.column(Asterisk);
        select.from(TableName(self.table.clone()));
        select.and_where(self.condition(predicate)?);

        let (sql, params) = select.build(PostgresQueryBuilder);
        Ok(SqlFilter { sql, params })
    }
}

fn literal_to_value(literal: &Literal) -> Value {
    match literal {
        Literal::Text(s) => Value::String(Some(Box::new(s.clone()))),
        Literal::Int(n) => Value::BigInt(Some(*n)),
    }
}

/// Escape `LIKE` metacharacters so the needle is matched literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
