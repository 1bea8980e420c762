use crate::TsType;
use sqlparser::ast::{Expr, UnaryOperator, Value};

/// A literal found in the parse, with the type a target-language value of it
/// would have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Unquoted text of the literal (`abc` for `'abc'`, `-1` for `-1`).
    pub text: String,
    pub ts_type: TsType,
}

impl Literal {
    fn new(text: impl Into<String>, ts_type: TsType) -> Self {
        Self {
            text: text.into(),
            ts_type,
        }
    }
}

/// Infer the literal behind `expr`. Anything that is not a plain literal,
/// including `?` and `:name` placeholders, yields `None`.
pub fn literal(expr: &Expr) -> Option<Literal> {
    match expr {
        Expr::Value(v) => value_literal(&v.value),
        Expr::Nested(inner) => literal(inner),
        Expr::UnaryOp {
            op: UnaryOperator::Minus,
            expr,
        } => match literal(expr)? {
            Literal {
                text,
                ts_type: TsType::Number,
            } => Some(Literal::new(format!("-{text}"), TsType::Number)),
            _ => None,
        },
        _ => None,
    }
}

fn value_literal(value: &Value) -> Option<Literal> {
    match value {
        Value::Number(n, _) => Some(Literal::new(n.to_string(), TsType::Number)),
        Value::HexStringLiteral(h) => Some(Literal::new(h.clone(), TsType::Number)),
        Value::SingleQuotedString(s) | Value::DoubleQuotedString(s) => {
            Some(Literal::new(s.clone(), string_type(s)))
        }
        Value::Boolean(b) => Some(Literal::new(b.to_string(), TsType::Boolean)),
        Value::Null => Some(Literal::new("null", TsType::Null)),
        _ => None,
    }
}

/// Strings holding an RFC 3339 timestamp are dates.
fn string_type(s: &str) -> TsType {
    if chrono::DateTime::parse_from_rfc3339(s).is_ok() {
        TsType::Date
    } else {
        TsType::String
    }
}
