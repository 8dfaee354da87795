use std::{borrow::Cow, fmt};

use selq_derive::BinaryOperator;
use smol_str::SmolStr;

/// The comparison operators with a typed `where_*` shorthand.
///
/// Any other operator text can still be passed as a string, see
/// [`IntoOperator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinaryOperator)]
pub enum Operator {
    Eq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
    Like,
    NotLike,
    Ilike,
    NotIlike,
}

impl Operator {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::Ilike => "ILIKE",
            Operator::NotIlike => "NOT ILIKE",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion into operator text.
///
/// The text is inserted between the column and the placeholder without any
/// checks. It is not parameterized, so it must never come from untrusted
/// input. [`crate::Builder::validate`] rejects the obviously unsafe cases.
pub trait IntoOperator {
    fn into_operator(self) -> SmolStr;
}

impl IntoOperator for Operator {
    #[inline]
    fn into_operator(self) -> SmolStr {
        SmolStr::new_static(self.as_str())
    }
}

impl IntoOperator for &str {
    #[inline]
    fn into_operator(self) -> SmolStr {
        SmolStr::new(self)
    }
}

impl IntoOperator for String {
    #[inline]
    fn into_operator(self) -> SmolStr {
        SmolStr::new(self)
    }
}

impl IntoOperator for &String {
    #[inline]
    fn into_operator(self) -> SmolStr {
        SmolStr::new(self)
    }
}

impl<'a> IntoOperator for Cow<'a, str> {
    #[inline]
    fn into_operator(self) -> SmolStr {
        SmolStr::new(self)
    }
}

impl IntoOperator for SmolStr {
    #[inline(always)]
    fn into_operator(self) -> SmolStr {
        self
    }
}

impl IntoOperator for char {
    #[inline]
    fn into_operator(self) -> SmolStr {
        smol_str::format_smolstr!("{}", self)
    }
}

/// Returns why operator text is unsafe to inline, if it is.
pub(crate) fn check_operator(op: &str) -> Option<&'static str> {
    if op.trim().is_empty() {
        return Some("operator is empty");
    }
    if op.contains(';') {
        return Some("operator contains a statement terminator");
    }
    if op.contains("--") || op.contains("/*") {
        return Some("operator contains a comment");
    }
    if op.contains(['\'', '"', '`']) {
        return Some("operator contains a quote");
    }
    if op.contains('$') {
        return Some("operator contains a placeholder marker");
    }
    None
}
