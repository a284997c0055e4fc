use crate::concat::add_concat_operator;
use crate::postfix::convert_postfix;
use crate::thompson;

use automata::NFA;

/// Alias for [`Result`] for [`CompileError`].
pub type CompileResult<T> = std::result::Result<T, CompileError>;

/// Error returned when attempting to compile an invalid regular expression.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error("empty regular expression")]
    EmptyExpression,

    /// `.` is reserved as the explicit concatenation marker and may not appear as a literal.
    #[error("reserved symbol '{0}' in expression")]
    ReservedSymbol(char),

    /// A `)` has no matching `(`, or a `(` remains unclosed at end of input.
    #[error("unbalanced parentheses: {0}")]
    UnbalancedParen(&'static str),

    /// An operator in the postfix expression has too few operands, or operands are left over.
    /// Unreachable for expressions that passed postfix conversion; fatal if it occurs.
    #[error("malformed postfix expression: {0}")]
    MalformedPostfix(&'static str),
}

/// Compile a regular expression into an NFA describing the same language.
///
/// The expression may contain single-character literals, implicit concatenation, alternation
/// `|`, Kleene star `*`, and grouping parentheses. The pipeline inserts explicit concatenation
/// operators, rewrites the expression into postfix order, and folds the postfix stream into an
/// NFA by Thompson's construction.
pub fn compile(expr: &str) -> CompileResult<NFA<char>> {
    if expr.is_empty() {
        return Err(CompileError::EmptyExpression);
    }
    if expr.contains('.') {
        return Err(CompileError::ReservedSymbol('.'));
    }

    let infix = add_concat_operator(expr);
    let postfix = convert_postfix(&infix)?;
    thompson::assemble(&postfix)
}
