/// Node classification helpers.
///
/// Thin predicates over the `mago_syntax` AST that answer "which syntactic
/// category is this node?" for the handful of categories the variable
/// collector cares about.  The narrowing helpers (`as_*`) return the inner
/// node so callers can keep working with it; the `is_*` helpers only answer
/// yes or no.  Anything not listed simply fails every predicate.
use mago_syntax::ast::*;

/// The syntactic categories recognised by the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Assignment,
    Call,
    Variable,
    String,
    Number,
    Boolean,
    Null,
    Array,
}

/// Classify an expression, or `None` when it is none of the known kinds.
pub fn kind_of(expr: &Expression<'_>) -> Option<NodeKind> {
    if as_assignment(expr).is_some() {
        Some(NodeKind::Assignment)
    } else if as_function_call(expr).is_some() {
        Some(NodeKind::Call)
    } else if as_variable(expr).is_some() {
        Some(NodeKind::Variable)
    } else if is_string(expr) {
        Some(NodeKind::String)
    } else if is_number(expr) {
        Some(NodeKind::Number)
    } else if is_boolean(expr) {
        Some(NodeKind::Boolean)
    } else if is_null(expr) {
        Some(NodeKind::Null)
    } else if is_array(expr) {
        Some(NodeKind::Array)
    } else {
        None
    }
}

/// Strip any number of enclosing parentheses: `(($x))` classifies as `$x`.
pub fn unparenthesized<'a>(expr: &'a Expression<'a>) -> &'a Expression<'a> {
    match expr {
        Expression::Parenthesized(paren) => unparenthesized(paren.expression),
        _ => expr,
    }
}

/// A bare expression statement (`expr;`).
pub fn as_expression_statement<'a>(
    statement: &'a Statement<'a>,
) -> Option<&'a ExpressionStatement<'a>> {
    match statement {
        Statement::Expression(expr_stmt) => Some(expr_stmt),
        _ => None,
    }
}

/// Any assignment, compound operators (`.=`, `+=`, …) included.
pub fn as_assignment<'a>(expr: &'a Expression<'a>) -> Option<&'a Assignment<'a>> {
    match unparenthesized(expr) {
        Expression::Assignment(assignment) => Some(assignment),
        _ => None,
    }
}

/// A plain function call such as `export($a)`.
pub fn as_function_call<'a>(expr: &'a Expression<'a>) -> Option<&'a FunctionCall<'a>> {
    match unparenthesized(expr) {
        Expression::Call(Call::Function(func_call)) => Some(func_call),
        _ => None,
    }
}

/// A direct variable reference (`$name`).
///
/// Variable-variables (`$$name`, `${expr}`) have no statically known name
/// and are deliberately not matched.
pub fn as_variable<'a>(expr: &'a Expression<'a>) -> Option<&'a DirectVariable<'a>> {
    match unparenthesized(expr) {
        Expression::Variable(Variable::Direct(dv)) => Some(dv),
        _ => None,
    }
}

/// The name a function call is made through, when it is a plain identifier.
pub fn callee_name<'a>(func_call: &FunctionCall<'a>) -> Option<&'a str> {
    match func_call.function {
        Expression::Identifier(ident) => Some(ident.value()),
        _ => None,
    }
}

/// A non-interpolated string literal.
pub fn is_string(expr: &Expression<'_>) -> bool {
    matches!(unparenthesized(expr), Expression::Literal(Literal::String(_)))
}

/// An integer or float literal.
pub fn is_number(expr: &Expression<'_>) -> bool {
    matches!(
        unparenthesized(expr),
        Expression::Literal(Literal::Integer(_)) | Expression::Literal(Literal::Float(_))
    )
}

pub fn is_boolean(expr: &Expression<'_>) -> bool {
    matches!(
        unparenthesized(expr),
        Expression::Literal(Literal::True(_)) | Expression::Literal(Literal::False(_))
    )
}

pub fn is_null(expr: &Expression<'_>) -> bool {
    matches!(unparenthesized(expr), Expression::Literal(Literal::Null(_)))
}

/// Short (`[…]`) or legacy (`array(…)`) array literal.
pub fn is_array(expr: &Expression<'_>) -> bool {
    matches!(unparenthesized(expr), Expression::Array(_) | Expression::LegacyArray(_))
}
