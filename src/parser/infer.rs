/// Literal type inference.
///
/// Maps the initializer of a PHP assignment to the TypeScript type the
/// generated member should carry.  Only literal shapes are recognised;
/// everything else (calls, operators, interpolated strings, `new`, …)
/// falls back to `unknown`.
use mago_syntax::ast::Expression;

use super::ast::{NodeKind, kind_of};

/// The type given to anything that is not a recognised literal.
pub const UNKNOWN: &str = "unknown";

/// Infer the semantic type name of `expr`.
pub fn infer_type(expr: &Expression<'_>) -> &'static str {
    match kind_of(expr) {
        Some(NodeKind::String) => "string",
        Some(NodeKind::Number) => "number",
        Some(NodeKind::Boolean) => "boolean",
        Some(NodeKind::Null) => "null",
        Some(NodeKind::Array) => "unknown[]",
        _ => UNKNOWN,
    }
}
