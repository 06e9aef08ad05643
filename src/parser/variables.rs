/// Top-level variable collection.
///
/// Walks the statements of a parsed `<php>` fragment once and records, for
/// every variable name, where it first appears and what type its first
/// initializer implies.  Names passed to `export(...)` are gathered on the
/// side; only bindings whose name was exported are returned.
///
/// The walk is deliberately shallow: only bare expression statements at
/// the top level are inspected.  Conditionals, loops, functions and
/// closures are skipped entirely.
use std::collections::HashSet;

use mago_span::HasSpan;
use mago_syntax::ast::*;

use crate::types::{ExportedVariable, VariableBinding};

use super::ast::{
    as_assignment, as_expression_statement, as_function_call, as_variable, callee_name,
};
use super::infer::{UNKNOWN, infer_type};

/// The callee name that marks variables as exported.
pub const EXPORT_MARKER: &str = "export";

/// Accumulates bindings and exported names during the statement walk.
#[derive(Debug, Default)]
struct Collector {
    /// Bindings in first-seen order.
    bindings: Vec<VariableBinding>,
    seen: HashSet<String>,
    exports: HashSet<String>,
    /// Number of bytes in front of the fragment in the parsed source.
    base: u32,
}

impl Collector {
    fn visit_statement(&mut self, statement: &Statement<'_>) {
        let Some(expr_stmt) = as_expression_statement(statement) else {
            return;
        };
        let expr = expr_stmt.expression;

        if let Some(assignment) = as_assignment(expr) {
            if let Some(lhs) = as_variable(assignment.lhs) {
                let ty = infer_type(assignment.rhs);
                self.bind(lhs, ty);
            }
        } else if let Some(variable) = as_variable(expr) {
            self.bind(variable, UNKNOWN);
        } else if let Some(func_call) = as_function_call(expr)
            && callee_name(func_call) == Some(EXPORT_MARKER)
        {
            self.record_exports(func_call);
        }
    }

    /// Record `variable` unless a binding for its name already exists.
    fn bind(&mut self, variable: &DirectVariable<'_>, ty: &'static str) {
        let Some(name) = variable.name.strip_prefix('$') else {
            return;
        };
        if name.is_empty() || self.seen.contains(name) {
            return;
        }

        // Point just past the `$` so navigation lands on the name itself.
        let offset = variable.span().start.offset.saturating_sub(self.base) + 1;
        tracing::trace!(name, offset, ty, "new binding");

        self.seen.insert(name.to_string());
        self.bindings.push(VariableBinding {
            name: name.to_string(),
            offset,
            ty,
        });
    }

    /// Add every plain `$var` argument of an `export(...)` call.
    ///
    /// Named arguments, spreads and any other expression are ignored.
    fn record_exports(&mut self, func_call: &FunctionCall<'_>) {
        for argument in func_call.argument_list.arguments.iter() {
            let Argument::Positional(positional) = argument else {
                continue;
            };
            if positional.ellipsis.is_some() {
                continue;
            }
            if let Some(variable) = as_variable(positional.value)
                && let Some(name) = variable.name.strip_prefix('$')
            {
                self.exports.insert(name.to_string());
            }
        }
    }

    fn finish(self) -> Vec<ExportedVariable> {
        let Collector {
            bindings, exports, ..
        } = self;
        bindings
            .into_iter()
            .filter(|binding| exports.contains(&binding.name))
            .collect()
    }
}

/// Collect the exported top-level variables of `program`.
///
/// `base` is the length of any prologue that was prepended to the fragment
/// before parsing; it is subtracted from every recorded offset so offsets
/// are relative to the fragment text.
pub fn collect_exported_variables(program: &Program<'_>, base: u32) -> Vec<ExportedVariable> {
    let mut collector = Collector {
        base,
        ..Collector::default()
    };
    for statement in program.statements.iter() {
        collector.visit_statement(statement);
    }
    collector.finish()
}
