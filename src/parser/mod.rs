/// PHP fragment parsing and analysis.
///
/// A `<php>` block holds bare PHP code without an opening tag, so the
/// fragment is parsed in "eval" mode: a short prologue is prepended before
/// handing the text to the mago_syntax parser, and the prologue's length is
/// subtracted again from every offset reported back.
///
/// Sub-modules:
/// - [`ast`]: Node classification predicates
/// - [`infer`]: Literal type inference
/// - [`variables`]: Top-level binding and `export(...)` collection
pub mod ast;
pub mod infer;
pub mod variables;

use std::panic;

use bumpalo::Bump;
use mago_database::file::FileId;
use mago_syntax::ast::Program;
use mago_syntax::parser::parse_file_content;

use crate::types::ExportedVariable;

/// Text placed in front of every fragment so the parser starts in PHP mode.
pub(crate) const EVAL_PROLOGUE: &str = "<?php ";

/// Parse `fragment` and run `f` over the resulting program.
///
/// `f` receives the program and the number of prologue bytes in front of
/// the fragment.  The parser recovers from syntax errors on its own, but it
/// can still panic on some half-written constructs (e.g. unterminated
/// heredocs); such panics are caught and reported as `None`.
pub(crate) fn with_program<T>(fragment: &str, f: impl FnOnce(&Program<'_>, u32) -> T) -> Option<T> {
    let source = format!("{EVAL_PROLOGUE}{fragment}");

    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        let arena = Bump::new();
        let file_id = FileId::new("fragment.php");
        let program = parse_file_content(&arena, file_id, &source);
        let program: &Program<'_> = &program;
        f(program, EVAL_PROLOGUE.len() as u32)
    }));

    match result {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::error!("parser panicked while analysing a PHP fragment");
            None
        }
    }
}

/// Parse a `<php>` fragment and return its exported top-level variables.
///
/// Never fails: malformed input yields whatever could be recovered, and a
/// parser panic yields an empty list.
pub fn analyze_fragment(fragment: &str) -> Vec<ExportedVariable> {
    with_program(fragment, variables::collect_exported_variables).unwrap_or_default()
}
