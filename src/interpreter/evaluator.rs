/// Core evaluation logic and context management.
///
/// Contains the evaluation context, which owns the symbol table and the
/// nesting limit, and the public entry point for evaluating one expression.
pub mod core;

/// Additive and multiplicative levels.
///
/// Implements the `+`/`-` and `*`/`/`/`%` loops of the grammar, including the
/// division and modulo checks.
pub mod binary;

/// Primary level.
///
/// Evaluates numbers, parenthesized groups, unary signs, variable lookups and
/// assignments.
pub mod unary;
