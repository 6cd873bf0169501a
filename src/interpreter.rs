/// The evaluator module computes values straight from the token stream.
///
/// It implements the three precedence levels of the grammar as mutually
/// recursive methods on [`evaluator::core::Context`], reading and writing the
/// symbol table as identifiers are met.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Handles variable lookup and assignment.
/// - Reports division and modulo by zero and undefined names.
pub mod evaluator;
/// The lexer module tokenizes input for the evaluator.
///
/// The lexer reads raw text a line at a time and produces one token per
/// request, with room for a single pushed-back token.
///
/// # Responsibilities
/// - Converts the input character stream into numbers, identifiers,
///   operators, `=`, `;` and the quit token.
/// - Treats the end of input as the end of a statement.
/// - Reports unrecognized characters and malformed numbers with line numbers.
pub mod lexer;
/// The session module drives statement-by-statement evaluation.
///
/// # Responsibilities
/// - Reads statements until `q` or the end of input.
/// - Prints results, prompts and the banner.
/// - Recovers from a failing statement or stops, depending on the policy.
pub mod session;
/// The symbols module holds the session's variables.
///
/// # Responsibilities
/// - Maps case-sensitive names to values.
/// - Seeds the mathematical constants.
pub mod symbols;
