/// The core module drives the shunting-yard evaluation.
///
/// It scans the token stream left to right with a value stack and an operator
/// stack, applying operators by precedence and associativity, and resolves
/// function calls by recursively evaluating their argument spans in memory.
///
/// # Responsibilities
/// - Evaluates a token slice to a single `f64` result.
/// - Distinguishes unary negation from binary minus via tokenizer state.
/// - Reports runtime errors such as division by zero or missing operands.
pub mod core;
/// The functions module holds the built-in function registry.
///
/// Each built-in maps a name to a unary real-to-real operation plus an
/// optional domain guard. The registry is fixed and process-wide; there is no
/// way to register functions at runtime.
///
/// # Responsibilities
/// - Declares the set of recognized function names.
/// - Applies a function to an already-evaluated argument value.
/// - Enforces domain guards (`sqrt` of negatives, `log` of non-positives).
pub mod functions;
/// The lexer module tokenizes preprocessed expression text.
///
/// The lexer reads the residual arithmetic string and produces a stream of
/// tokens: numeric literals, identifiers, operators and parentheses. This is
/// the first structured stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles numeric literals with optional fractional parts.
/// - Rejects characters that belong to no token.
pub mod lexer;
/// The preprocess module normalizes raw input before lexing.
///
/// It strips whitespace and expands the named constants `pi` and `e` into
/// their decimal literal form, taking care to match whole identifiers only so
/// that function names like `exp` are never corrupted.
///
/// # Responsibilities
/// - Removes all whitespace from the input.
/// - Substitutes standalone constant identifiers with round-trip literals.
pub mod preprocess;
