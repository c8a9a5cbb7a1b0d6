//! # numeval
//!
//! numeval is an arithmetic expression evaluator written in Rust.
//! It evaluates textual math expressions containing numbers, the binary
//! operators `+ - * / ^`, parentheses, the named constants `pi` and `e`, and
//! the unary functions `sin cos tan sqrt log exp`, optionally with a trailing
//! `deg` suffix on a function argument to supply it in degrees.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::EvalError,
    evaluator::{core::eval_tokens, lexer::Token, preprocess::preprocess},
};

/// Provides the unified error type for evaluation.
///
/// This module defines all errors that can be raised while lexing or
/// evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including unknown function names and
/// violated domain constraints.
///
/// # Responsibilities
/// - Defines the [`error::EvalError`] enum covering every failure mode.
/// - Attaches descriptive messages for user feedback.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together preprocessing, lexing, the built-in function
/// registry and the shunting-yard scan to provide a complete engine for
/// expression evaluation. It exposes the internals used by [`evaluate`].
///
/// # Responsibilities
/// - Coordinates the core components: preprocessor, lexer and evaluator.
/// - Resolves function calls by recursive argument evaluation.
/// - Manages the flow of data and errors between phases.
pub mod evaluator;

/// Evaluates an arithmetic expression to a single value.
///
/// The input is preprocessed (whitespace stripped, `pi` and `e` expanded),
/// lexed into tokens, and evaluated with a shunting-yard scan. Function
/// arguments are evaluated recursively through the same pipeline, so nested
/// calls like `sin(cos(0))` resolve inside-out.
///
/// Evaluation is a pure function of the input: there is no shared state
/// between calls, and the same expression always yields the same result.
///
/// # Errors
/// Returns an [`EvalError`] describing the failure: empty input, unbalanced
/// parentheses, an unknown function, a domain violation, missing operands,
/// division by zero, or any other malformed construct.
///
/// # Examples
/// ```
/// use numeval::evaluate;
///
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
///
/// // `^` is right-associative.
/// assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
///
/// // Division by zero is its own error kind.
/// assert!(evaluate("10/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    if expression.trim().is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let expression = preprocess(expression);

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&expression);

    while let Some(token) = lexer.next() {
        if let Ok(token) = token {
            tokens.push(token);
        } else {
            return Err(EvalError::Malformed { details:
                           format!("unrecognized input '{}'", lexer.slice()), });
        }
    }

    eval_tokens(&tokens, 0)
}
