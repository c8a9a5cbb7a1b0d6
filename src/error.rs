#[derive(Debug, PartialEq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every failure mode of the engine maps to exactly one variant. Errors are
/// raised at the point of detection and propagate unchanged through nested
/// function-argument evaluations to the original caller; there are no partial
/// results.
///
/// `DivisionByZero` is deliberately its own variant rather than a message:
/// callers may want to treat a zero divisor differently from structurally
/// invalid input.
pub enum EvalError {
    /// The input was empty or contained only whitespace.
    EmptyExpression,
    /// A `(` or `)` had no matching counterpart, at any nesting level.
    UnbalancedParentheses,
    /// An identifier followed by `(` was not a known function.
    UnknownFunction {
        /// The unrecognized function name.
        name: String,
    },
    /// A value fell outside the mathematical domain of an operation,
    /// such as the square root of a negative number.
    Domain {
        /// Details about the violated domain constraint.
        details: String,
    },
    /// An operator was applied with fewer than two pending operands.
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: char,
    },
    /// The divisor of a `/` operation evaluated to exactly zero.
    DivisionByZero,
    /// Any other structurally invalid input: leftover tokens, unrecognized
    /// characters, or a value stack that did not reduce to a single result.
    Malformed {
        /// Details about the malformed construct.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Empty expression."),

            Self::UnbalancedParentheses => write!(f, "Unbalanced parentheses."),

            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),

            Self::Domain { details } => write!(f, "Domain error: {details}."),

            Self::InsufficientOperands { operator } => {
                write!(f, "Not enough operands for '{operator}'.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::Malformed { details } => write!(f, "Invalid expression: {details}."),
        }
    }
}

impl std::error::Error for EvalError {}
