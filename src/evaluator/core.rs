use crate::{
    error::EvalError,
    evaluator::{functions, lexer::Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Maximum nesting depth of recursive function-argument evaluations.
///
/// Parenthesis nesting is handled iteratively on the operator stack, but each
/// function call recurses into [`eval_tokens`], so pathological inputs like a
/// long `sin(sin(sin(...)))` chain could otherwise exhaust the call stack.
pub const MAX_CALL_DEPTH: usize = 64;

/// Returns the binding strength of an operator.
///
/// `(` deliberately has the lowest precedence: it can never be popped by an
/// incoming operator, only by its matching `)`.
///
/// # Example
/// ```
/// use numeval::evaluator::core::precedence;
///
/// assert!(precedence('^') > precedence('*'));
/// assert!(precedence('*') > precedence('+'));
/// assert_eq!(precedence('('), 0);
/// ```
#[must_use]
pub const fn precedence(operator: char) -> u8 {
    match operator {
        '+' | '-' => 1,
        '*' | '/' => 2,
        '^' => 3,
        _ => 0,
    }
}

/// Evaluates a token slice to a single value.
///
/// This is the shunting-yard scan: one pass, left to right, maintaining a
/// value stack and an operator stack. Operators are applied eagerly whenever
/// the stack top binds at least as strongly as the incoming operator, with the
/// exception of `^`, which is right-associative and does not pop on a
/// precedence tie (`2^3^2` is `2^(3^2)`, not `(2^3)^2`).
///
/// Unary negation is distinguished from binary minus with an explicit
/// `expecting_operand` flag: a `-` at the start of the slice, after another
/// operator or after `(` begins a negated numeric literal, anywhere else it is
/// the binary operator.
///
/// Function calls recurse through [`resolve_call`], which evaluates the
/// argument span with this same function and pushes the computed value
/// directly onto the value stack.
///
/// # Parameters
/// - `tokens`: The token slice to evaluate.
/// - `depth`: Current function-call recursion depth, `0` at the top level.
///
/// # Returns
/// The single value the slice reduces to.
///
/// # Errors
/// Any [`EvalError`] raised while scanning or applying operators.
pub(crate) fn eval_tokens(tokens: &[Token], depth: usize) -> EvalResult<f64> {
    if depth > MAX_CALL_DEPTH {
        return Err(EvalError::Malformed { details: "expression is nested too deeply".to_string(), });
    }

    let mut values: Vec<f64> = Vec::new();
    let mut operators: Vec<char> = Vec::new();
    let mut expecting_operand = true;

    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            Token::Number(n) => {
                values.push(*n);
                expecting_operand = false;
                i += 1;
            },

            // Unary minus: binds to the numeric literal that must follow it.
            Token::Minus if expecting_operand => match tokens.get(i + 1) {
                Some(Token::Number(n)) => {
                    values.push(-n);
                    expecting_operand = false;
                    i += 2;
                },
                _ => {
                    return Err(EvalError::Malformed { details:
                                   "'-' is not followed by a number".to_string(), });
                },
            },

            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Caret => {
                let incoming = operator_char(&tokens[i]);
                while let Some(&top) = operators.last() {
                    let pop = precedence(top) > precedence(incoming)
                              || (precedence(top) == precedence(incoming) && incoming != '^');
                    if !pop {
                        break;
                    }
                    operators.pop();
                    apply_operator(&mut values, top)?;
                }
                operators.push(incoming);
                expecting_operand = true;
                i += 1;
            },

            Token::LParen => {
                operators.push('(');
                expecting_operand = true;
                i += 1;
            },

            Token::RParen => {
                loop {
                    match operators.pop() {
                        Some('(') => break,
                        Some(operator) => apply_operator(&mut values, operator)?,
                        None => return Err(EvalError::UnbalancedParentheses),
                    }
                }
                expecting_operand = false;
                i += 1;
            },

            Token::Identifier(name) => {
                let (value, next) = resolve_call(tokens, i, name, depth)?;
                values.push(value);
                expecting_operand = false;
                i = next;
            },

            Token::Ignored => i += 1,
        }
    }

    while let Some(operator) = operators.pop() {
        if operator == '(' {
            return Err(EvalError::UnbalancedParentheses);
        }
        apply_operator(&mut values, operator)?;
    }

    match (values.pop(), values.is_empty()) {
        (Some(value), true) => Ok(value),
        _ => Err(EvalError::Malformed { details: "expression does not reduce to a single value"
                                                     .to_string(), }),
    }
}

/// Resolves a function call starting at `tokens[start]`.
///
/// The identifier must be immediately followed by `(`; the argument span runs
/// to the matching `)`, found by parenthesis-depth counting. If the span ends
/// with the identifier `deg`, that suffix is stripped and the evaluated
/// argument is converted from degrees to radians before the function is
/// applied. Nested calls inside the span resolve inside-out through the
/// recursive [`eval_tokens`] call.
///
/// # Parameters
/// - `tokens`: The full token slice being scanned.
/// - `start`: Index of the function-name identifier.
/// - `name`: The function name at `start`.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// The computed value and the index of the first token after the call.
///
/// # Errors
/// - `UnknownFunction` if `name` is not a built-in.
/// - `UnbalancedParentheses` if the argument span never closes.
/// - `Malformed` if the identifier is not followed by `(`.
/// - Any error raised while evaluating the argument or applying the function.
fn resolve_call(tokens: &[Token],
                start: usize,
                name: &str,
                depth: usize)
                -> EvalResult<(f64, usize)> {
    match tokens.get(start + 1) {
        Some(Token::LParen) => {},
        _ => {
            return Err(EvalError::Malformed { details:
                           format!("unexpected identifier '{name}'"), });
        },
    }

    if !functions::is_builtin(name) {
        return Err(EvalError::UnknownFunction { name: name.to_string() });
    }

    let mut nesting = 0usize;
    let mut close = None;
    for (j, token) in tokens.iter().enumerate().skip(start + 1) {
        match token {
            Token::LParen => nesting += 1,
            Token::RParen => {
                nesting -= 1;
                if nesting == 0 {
                    close = Some(j);
                    break;
                }
            },
            _ => {},
        }
    }
    let Some(close) = close else {
        return Err(EvalError::UnbalancedParentheses);
    };

    let mut argument = &tokens[start + 2..close];
    let degrees = matches!(argument.last(), Some(Token::Identifier(suffix)) if suffix == "deg");
    if degrees {
        argument = &argument[..argument.len() - 1];
    }

    let mut value = eval_tokens(argument, depth + 1)?;
    if degrees {
        value = value.to_radians();
    }

    Ok((functions::apply(name, value)?, close + 1))
}

/// Applies one binary operator to the top two values of the stack.
///
/// Pops `b` then `a` and pushes the result of `a <operator> b`. A zero
/// divisor is reported as `DivisionByZero` rather than coerced to infinity,
/// and a non-finite power result (negative base with fractional exponent, or
/// overflow) is a `Domain` error.
fn apply_operator(values: &mut Vec<f64>, operator: char) -> EvalResult<()> {
    let (Some(b), Some(a)) = (values.pop(), values.pop()) else {
        return Err(EvalError::InsufficientOperands { operator });
    };

    let result = match operator {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,

        '/' => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        },

        '^' => {
            let raised = a.powf(b);
            if !raised.is_finite() {
                return Err(EvalError::Domain { details:
                               format!("{a}^{b} is not a finite real number"), });
            }
            raised
        },

        _ => {
            return Err(EvalError::Malformed { details:
                           format!("unknown operator '{operator}'"), });
        },
    };

    values.push(result);
    Ok(())
}

/// Maps an operator token to its character form used on the operator stack.
const fn operator_char(token: &Token) -> char {
    match token {
        Token::Plus => '+',
        Token::Minus => '-',
        Token::Star => '*',
        Token::Slash => '/',
        _ => '^',
    }
}
