use crate::{error::EvalError, evaluator::core::EvalResult};

/// Names of all built-in functions, in no particular order.
pub const BUILTINS: [&str; 6] = ["sin", "cos", "tan", "sqrt", "log", "exp"];

/// Returns `true` when `name` is a built-in function.
///
/// # Example
/// ```
/// use numeval::evaluator::functions::is_builtin;
///
/// assert!(is_builtin("sqrt"));
/// assert!(!is_builtin("foo"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Applies a built-in function to an already-evaluated argument.
///
/// `sin`, `cos`, `tan` and `exp` are total on the reals. `sqrt` and `log`
/// (natural logarithm) carry domain guards: a negative argument to `sqrt` or
/// a non-positive argument to `log` produces a `Domain` error instead of a
/// NaN or infinity leaking into the value stack.
///
/// # Parameters
/// - `name`: Function name, expected to be one of [`BUILTINS`].
/// - `value`: The evaluated argument, in radians for the trigonometric
///   functions.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `Domain` if a domain guard rejects the argument.
/// - `UnknownFunction` if `name` is not a built-in.
///
/// # Example
/// ```
/// use numeval::evaluator::functions::apply;
///
/// let r = apply("sin", std::f64::consts::PI / 2.0).unwrap();
/// assert_eq!(r, 1.0);
/// ```
pub fn apply(name: &str, value: f64) -> EvalResult<f64> {
    match name {
        "sin" => Ok(value.sin()),
        "cos" => Ok(value.cos()),
        "tan" => Ok(value.tan()),

        "sqrt" => {
            if value < 0.0 {
                return Err(EvalError::Domain { details:
                               format!("square root of negative number {value}"), });
            }
            Ok(value.sqrt())
        },

        "log" => {
            if value <= 0.0 {
                return Err(EvalError::Domain { details:
                               format!("logarithm of non-positive number {value}"), });
            }
            Ok(value.ln())
        },

        "exp" => Ok(value.exp()),

        _ => Err(EvalError::UnknownFunction { name: name.to_string() }),
    }
}
