use std::f64::consts;

/// Normalizes raw expression text for lexing.
///
/// All whitespace is removed, then every standalone occurrence of `pi` or `e`
/// is replaced with its decimal expansion, formatted with Rust's round-trip
/// `Display` so no precision is lost on reparse.
///
/// Substitution is word-boundary aware: the input is walked as maximal runs of
/// identifier characters, and only a run that is exactly `pi` or `e` is
/// replaced. Substrings of longer identifiers (`exp`, `pie`) and runs glued to
/// digits (`2pi`) are left untouched.
///
/// # Parameters
/// - `input`: Raw expression text.
///
/// # Returns
/// The whitespace-free text with constants expanded.
///
/// # Example
/// ```
/// use numeval::evaluator::preprocess::preprocess;
///
/// assert_eq!(preprocess(" exp(1) + 2 "), "exp(1)+2");
/// assert_eq!(preprocess("2 * pi"), format!("2*{}", std::f64::consts::PI));
/// ```
#[must_use]
pub fn preprocess(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut word = String::new();

    for c in input.chars() {
        if c.is_whitespace() {
            continue;
        }

        if c.is_ascii_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            flush_word(&mut output, &mut word);
            output.push(c);
        }
    }
    flush_word(&mut output, &mut word);

    output
}

/// Appends a completed identifier run to the output, substituting it when the
/// run is exactly a named constant.
fn flush_word(output: &mut String, word: &mut String) {
    match word.as_str() {
        "pi" => output.push_str(&consts::PI.to_string()),
        "e" => output.push_str(&consts::E.to_string()),
        _ => output.push_str(word),
    }
    word.clear();
}
