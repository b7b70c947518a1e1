//! Grading of free-text answers.

use crate::notation::parse_user_input;
use std::collections::HashSet;

/// Returns `true` when `input` names exactly the spellings in `expected`.
///
/// Order and repetition in the input do not matter, but every expected
/// spelling must be present and nothing else may be. Comparison is by exact
/// string: a pitch-equivalent spelling that the expected list does not
/// contain is wrong.
pub fn check_answer<S: AsRef<str>>(input: &str, expected: &[S]) -> bool {
    let answered: HashSet<String> = parse_user_input(input).into_iter().collect();
    let expected: HashSet<&str> = expected.iter().map(|token| token.as_ref()).collect();

    answered.len() == expected.len() && expected.iter().all(|token| answered.contains(*token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_does_not_matter() {
        assert!(check_answer("bD #C", &["#C", "bD"]));
        assert!(check_answer("  #C\tbD ", &["#C", "bD"]));
    }

    #[test]
    fn partial_and_extra_answers_fail() {
        let expected = ["#C", "bD"];
        assert!(!check_answer("#C", &expected));
        assert!(!check_answer("#C bD X", &expected));
        assert!(!check_answer("", &expected));
    }

    #[test]
    fn duplicates_do_not_make_up_for_missing_tokens() {
        assert!(check_answer("#C #C bD", &["#C", "bD"]));
        assert!(!check_answer("#C #C", &["#C", "bD"]));
    }

    #[test]
    fn no_canonicalisation() {
        assert!(!check_answer("Db #C", &["#C", "bD"]));
        assert!(!check_answer("#c bd", &["#C", "bD"]));
    }
}
