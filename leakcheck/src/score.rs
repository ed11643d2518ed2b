/// The highest strength score a password can reach.
pub const MAX_SCORE: u8 = 5;

/// Symbols that count toward the strength score.
const SYMBOLS: &str = "!@#$%^&*";

/// Rates a password from 0 to 5 based on length and character variety.
///
/// One point each for: more than 8 characters, an uppercase letter, a
/// lowercase letter, a digit, and a symbol from [`SYMBOLS`]. This is a
/// heuristic for user feedback, not a security property, and it is entirely
/// independent of the breach lookup.
pub fn score(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() > 8 {
        score += 1;
    }
    if password.chars().any(char::is_uppercase) {
        score += 1;
    }
    if password.chars().any(char::is_lowercase) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| SYMBOLS.contains(c)) {
        score += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_criteria_met() {
        assert_eq!(score("Abc12345!"), 5);
    }

    #[test]
    fn lowercase_only() {
        assert_eq!(score("abc"), 1);
    }

    #[test]
    fn empty_scores_zero() {
        assert_eq!(score(""), 0);
    }

    #[test]
    fn length_point_requires_more_than_eight() {
        // 8 chars exactly: lowercase + digit only
        assert_eq!(score("abcd1234"), 2);
        // 9 chars: adds the length point
        assert_eq!(score("abcd12345"), 3);
    }

    #[test]
    fn symbols_outside_the_fixed_set_do_not_count() {
        assert_eq!(score("abc?"), 1);
        assert_eq!(score("abc$"), 2);
    }

    #[test]
    fn never_exceeds_max() {
        assert!(score("Tr0ub4dor&3!VeryLong") <= MAX_SCORE);
    }
}
