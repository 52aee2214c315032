//! # Field validation rules
//!
//! Pure predicates evaluated against the raw input string. Nothing here trims,
//! normalises or inspects more than the value it is given, so the same input
//! always yields the same answer.
//!
//! | Predicate | Accepts |
//! |-----------|---------|
//! | [`valid_username`] | 4–24 ASCII characters, a letter first, then letters, digits, `-` or `_`. |
//! | [`valid_password`] | 8–24 UTF-16 code units containing a lowercase letter, an uppercase letter, a digit and one of [`PASSWORD_SPECIALS`]. |
//! | [`valid_match`] | Byte-for-byte equality of the two password inputs. |
//!
//! The username rule comes in two flavours, selected by [`UsernameCharset`].
//! [`UsernameCharset::Legacy`] reproduces the historical pattern
//! `^[a-zA-z][a-zA-z0-9-_]{3,23}$`, whose `A-z` range also spans the six ASCII
//! punctuation characters between `Z` and `a`.

/// Characters that satisfy the "special character" requirement of a password.
pub const PASSWORD_SPECIALS: [char; 5] = ['!', '@', '#', '$', '%'];

pub const USERNAME_MIN_LEN: usize = 4;
pub const USERNAME_MAX_LEN: usize = 24;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 24;

/// Which character classes the username rule accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UsernameCharset {
    /// ASCII letters, then letters, digits, `-` and `_`.
    #[default]
    Strict,
    /// The `A-z` range: additionally admits `[ \ ] ^ _` and the backtick.
    Legacy,
}

impl UsernameCharset {
    fn accepts_first(self, c: char) -> bool {
        match self {
            UsernameCharset::Strict => c.is_ascii_alphabetic(),
            UsernameCharset::Legacy => ('A'..='z').contains(&c),
        }
    }

    fn accepts_rest(self, c: char) -> bool {
        self.accepts_first(c) || c.is_ascii_digit() || c == '-' || c == '_'
    }
}

/// The rule set the form engine validates against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    pub username: UsernameCharset,
}

impl Rules {
    pub fn new(username: UsernameCharset) -> Self {
        Self { username }
    }

    pub fn username(&self, value: &str) -> bool {
        valid_username(value, self.username)
    }

    pub fn password(&self, value: &str) -> bool {
        valid_password(value)
    }

    pub fn matches(&self, password: &str, confirm: &str) -> bool {
        valid_match(password, confirm)
    }
}

/// Whether `value` is an acceptable username under `charset`.
pub fn valid_username(value: &str, charset: UsernameCharset) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    // Every accepted character is ASCII, so the byte length is the character count
    // for any value that can pass.
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&value.len())
        && charset.accepts_first(first)
        && chars.all(|c| charset.accepts_rest(c))
}

/// Whether `value` meets the password strength requirements.
pub fn valid_password(value: &str) -> bool {
    // Counted in UTF-16 code units, as a browser measures input length.
    let len = value.encode_utf16().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return false;
    }
    if value.chars().any(is_line_terminator) {
        return false;
    }

    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut special = false;
    for c in value.chars() {
        lower |= c.is_ascii_lowercase();
        upper |= c.is_ascii_uppercase();
        digit |= c.is_ascii_digit();
        special |= PASSWORD_SPECIALS.contains(&c);
    }
    lower && upper && digit && special
}

/// Whether the confirmation equals the password. Two empty strings match.
pub fn valid_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_length_bounds() {
        assert!(!valid_username("", UsernameCharset::Strict));
        assert!(!valid_username("ab1", UsernameCharset::Strict));
        assert!(valid_username("ab12", UsernameCharset::Strict));
        assert!(valid_username(&"a".repeat(24), UsernameCharset::Strict));
        assert!(!valid_username(&"a".repeat(25), UsernameCharset::Strict));
    }

    #[test]
    fn test_username_must_start_with_letter() {
        assert!(valid_username("alice_1", UsernameCharset::Strict));
        assert!(valid_username("Zed-99", UsernameCharset::Strict));
        assert!(!valid_username("1alice", UsernameCharset::Strict));
        assert!(!valid_username("_alice", UsernameCharset::Strict));
        assert!(!valid_username("-alice", UsernameCharset::Strict));
    }

    #[test]
    fn test_username_rejects_other_characters() {
        assert!(!valid_username("alice bob", UsernameCharset::Strict));
        assert!(!valid_username("alice.bob", UsernameCharset::Strict));
        assert!(!valid_username("alicé", UsernameCharset::Strict));
        assert!(!valid_username(" alice", UsernameCharset::Strict));
        assert!(!valid_username("alice[1]", UsernameCharset::Strict));
    }

    #[test]
    fn test_username_legacy_range_admits_punctuation() {
        for first in ['[', '\\', ']', '^', '_', '`'] {
            let name = format!("{first}abc");
            assert!(valid_username(&name, UsernameCharset::Legacy), "{name}");
            assert!(!valid_username(&name, UsernameCharset::Strict), "{name}");
        }
        assert!(valid_username("ab^`", UsernameCharset::Legacy));
        assert!(!valid_username("ab^`", UsernameCharset::Strict));
    }

    #[test]
    fn test_username_legacy_still_rejects_outside_range() {
        assert!(!valid_username("1abc", UsernameCharset::Legacy));
        assert!(!valid_username("{abc", UsernameCharset::Legacy));
        assert!(!valid_username("@abc", UsernameCharset::Legacy));
        assert!(!valid_username("abc.", UsernameCharset::Legacy));
        assert!(valid_username("alice_1", UsernameCharset::Legacy));
    }

    #[test]
    fn test_password_requirements() {
        assert!(valid_password("Abcde1!x"));
        assert!(valid_password("%9zZzzzz"));
        // Each requirement missing in turn.
        assert!(!valid_password("abcde1!x"));
        assert!(!valid_password("ABCDE1!X"));
        assert!(!valid_password("Abcdef!x"));
        assert!(!valid_password("Abcde12x"));
        // `&` is not one of the accepted specials.
        assert!(!valid_password("Abcde1&x"));
    }

    #[test]
    fn test_password_length_bounds() {
        assert!(!valid_password(""));
        assert!(!valid_password("Abcd1!x"));
        assert!(valid_password("Abcd1!xy"));
        let max = format!("Ab1!{}", "x".repeat(20));
        assert_eq!(max.len(), 24);
        assert!(valid_password(&max));
        let over = format!("{max}x");
        assert!(!valid_password(&over));
    }

    #[test]
    fn test_password_counts_utf16_units_not_bytes() {
        // 8 units, 10 bytes.
        assert!(valid_password("Ab1!xyzé"));
        // 24 units with multibyte content is still within bounds.
        let p = format!("Ab1!{}", "é".repeat(20));
        assert!(valid_password(&p));
    }

    #[test]
    fn test_password_astral_characters_count_twice() {
        // Six characters, eight UTF-16 units.
        assert!(valid_password("Ab1!😀😀"));
        // Fifteen characters, twenty-six UTF-16 units.
        let long = format!("Ab1!{}", "😀".repeat(11));
        assert_eq!(long.chars().count(), 15);
        assert!(!valid_password(&long));
        // Exactly 24 units.
        let max = format!("Ab1!{}", "😀".repeat(10));
        assert!(valid_password(&max));
    }

    #[test]
    fn test_password_rejects_line_terminators() {
        assert!(!valid_password("Abcde1!x\n"));
        assert!(!valid_password("Abc\rde1!x"));
        assert!(!valid_password("Abc\u{2028}de1!x"));
        // Other whitespace is fine.
        assert!(valid_password("Abc de1!x"));
    }

    #[test]
    fn test_match_is_strict_equality() {
        assert!(valid_match("", ""));
        assert!(valid_match("Abcde1!x", "Abcde1!x"));
        assert!(!valid_match("Abcde1!x", "Abcde1!"));
        assert!(!valid_match("Abcde1!x", ""));
        assert!(!valid_match("abc", "ABC"));
        assert!(!valid_match("abc", "abc "));
    }

    #[test]
    fn test_rules_are_idempotent() {
        let rules = Rules::default();
        for value in ["alice_1", "ab1", "Abcde1!x", ""] {
            assert_eq!(rules.username(value), rules.username(value));
            assert_eq!(rules.password(value), rules.password(value));
        }
    }
}
