//! Registration rules
//!
//! The canonical, ordered rule set and the field predicates behind it.

use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

pub const MIN_USERNAME_LENGTH: usize = 4;
pub const MIN_DISTINCT_USERNAME_CHARS: usize = 2;
pub const MIN_PASSWORD_LENGTH: usize = 12;
pub const FORBIDDEN_EMAIL_DOMAIN: &str = "example.com";
pub const FORBIDDEN_PASSWORD_WORD: &str = "password";

/// Symbols a password must draw at least one character from.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

// `\w` is spelled out as ASCII so non-latin letters do not slip through.
const EMAIL_PATTERN: &str = concat!(
    r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*",
    r"@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*",
    r"(\.[A-Za-z0-9_]{2,3})+$",
);

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex pattern"));

/// Every registration rule, declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    UsernameBlank,
    UsernameTooShort,
    UsernameTooFewDistinct,
    UsernameNotAlphanumeric,
    UsernameTaken,
    EmailBlank,
    EmailMalformed,
    EmailForbiddenDomain,
    PasswordBlank,
    PasswordTooShort,
    PasswordMissingCase,
    PasswordMissingDigit,
    PasswordMissingSymbol,
    PasswordContainsWord,
    PasswordContainsUsername,
    PasswordMismatch,
    TermsNotAccepted,
}

impl Rule {
    pub const ALL: [Rule; 17] = [
        Rule::UsernameBlank,
        Rule::UsernameTooShort,
        Rule::UsernameTooFewDistinct,
        Rule::UsernameNotAlphanumeric,
        Rule::UsernameTaken,
        Rule::EmailBlank,
        Rule::EmailMalformed,
        Rule::EmailForbiddenDomain,
        Rule::PasswordBlank,
        Rule::PasswordTooShort,
        Rule::PasswordMissingCase,
        Rule::PasswordMissingDigit,
        Rule::PasswordMissingSymbol,
        Rule::PasswordContainsWord,
        Rule::PasswordContainsUsername,
        Rule::PasswordMismatch,
        Rule::TermsNotAccepted,
    ];

    /// User-facing message for a violation of this rule
    pub fn message(&self) -> &'static str {
        match self {
            Rule::UsernameBlank => "Username cannot be blank.",
            Rule::UsernameTooShort => "Username must be at least 4 characters long.",
            Rule::UsernameTooFewDistinct => "Username must contain at least 2 unique characters.",
            Rule::UsernameNotAlphanumeric => {
                "Username cannot contain any special characters or whitespace."
            }
            Rule::UsernameTaken => "That username is already taken.",
            Rule::EmailBlank => "Email cannot be blank.",
            Rule::EmailMalformed => "Please enter a valid email address.",
            Rule::EmailForbiddenDomain => "Email cannot be from the domain \"example.com\".",
            Rule::PasswordBlank => "Password cannot be blank.",
            Rule::PasswordTooShort => "Password must be at least 12 characters long.",
            Rule::PasswordMissingCase => {
                "Password must have at least one uppercase and one lowercase letter."
            }
            Rule::PasswordMissingDigit => "Password must contain at least one number.",
            Rule::PasswordMissingSymbol => "Password must contain at least one special character.",
            Rule::PasswordContainsWord => "Password cannot contain the word \"password\".",
            Rule::PasswordContainsUsername => "Password cannot contain your username.",
            Rule::PasswordMismatch => "Passwords do not match.",
            Rule::TermsNotAccepted => "You must agree to the Terms of Use.",
        }
    }

    /// Form field the violation belongs to, for adapters that move focus
    pub fn field(&self) -> Field {
        match self {
            Rule::UsernameBlank
            | Rule::UsernameTooShort
            | Rule::UsernameTooFewDistinct
            | Rule::UsernameNotAlphanumeric
            | Rule::UsernameTaken => Field::Username,
            Rule::EmailBlank | Rule::EmailMalformed | Rule::EmailForbiddenDomain => Field::Email,
            Rule::PasswordBlank
            | Rule::PasswordTooShort
            | Rule::PasswordMissingCase
            | Rule::PasswordMissingDigit
            | Rule::PasswordMissingSymbol
            | Rule::PasswordContainsWord
            | Rule::PasswordContainsUsername => Field::Password,
            Rule::PasswordMismatch => Field::PasswordConfirmation,
            Rule::TermsNotAccepted => Field::Terms,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    PasswordConfirmation,
    Terms,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirmation => "confirm password",
            Field::Terms => "terms",
        };
        f.write_str(label)
    }
}

pub fn is_long_enough(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn distinct_chars(value: &str) -> usize {
    value.chars().collect::<HashSet<_>>().len()
}

pub fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn has_forbidden_domain(email: &str) -> bool {
    email
        .to_lowercase()
        .ends_with(&format!("@{}", FORBIDDEN_EMAIL_DOMAIN))
}

pub fn has_mixed_case(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_declared_in_order() {
        let mut sorted = Rule::ALL;
        sorted.sort();
        assert_eq!(sorted, Rule::ALL);
    }

    #[test]
    fn test_rule_fields() {
        assert_eq!(Rule::UsernameTaken.field(), Field::Username);
        assert_eq!(Rule::EmailBlank.field(), Field::Email);
        assert_eq!(Rule::PasswordContainsUsername.field(), Field::Password);
        assert_eq!(Rule::PasswordMismatch.field(), Field::PasswordConfirmation);
        assert_eq!(Rule::TermsNotAccepted.field(), Field::Terms);
        assert_eq!(Field::PasswordConfirmation.to_string(), "confirm password");
    }

    #[test]
    fn test_distinct_chars() {
        assert_eq!(distinct_chars("aaaa"), 1);
        assert_eq!(distinct_chars("aAaa"), 2);
        assert_eq!(distinct_chars("abab"), 2);
    }

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(!is_alphanumeric("abc 123"));
        assert!(!is_alphanumeric("abc_123"));
        assert!(!is_alphanumeric("ñandu"));
        assert!(!is_alphanumeric(""));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("x@example.com"));
        assert!(is_valid_email("first.last@mail-host.co.uk"));
        assert!(is_valid_email("a_b@mail.io"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@mail.info"));
        assert!(!is_valid_email(".a@mail.com"));
        assert!(!is_valid_email("a..b@mail.com"));
        assert!(!is_valid_email("a@mail..com"));
    }

    #[test]
    fn test_forbidden_domain() {
        assert!(has_forbidden_domain("x@example.com"));
        assert!(has_forbidden_domain("x@EXAMPLE.com"));
        assert!(!has_forbidden_domain("x@example.org"));
        assert!(!has_forbidden_domain("x@sub.example.com"));
    }

    #[test]
    fn test_password_predicates() {
        let password = "Abcdefghij1!";
        assert!(is_long_enough(password, MIN_PASSWORD_LENGTH));
        assert!(has_mixed_case(password));
        assert!(has_digit(password));
        assert!(has_symbol(password));
        assert!(!contains_ignore_case(password, FORBIDDEN_PASSWORD_WORD));

        assert!(!has_mixed_case("abcdefghij1!"));
        assert!(!has_mixed_case("ABCDEFGHIJ1!"));
        assert!(!has_digit("Abcdefghijk!"));
        assert!(!has_symbol("Abcdefghij12"));
        assert!(contains_ignore_case("MyPassWord1!x", FORBIDDEN_PASSWORD_WORD));
    }

    #[test]
    fn test_every_symbol_counts() {
        for symbol in PASSWORD_SYMBOLS.chars() {
            assert!(has_symbol(&format!("Abc1{}", symbol)), "{}", symbol);
        }
        assert!(!has_symbol("Abc1~"));
        assert!(!has_symbol("Abc1`"));
    }
}
