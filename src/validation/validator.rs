//! Registration validator
//!
//! Applies the ordered rule set to a registration form. In fail-fast mode the
//! first violated rule is reported; in collect-all mode every violated rule is
//! reported in rule order. The only storage access is the read-only
//! uniqueness lookup.

use serde::Deserialize;

use crate::auth::credentials::{UserRecord, UsernameLookup};
use crate::config::ValidationConfig;
use crate::validation::form::RegistrationForm;
use crate::validation::results::ValidationErrors;
use crate::validation::rules::{self, Rule};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    FailFast,
    CollectAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    mode: ValidationMode,
    forbid_username_in_password: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationMode::default())
    }
}

impl Validator {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            forbid_username_in_password: true,
        }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.mode).forbid_username_in_password(config.forbid_username_in_password)
    }

    pub fn forbid_username_in_password(mut self, forbid: bool) -> Self {
        self.forbid_username_in_password = forbid;
        self
    }

    /// Rules this validator evaluates, in order
    pub fn active_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(|rule| {
            *rule != Rule::PasswordContainsUsername || self.forbid_username_in_password
        })
    }

    /// Validates the form against the rules and the existing usernames.
    ///
    /// On success returns the record to persist, with username and email lowercased.
    pub fn validate(
        &self,
        form: &RegistrationForm,
        existing: &impl UsernameLookup,
    ) -> Result<UserRecord, ValidationErrors> {
        let mut violated = self
            .active_rules()
            .filter(|rule| violates(*rule, form, existing));

        let violations: Vec<Rule> = match self.mode {
            ValidationMode::FailFast => violated.next().into_iter().collect(),
            ValidationMode::CollectAll => violated.collect(),
        };

        if violations.is_empty() {
            Ok(UserRecord::new(&form.username, &form.email, &form.password))
        } else {
            Err(ValidationErrors::new(violations))
        }
    }
}

fn violates(rule: Rule, form: &RegistrationForm, existing: &impl UsernameLookup) -> bool {
    let username = form.username.as_str();
    let email = form.email.as_str();
    let password = form.password.as_str();

    match rule {
        Rule::UsernameBlank => username.is_empty(),
        Rule::UsernameTooShort => !rules::is_long_enough(username, rules::MIN_USERNAME_LENGTH),
        Rule::UsernameTooFewDistinct => {
            rules::distinct_chars(username) < rules::MIN_DISTINCT_USERNAME_CHARS
        }
        Rule::UsernameNotAlphanumeric => !rules::is_alphanumeric(username),
        Rule::UsernameTaken => !username.is_empty() && existing.contains_username(username),
        Rule::EmailBlank => email.is_empty(),
        Rule::EmailMalformed => !rules::is_valid_email(email),
        Rule::EmailForbiddenDomain => rules::has_forbidden_domain(email),
        Rule::PasswordBlank => password.is_empty(),
        Rule::PasswordTooShort => !rules::is_long_enough(password, rules::MIN_PASSWORD_LENGTH),
        Rule::PasswordMissingCase => !rules::has_mixed_case(password),
        Rule::PasswordMissingDigit => !rules::has_digit(password),
        Rule::PasswordMissingSymbol => !rules::has_symbol(password),
        Rule::PasswordContainsWord => {
            rules::contains_ignore_case(password, rules::FORBIDDEN_PASSWORD_WORD)
        }
        Rule::PasswordContainsUsername => rules::contains_ignore_case(password, username),
        Rule::PasswordMismatch => password != form.password_confirmation,
        Rule::TermsNotAccepted => !form.terms_accepted,
    }
}
