//! Registration form input

/// Raw registration field values as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub terms_accepted: bool,
}

impl RegistrationForm {
    /// Trims the username and trims + lowercases the email. Passwords are taken verbatim.
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized() {
        let form = RegistrationForm {
            username: "  Alice ".into(),
            email: " Alice@Mail.COM\n".into(),
            password: " Abcdefghij1! ".into(),
            password_confirmation: " Abcdefghij1! ".into(),
            terms_accepted: true,
        }
        .normalized();

        assert_eq!(form.username, "Alice");
        assert_eq!(form.email, "alice@mail.com");
        assert_eq!(form.password, " Abcdefghij1! ");
    }
}
