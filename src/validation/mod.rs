//! Registration form validation
//!
//! The ordered rule engine applied to username, email, password and terms fields.

pub mod form;
pub mod results;
pub mod rules;
pub mod validator;

pub use form::RegistrationForm;
pub use results::ValidationErrors;
pub use rules::{Field, Rule};
pub use validator::{ValidationMode, Validator};
