//! Authentication system
//!
//! Registration and login flows over the user store.

pub mod credentials;
pub mod login;
pub mod registration;
pub mod results;

pub use credentials::{UserRecord, UsernameLookup, Users};
pub use login::{LoginForm, login};
pub use registration::register;
pub use results::LoginSuccess;
