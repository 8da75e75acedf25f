mod credentials;
mod login;
mod login_form;

pub use credentials::CredentialChecker;
pub use login::{LoginRequest, LoginResult};
pub use login_form::{LoginForm, LoginOutcome, SERVER_ERROR_MESSAGE};
