mod login;

pub use login::*;
