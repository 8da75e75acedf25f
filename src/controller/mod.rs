mod api;
mod format;
mod health_check;
mod login;

pub use api::*;
pub use format::*;
pub use health_check::*;
pub use login::*;
