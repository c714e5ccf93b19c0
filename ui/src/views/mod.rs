//! Routed pages. Each platform crate maps its `Route` variants onto these.

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod translator;
pub use translator::Translator;
