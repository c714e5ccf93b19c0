mod app_shell;
pub use app_shell::{AppShell, BackendHandle, SpeakerHandle};

mod locale_switcher;
pub use locale_switcher::LocaleSwitcher;

mod password_field;
pub use password_field::PasswordField;
