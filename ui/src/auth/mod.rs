//! Login and registration form state and submit flows.

pub mod login;
pub mod register;

pub use login::{LoginForm, LoginOutcome, LoginSuccess};
pub use register::{RegisterOutcome, RegistrationForm};

use api::ApiError;

/// Shown when the request never reached the server or its reply was unreadable.
pub const CONNECTION_ERROR: &str = "Error al conectar con el servidor";

/// Message for a failed auth request: the server's own text when it sent one.
/// A non-2xx reply whose body is not JSON counts as a connection failure.
pub(crate) fn failure_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Status { .. } if err.has_unreadable_body() => CONNECTION_ERROR.to_string(),
        ApiError::Status { .. } => err.server_message().unwrap_or(fallback).to_string(),
        ApiError::Transport(_) | ApiError::Decode(_) | ApiError::InvalidUrl(_) => {
            CONNECTION_ERROR.to_string()
        }
    }
}
