use api::{Backend, Registration};

use super::failure_message;

pub const REGISTER_FALLBACK_ERROR: &str = "Error al registrar usuario";
pub const REGISTER_SUCCESS: &str = "Registro exitoso";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub error: Option<String>,
}

impl RegistrationForm {
    pub fn registration(&self) -> Registration {
        Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn begin_submit(&mut self) {
        self.error = None;
    }

    pub fn apply(&mut self, outcome: &RegisterOutcome) {
        match outcome {
            RegisterOutcome::Registered => self.error = None,
            RegisterOutcome::Rejected(message) => self.error = Some(message.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    Rejected(String),
}

pub async fn submit(backend: &dyn Backend, registration: &Registration) -> RegisterOutcome {
    match backend.register(registration).await {
        Ok(()) => {
            log::info!("Registered {}", registration.email);
            RegisterOutcome::Registered
        }
        Err(err) => {
            log::warn!("Registration failed: {err:?}");
            RegisterOutcome::Rejected(failure_message(&err, REGISTER_FALLBACK_ERROR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CONNECTION_ERROR;
    use crate::testing::FakeBackend;
    use api::ApiError;
    use futures::executor::block_on;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            name: "ana".into(),
            email: "ana@example.com".into(),
            password: "pw".into(),
            ..RegistrationForm::default()
        }
    }

    #[test]
    fn sends_all_three_fields() {
        let backend = FakeBackend::default();
        let outcome = block_on(submit(&backend, &filled().registration()));
        assert_eq!(outcome, RegisterOutcome::Registered);
        assert_eq!(backend.registrations(), vec![filled().registration()]);
    }

    #[test]
    fn server_error_text_is_shown() {
        let backend = FakeBackend::default();
        backend.set_register(Err(ApiError::Status {
            status: 409,
            status_text: "Conflict".into(),
            message: Some("El correo ya está registrado".into()),
            body_is_json: true,
        }));

        let mut form = filled();
        form.begin_submit();
        let outcome = block_on(submit(&backend, &form.registration()));
        form.apply(&outcome);
        assert_eq!(form.error.as_deref(), Some("El correo ya está registrado"));
    }

    #[test]
    fn missing_error_text_uses_fallback() {
        let backend = FakeBackend::default();
        backend.set_register(Err(ApiError::Status {
            status: 400,
            status_text: "Bad Request".into(),
            message: None,
            body_is_json: true,
        }));
        let outcome = block_on(submit(&backend, &filled().registration()));
        assert_eq!(
            outcome,
            RegisterOutcome::Rejected(REGISTER_FALLBACK_ERROR.to_string())
        );
    }

    #[test]
    fn non_json_rejection_uses_connection_message() {
        let backend = FakeBackend::default();
        backend.set_register(Err(ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
            message: None,
            body_is_json: false,
        }));
        let outcome = block_on(submit(&backend, &filled().registration()));
        assert_eq!(outcome, RegisterOutcome::Rejected(CONNECTION_ERROR.to_string()));
    }

    #[test]
    fn network_failure_uses_connection_message_and_clears_on_retry() {
        let backend = FakeBackend::default();
        backend.fail_next(ApiError::Transport("offline".into()));

        let mut form = filled();
        let outcome = block_on(submit(&backend, &form.registration()));
        form.apply(&outcome);
        assert_eq!(form.error.as_deref(), Some(CONNECTION_ERROR));

        form.begin_submit();
        assert_eq!(form.error, None);
        let outcome = block_on(submit(&backend, &form.registration()));
        form.apply(&outcome);
        assert_eq!(form.error, None);
    }
}
