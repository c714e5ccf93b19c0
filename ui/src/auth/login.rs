use api::{Backend, Credentials, LoginResponse};

use super::failure_message;

pub const LOGIN_FALLBACK_ERROR: &str = "Error al iniciar sesión";

/// `userId` value used for the post-login preference lookup when the login
/// response carries no top-level `userId`.
pub const MISSING_LOOKUP_ID: &str = "undefined";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Clears the previous error; call before dispatching [`submit`].
    pub fn begin_submit(&mut self) {
        self.error = None;
    }

    pub fn apply(&mut self, outcome: &LoginOutcome) {
        match outcome {
            LoginOutcome::Authenticated(_) => self.error = None,
            LoginOutcome::Rejected(message) => self.error = Some(message.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    /// String form of `user.id`; this is what gets persisted.
    pub session_id: String,
    /// Identifier sent to `/api/usuarios/preferencias`.
    ///
    /// Taken from the response's top-level `userId`, not from `user.id`, so the
    /// two can differ. Kept as the backend contract currently stands.
    pub preference_lookup_id: String,
}

impl From<LoginResponse> for LoginSuccess {
    fn from(resp: LoginResponse) -> Self {
        Self {
            session_id: resp.user.id.to_string(),
            preference_lookup_id: resp
                .user_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| MISSING_LOOKUP_ID.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(LoginSuccess),
    Rejected(String),
}

pub async fn submit(backend: &dyn Backend, credentials: &Credentials) -> LoginOutcome {
    match backend.login(credentials).await {
        Ok(resp) => {
            let success = LoginSuccess::from(resp);
            log::info!("Login accepted for user {}", success.session_id);
            LoginOutcome::Authenticated(success)
        }
        Err(err) => {
            log::warn!("Login failed: {err:?}");
            LoginOutcome::Rejected(failure_message(&err, LOGIN_FALLBACK_ERROR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CONNECTION_ERROR;
    use crate::core::session::Session;
    use crate::core::theme::{self, SyncOutcome, Theme};
    use crate::testing::FakeBackend;
    use api::{ApiError, LoginUser, UserId};
    use futures::executor::block_on;

    fn response(id: i64, top_level: Option<i64>) -> LoginResponse {
        LoginResponse {
            user: LoginUser {
                id: UserId::Number(id.into()),
            },
            user_id: top_level.map(|v| UserId::Number(v.into())),
        }
    }

    fn form() -> LoginForm {
        LoginForm {
            email: "ana@example.com".into(),
            password: "secreto".into(),
            ..LoginForm::default()
        }
    }

    #[test]
    fn successful_login_stores_string_form_of_id() {
        let backend = FakeBackend::default();
        backend.set_login(Ok(response(42, None)));
        let session = Session::in_memory();

        let outcome = block_on(submit(&backend, &form().credentials()));
        let LoginOutcome::Authenticated(success) = outcome else {
            panic!("expected login to succeed");
        };
        session.sign_in(&success.session_id).unwrap();

        assert_eq!(session.user_id().as_deref(), Some("42"));
        assert_eq!(backend.logins(), vec![form().credentials()]);
    }

    #[test]
    fn rejected_login_shows_server_message_or_fallback() {
        let backend = FakeBackend::default();
        backend.set_login(Err(ApiError::Status {
            status: 401,
            status_text: "Unauthorized".into(),
            message: Some("Contraseña incorrecta".into()),
            body_is_json: true,
        }));
        let mut f = form();
        f.begin_submit();
        let outcome = block_on(submit(&backend, &f.credentials()));
        f.apply(&outcome);
        assert_eq!(f.error.as_deref(), Some("Contraseña incorrecta"));

        backend.set_login(Err(ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
            message: None,
            body_is_json: true,
        }));
        let outcome = block_on(submit(&backend, &f.credentials()));
        f.apply(&outcome);
        assert_eq!(f.error.as_deref(), Some(LOGIN_FALLBACK_ERROR));
    }

    #[test]
    fn non_success_never_authenticates() {
        let backend = FakeBackend::default();
        for status in [400u16, 401, 403, 404, 429, 500, 503] {
            backend.set_login(Err(ApiError::Status {
                status,
                status_text: String::new(),
                message: None,
                body_is_json: true,
            }));
            let outcome = block_on(submit(&backend, &form().credentials()));
            match outcome {
                LoginOutcome::Rejected(message) => assert!(!message.is_empty()),
                other => panic!("status {status} produced {other:?}"),
            }
        }
    }

    #[test]
    fn html_error_page_shows_connection_error() {
        let backend = FakeBackend::default();
        backend.set_login(Err(ApiError::Status {
            status: 502,
            status_text: "Bad Gateway".into(),
            message: None,
            body_is_json: false,
        }));
        let mut f = form();
        f.begin_submit();
        let outcome = block_on(submit(&backend, &f.credentials()));
        f.apply(&outcome);
        assert_eq!(f.error.as_deref(), Some(CONNECTION_ERROR));
    }

    #[test]
    fn unreachable_server_shows_connection_error() {
        let backend = FakeBackend::default();
        backend.fail_next(ApiError::Transport("connection refused".into()));
        let mut f = form();
        let outcome = block_on(submit(&backend, &f.credentials()));
        f.apply(&outcome);
        assert_eq!(f.error.as_deref(), Some(CONNECTION_ERROR));
    }

    #[test]
    fn preference_lookup_uses_top_level_user_id_not_session_id() {
        let backend = FakeBackend::default();
        backend.set_login(Ok(response(42, None)));
        backend.set_preferences("42", "dark");

        let LoginOutcome::Authenticated(success) =
            block_on(submit(&backend, &form().credentials()))
        else {
            panic!("login should succeed");
        };
        assert_eq!(success.session_id, "42");
        assert_eq!(success.preference_lookup_id, MISSING_LOOKUP_ID);

        // The stored dark preference for user 42 is never found by this lookup.
        let outcome = block_on(theme::fetch_after_login(
            &backend,
            &success.preference_lookup_id,
        ));
        assert!(matches!(outcome, SyncOutcome::Failed(_)));
        assert_eq!(
            backend.preference_lookups(),
            vec![("/api/usuarios/preferencias", "undefined".to_string())]
        );
    }

    #[test]
    fn preference_lookup_applies_when_backend_sends_user_id() {
        let backend = FakeBackend::default();
        backend.set_login(Ok(response(42, Some(42))));
        backend.set_preferences("42", "dark");

        let LoginOutcome::Authenticated(success) =
            block_on(submit(&backend, &form().credentials()))
        else {
            panic!("login should succeed");
        };
        let outcome = block_on(theme::fetch_after_login(
            &backend,
            &success.preference_lookup_id,
        ));
        assert_eq!(outcome.fetched_theme(), Some(Theme::Dark));
    }

    #[test]
    fn password_visibility_toggle_does_not_touch_credentials() {
        let mut f = form();
        f.toggle_password();
        assert!(f.show_password);
        f.toggle_password();
        assert!(!f.show_password);
        assert_eq!(f.credentials(), form().credentials());
    }
}
