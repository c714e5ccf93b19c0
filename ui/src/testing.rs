//! In-memory [`Backend`] for exercising screen flows without a network.

use std::cell::RefCell;
use std::collections::HashMap;

use api::{
    ApiError, Backend, Credentials, HistoryRecord, LoginResponse, NewTranslation,
    PreferenceUpdate, Registration, ThemePreference,
};
use async_trait::async_trait;

#[derive(Default)]
struct FakeState {
    login: Option<Result<LoginResponse, ApiError>>,
    register: Option<Result<(), ApiError>>,
    predict: Option<Result<String, ApiError>>,
    preferences: HashMap<String, String>,
    history: HashMap<String, Vec<HistoryRecord>>,
    fail_next: Option<ApiError>,

    logins: Vec<Credentials>,
    registrations: Vec<Registration>,
    predictions: Vec<Vec<String>>,
    preference_lookups: Vec<(&'static str, String)>,
    saved_preferences: Vec<PreferenceUpdate>,
    saved_translations: Vec<NewTranslation>,
}

#[derive(Default)]
pub struct FakeBackend {
    state: RefCell<FakeState>,
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        status_text: "Not Found".into(),
        message: None,
        body_is_json: true,
    }
}

impl FakeBackend {
    pub fn set_login(&self, response: Result<LoginResponse, ApiError>) {
        self.state.borrow_mut().login = Some(response);
    }

    pub fn set_register(&self, response: Result<(), ApiError>) {
        self.state.borrow_mut().register = Some(response);
    }

    pub fn set_predict(&self, response: Result<String, ApiError>) {
        self.state.borrow_mut().predict = Some(response);
    }

    pub fn set_preferences(&self, user_id: &str, theme: &str) {
        self.state
            .borrow_mut()
            .preferences
            .insert(user_id.to_string(), theme.to_string());
    }

    pub fn set_history(&self, user_id: &str, records: Vec<HistoryRecord>) {
        self.state
            .borrow_mut()
            .history
            .insert(user_id.to_string(), records);
    }

    /// Make the next call of any kind fail with `err`.
    pub fn fail_next(&self, err: ApiError) {
        self.state.borrow_mut().fail_next = Some(err);
    }

    pub fn logins(&self) -> Vec<Credentials> {
        self.state.borrow().logins.clone()
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.state.borrow().registrations.clone()
    }

    pub fn predictions(&self) -> Vec<Vec<String>> {
        self.state.borrow().predictions.clone()
    }

    /// `(endpoint, userId)` pairs of every preference lookup, in call order.
    pub fn preference_lookups(&self) -> Vec<(&'static str, String)> {
        self.state.borrow().preference_lookups.clone()
    }

    pub fn saved_preferences(&self) -> Vec<PreferenceUpdate> {
        self.state.borrow().saved_preferences.clone()
    }

    pub fn saved_translations(&self) -> Vec<NewTranslation> {
        self.state.borrow().saved_translations.clone()
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        match self.state.borrow_mut().fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn lookup(&self, endpoint: &'static str, user_id: &str) -> Result<ThemePreference, ApiError> {
        let mut state = self.state.borrow_mut();
        state
            .preference_lookups
            .push((endpoint, user_id.to_string()));
        state
            .preferences
            .get(user_id)
            .map(|theme| ThemePreference {
                theme: theme.clone(),
            })
            .ok_or_else(not_found)
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.take_failure()?;
        let mut state = self.state.borrow_mut();
        state.logins.push(credentials.clone());
        state.login.clone().unwrap_or_else(|| Err(not_found()))
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.take_failure()?;
        let mut state = self.state.borrow_mut();
        state.registrations.push(registration.clone());
        state.register.clone().unwrap_or(Ok(()))
    }

    async fn user_preferences(&self, user_id: &str) -> Result<ThemePreference, ApiError> {
        self.take_failure()?;
        self.lookup("/api/usuarios/preferencias", user_id)
    }

    async fn preferences(&self, user_id: &str) -> Result<ThemePreference, ApiError> {
        self.take_failure()?;
        self.lookup("/api/preferencias", user_id)
    }

    async fn save_preferences(&self, update: &PreferenceUpdate) -> Result<(), ApiError> {
        self.take_failure()?;
        self.state
            .borrow_mut()
            .saved_preferences
            .push(update.clone());
        Ok(())
    }

    async fn predict(&self, image_paths: &[String]) -> Result<String, ApiError> {
        self.take_failure()?;
        let mut state = self.state.borrow_mut();
        state.predictions.push(image_paths.to_vec());
        state.predict.clone().unwrap_or_else(|| Ok(String::new()))
    }

    async fn save_translation(&self, translation: &NewTranslation) -> Result<(), ApiError> {
        self.take_failure()?;
        self.state
            .borrow_mut()
            .saved_translations
            .push(translation.clone());
        Ok(())
    }

    async fn history(&self, user_id: &str) -> Result<Vec<HistoryRecord>, ApiError> {
        self.take_failure()?;
        Ok(self
            .state
            .borrow()
            .history
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}
