use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    Credentials, ErrorBody, HistoryRecord, LoginResponse, NewTranslation, PreferenceUpdate,
    Registration, ThemePreference,
};
use crate::Backend;

const LOGIN_PATH: &str = "/api/login";
const REGISTER_PATH: &str = "/api/registro";
const USER_PREFERENCES_PATH: &str = "/api/usuarios/preferencias";
const PREFERENCES_PATH: &str = "/api/preferencias";
const SAVE_TRANSLATION_PATH: &str = "/api/traducciones/guardar";
const HISTORY_PATH: &str = "/api/traducciones/historial";

/// `reqwest`-backed [`Backend`]. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn fetch_theme(&self, path: &str, user_id: &str) -> Result<ThemePreference, ApiError> {
        let response = self
            .http
            .get(self.config.endpoint(path))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<ThemePreference>().await?)
    }
}

/// Pass 2xx responses through; turn anything else into [`ApiError::Status`].
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let status_text = status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string());
    let body = response
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<serde_json::Value>(&text).ok());
    let body_is_json = body.is_some();
    let message = body
        .and_then(|value| serde_json::from_value::<ErrorBody>(value).ok())
        .and_then(|body| body.error);

    log::debug!(
        "backend answered {status} ({})",
        match (&message, body_is_json) {
            (Some(message), _) => message.as_str(),
            (None, true) => "no error field",
            (None, false) => "body is not JSON",
        }
    );
    Err(ApiError::Status {
        status: status.as_u16(),
        status_text,
        message,
        body_is_json,
    })
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.config.endpoint(LOGIN_PATH))
            .json(credentials)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<LoginResponse>().await?)
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.config.endpoint(REGISTER_PATH))
            .json(registration)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn user_preferences(&self, user_id: &str) -> Result<ThemePreference, ApiError> {
        self.fetch_theme(USER_PREFERENCES_PATH, user_id).await
    }

    async fn preferences(&self, user_id: &str) -> Result<ThemePreference, ApiError> {
        self.fetch_theme(PREFERENCES_PATH, user_id).await
    }

    async fn save_preferences(&self, update: &PreferenceUpdate) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.config.endpoint(PREFERENCES_PATH))
            .json(update)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn predict(&self, image_paths: &[String]) -> Result<String, ApiError> {
        let response = self
            .http
            .post(&self.config.predict_url)
            .json(image_paths)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.text().await?)
    }

    async fn save_translation(&self, translation: &NewTranslation) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.config.endpoint(SAVE_TRANSLATION_PATH))
            .json(translation)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn history(&self, user_id: &str) -> Result<Vec<HistoryRecord>, ApiError> {
        let response = self
            .http
            .get(self.config.endpoint(HISTORY_PATH))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<Vec<HistoryRecord>>().await?)
    }
}
