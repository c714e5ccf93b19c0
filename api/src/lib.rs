//! HTTP client for the DigitalForge backend and the sign prediction service.
//!
//! The UI crate talks to the network exclusively through the [`Backend`] trait;
//! [`ApiClient`] is the `reqwest` implementation used by every platform shell.

mod client;
mod config;
mod error;
mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    Credentials, HistoryRecord, LoginResponse, LoginUser, NewTranslation, PreferenceUpdate,
    Registration, ThemePreference, UserId,
};

use async_trait::async_trait;

/// Every remote operation the client screens perform.
///
/// Futures are `!Send` so the same implementation runs on the browser event loop.
#[async_trait(?Send)]
pub trait Backend {
    /// `POST /api/login`
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /api/registro`. The response body is ignored.
    async fn register(&self, registration: &Registration) -> Result<(), ApiError>;

    /// `GET /api/usuarios/preferencias?userId=`, queried right after login.
    async fn user_preferences(&self, user_id: &str) -> Result<ThemePreference, ApiError>;

    /// `GET /api/preferencias?userId=`, queried when the workspace mounts.
    async fn preferences(&self, user_id: &str) -> Result<ThemePreference, ApiError>;

    /// `POST /api/preferencias`
    async fn save_preferences(&self, update: &PreferenceUpdate) -> Result<(), ApiError>;

    /// Sends the ordered image paths to the prediction service and returns the raw text body.
    async fn predict(&self, image_paths: &[String]) -> Result<String, ApiError>;

    /// `POST /api/traducciones/guardar`
    async fn save_translation(&self, translation: &NewTranslation) -> Result<(), ApiError>;

    /// `GET /api/traducciones/historial?userId=`
    async fn history(&self, user_id: &str) -> Result<Vec<HistoryRecord>, ApiError>;
}
