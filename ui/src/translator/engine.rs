//! Translator workspace state: image list, translate lifecycle, result and history panel.
//!
//! All transitions are synchronous; the view awaits backend calls between
//! `begin_*` and `finish_*` pairs.

use api::{ApiError, Backend, HistoryRecord, NewTranslation};

use crate::core::routes;
use crate::core::session::Session;

pub const NO_TRANSLATION_FALLBACK: &str = "No se recibió traducción de la API.";
pub const SAVE_SUCCESS: &str = "Traducción guardada exitosamente";
pub const SAVE_FAILURE: &str = "Error al guardar la traducción";
/// Preview shown when an image path does not load.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub path: String,
    pub preview: String,
}

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            preview: path.clone(),
            path,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslatorState {
    pub images: Vec<ImageRef>,
    pub draft_path: String,
    pub result: String,
    pub error: Option<String>,
    pub is_translating: bool,
    pub show_history: bool,
    pub history: Vec<HistoryRecord>,
}

impl TranslatorState {
    pub fn can_add_image(&self) -> bool {
        !self.draft_path.is_empty()
    }

    /// Append the draft path and clear it. No-op for an empty draft.
    pub fn add_image(&mut self) -> bool {
        if !self.can_add_image() {
            return false;
        }
        let path = std::mem::take(&mut self.draft_path);
        self.images.push(ImageRef::new(path));
        true
    }

    /// Remove by position, keeping the order of the rest.
    pub fn remove_image(&mut self, index: usize) -> Option<ImageRef> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    pub fn can_translate(&self) -> bool {
        !self.is_translating && !self.images.is_empty()
    }

    /// Mark a translate in flight and return the paths to send, or `None` when disabled.
    pub fn begin_translate(&mut self) -> Option<Vec<String>> {
        if !self.can_translate() {
            return None;
        }
        self.is_translating = true;
        self.error = None;
        Some(self.images.iter().map(|img| img.path.clone()).collect())
    }

    pub fn finish_translate(&mut self, outcome: Result<String, ApiError>) {
        match outcome {
            Ok(text) if text.is_empty() => self.result = NO_TRANSLATION_FALLBACK.to_string(),
            Ok(text) => self.result = text,
            Err(err) => {
                let message = match &err {
                    ApiError::Status { .. } => format!("Error en la API: {err}"),
                    other => other.to_string(),
                };
                log::warn!("Translate failed: {message}");
                self.error = Some(format!("Error al traducir: {message}"));
                self.result.clear();
            }
        }
        self.is_translating = false;
    }

    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }

    /// Save payload, or `None` when there is no result or no signed-in user.
    pub fn save_request(&self, user_id: Option<&str>, now_millis: i128) -> Option<NewTranslation> {
        let user_id = user_id?;
        if !self.has_result() {
            return None;
        }
        Some(NewTranslation {
            user_id: user_id.to_string(),
            translated_text: self.result.clone(),
            audio_path: synthetic_audio_path(now_millis),
        })
    }

    pub fn show_history(&mut self, records: Vec<HistoryRecord>) {
        self.history = records;
        self.show_history = true;
    }

    pub fn close_history(&mut self) {
        self.show_history = false;
    }

    /// Clear images, result and error. History stays.
    pub fn reset(&mut self) {
        self.images.clear();
        self.result.clear();
        self.error = None;
    }
}

/// The user the workspace renders for, or the route a visitor without a
/// session is sent to instead.
pub fn workspace_entry(session: &Session) -> Result<String, &'static str> {
    session.user_id().ok_or_else(|| {
        log::info!("No session; redirecting to login");
        routes::LOGIN
    })
}

/// End the session and return the route to leave the workspace for. A store
/// that cannot be cleared is logged; the user still leaves.
pub fn logout(session: &Session) -> &'static str {
    if let Err(err) = session.sign_out() {
        log::error!("Could not clear session: {err}");
    }
    routes::LOGIN
}

/// Placeholder audio location recorded with a saved translation; no file exists there.
pub fn synthetic_audio_path(now_millis: i128) -> String {
    format!("/audios/traduccion-{now_millis}.mp3")
}

/// Run one prediction for paths produced by [`TranslatorState::begin_translate`].
pub async fn translate(backend: &dyn Backend, paths: &[String]) -> Result<String, ApiError> {
    log::debug!("Translating {} image(s)", paths.len());
    backend.predict(paths).await
}

pub async fn save(backend: &dyn Backend, translation: &NewTranslation) -> Result<(), ApiError> {
    backend.save_translation(translation).await
}

/// Fetch history; failures are logged and reported as `None`.
pub async fn load_history(backend: &dyn Backend, user_id: &str) -> Option<Vec<HistoryRecord>> {
    match backend.history(user_id).await {
        Ok(records) => {
            log::debug!("Loaded {} history record(s)", records.len());
            Some(records)
        }
        Err(err) => {
            log::error!("Error al cargar historial: {err}");
            None
        }
    }
}
