//! Light/dark theme and its best-effort synchronisation with the backend.
//!
//! The UI theme lives in a `Signal<Theme>` provided at the app root. Backend
//! preferences are fetched and saved without ever blocking or reverting the UI;
//! every attempt returns a [`SyncOutcome`] so callers can observe what happened.

use std::fmt;
use std::str::FromStr;

use api::{Backend, PreferenceUpdate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Root CSS modifier, e.g. `theme-dark`.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Result of one preference round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A stored preference was found; the caller should apply it.
    Fetched(Theme),
    /// The new theme was persisted server-side.
    Saved(Theme),
    /// Nothing to do (no signed-in user).
    Skipped,
    /// The round trip failed; the UI keeps its current theme.
    Failed(String),
}

impl SyncOutcome {
    /// Theme to apply locally, if this outcome carries one from the server.
    pub fn fetched_theme(&self) -> Option<Theme> {
        match self {
            SyncOutcome::Fetched(theme) => Some(*theme),
            _ => None,
        }
    }
}

/// Preference lookup issued right after login.
///
/// `lookup_id` is whatever the login flow derived for this call; see
/// [`crate::auth::login::LoginSuccess::preference_lookup_id`].
pub async fn fetch_after_login(backend: &dyn Backend, lookup_id: &str) -> SyncOutcome {
    match backend.user_preferences(lookup_id).await {
        Ok(pref) => parse_fetched(&pref.theme),
        Err(err) => {
            log::warn!("Error loading preferences after login: {err}");
            SyncOutcome::Failed(err.to_string())
        }
    }
}

/// Preference lookup issued when the translator workspace mounts.
pub async fn fetch_for_workspace(backend: &dyn Backend, user_id: &str) -> SyncOutcome {
    match backend.preferences(user_id).await {
        Ok(pref) => parse_fetched(&pref.theme),
        Err(err) => {
            log::error!("Error al cargar preferencias: {err}");
            SyncOutcome::Failed(err.to_string())
        }
    }
}

/// Persist `theme` for the signed-in user. Failures are logged, never surfaced.
pub async fn persist(backend: &dyn Backend, user_id: Option<&str>, theme: Theme) -> SyncOutcome {
    let Some(user_id) = user_id else {
        return SyncOutcome::Skipped;
    };

    let update = PreferenceUpdate {
        user_id: user_id.to_string(),
        theme: theme.as_str().to_string(),
    };
    match backend.save_preferences(&update).await {
        Ok(()) => {
            log::debug!("Saved theme preference {theme} for user {user_id}");
            SyncOutcome::Saved(theme)
        }
        Err(err) => {
            log::error!("Error al guardar preferencias: {err}");
            SyncOutcome::Failed(err.to_string())
        }
    }
}

fn parse_fetched(raw: &str) -> SyncOutcome {
    match raw.parse::<Theme>() {
        Ok(theme) => SyncOutcome::Fetched(theme),
        Err(err) => {
            log::warn!("Ignoring stored preference: {err}");
            SyncOutcome::Failed(err.to_string())
        }
    }
}
