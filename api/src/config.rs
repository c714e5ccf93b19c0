//! Endpoint configuration.

/// Local prediction service address used when nothing else is configured.
pub const DEFAULT_PREDICT_URL: &str = "http://localhost:62089/predict-sequence";

/// Backend origin used by native shells when nothing else is configured.
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_NATIVE_BASE_URL: &str = "http://localhost:3000";

const BASE_URL_VAR: &str = "DIGITALFORGE_API_BASE";
const PREDICT_URL_VAR: &str = "DIGITALFORGE_PREDICT_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin that `/api/...` paths are resolved against (no trailing slash).
    pub base_url: String,
    /// Full URL of the sign prediction endpoint.
    pub predict_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, predict_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            predict_url: predict_url.into(),
        }
    }

    /// Resolve configuration for the current platform.
    ///
    /// Native builds read `DIGITALFORGE_API_BASE` / `DIGITALFORGE_PREDICT_URL` at run time
    /// first; values baked in at build time come next, then the platform default.
    pub fn from_env() -> Self {
        let base_url = runtime_var(BASE_URL_VAR)
            .or_else(|| option_env!("DIGITALFORGE_API_BASE").map(str::to_string))
            .unwrap_or_else(default_base_url);
        let predict_url = runtime_var(PREDICT_URL_VAR)
            .or_else(|| option_env!("DIGITALFORGE_PREDICT_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_PREDICT_URL.to_string());

        log::debug!("API base {base_url}, prediction endpoint {predict_url}");
        Self::new(base_url, predict_url)
    }

    /// Absolute URL for a backend path such as `/api/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_name: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn default_base_url() -> String {
    // Relative `/api` paths in the browser resolve against the page origin.
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> String {
    DEFAULT_NATIVE_BASE_URL.to_string()
}
