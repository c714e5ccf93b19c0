//! Platform glue: logging setup, blocking alerts and wall-clock time.

use time::OffsetDateTime;

/// Install the `log` backend for this target. Safe to call more than once.
///
/// Browser builds log to the devtools console and route panics there too; native
/// builds honour `RUST_LOG` and default to `info`.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::debug!("console logger already installed");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        if env_logger::Builder::from_env(env).try_init().is_err() {
            log::debug!("logger already installed");
        }
    }
}

/// Blocking `window.alert` on web; the webview's `alert()` elsewhere.
///
/// Must be called from inside the Dioxus runtime on native targets.
pub fn alert(message: &str) {
    log::info!("alert: {message}");

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("window.alert failed: {err:?}");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match alert_script(message) {
            Ok(script) => {
                let eval = dioxus::prelude::document::eval(&script);
                dioxus::prelude::spawn(async move {
                    if let Err(err) = eval.await {
                        log::warn!("alert() failed in the webview: {err:?}");
                    }
                });
            }
            Err(err) => log::warn!("Could not encode alert message: {err}"),
        }
    }
}

/// JavaScript that shows `message` in a blocking `alert()`, string-escaped.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn alert_script(message: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(message).map(|literal| format!("alert({literal});"))
}

/// Milliseconds since the Unix epoch (`Date.now()` equivalent).
pub fn unix_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

pub fn platform_name() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "web"
    } else if cfg!(any(target_os = "android", target_os = "ios")) {
        "mobile"
    } else {
        "desktop"
    }
}
