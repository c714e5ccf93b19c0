//! Localization for `digitalforge-ui`.
//!
//! Bundles are Fluent files embedded at compile time:
//! ```text
//! i18n.toml
//! i18n/
//!   es-ES/digitalforge-ui.ftl   (fallback, product language)
//!   en-US/digitalforge-ui.ftl
//! ```
//!
//! Call [`init`] once at startup (it is idempotent), then look messages up with
//! the [`t!`](crate::t) macro, which routes through the shared [`LOADER`] and
//! gets compile-time key checking from `i18n-embed-fl`.
//!
//! Messages the backend contract pins to exact Spanish text (error banners,
//! alerts, the date fallback) are constants in their modules, not Fluent keys.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup through the shared loader.
///
/// ```ignore
/// t!("logout")
/// t!("image-alt", index = 3)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; every locale folder holds `{DOMAIN}.ftl`. Must match
/// `domain` in `i18n.toml`, which `fl!` reads at compile time.
const DOMAIN: &str = "digitalforge-ui";

/// Fallback locale. Must match `fallback_language` in `i18n.toml`.
pub const FALLBACK_LANGUAGE: &str = "es-ES";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            log::warn!("Failed selecting languages ({err}); continuing with {FALLBACK_LANGUAGE}");
        }
    });
}

/// Switch language at runtime. Unparsable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        log::debug!("Ignoring unparsable language tag {tag:?}");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language currently serving lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded locale tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
