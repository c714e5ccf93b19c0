use std::ops::Deref;
use std::rc::Rc;

use api::{ApiClient, ApiConfig, Backend};
use dioxus::prelude::*;

use crate::core::platform;
use crate::core::session::Session;
use crate::core::speech::{self, Speaker};
use crate::core::theme::Theme;
use crate::i18n;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Backend shared with every view through context.
#[derive(Clone)]
pub struct BackendHandle(pub Rc<dyn Backend>);

impl Deref for BackendHandle {
    type Target = dyn Backend;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[derive(Clone)]
pub struct SpeakerHandle(pub Rc<dyn Speaker>);

impl Deref for SpeakerHandle {
    type Target = dyn Speaker;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Root of every platform: installs the session, backend, speech engine, theme and
/// language contexts, then renders the platform router as `children`.
#[component]
pub fn AppShell(children: Element) -> Element {
    i18n::init();

    use_context_provider(Session::platform_default);
    use_context_provider(|| {
        log::info!("Starting DigitalForge ({})", platform::platform_name());
        BackendHandle(Rc::new(ApiClient::new(ApiConfig::from_env())))
    });
    use_context_provider(|| SpeakerHandle(speech::platform_speaker()));

    let theme = use_signal(Theme::default);
    use_context_provider(|| theme);

    // Global language code; the locale switcher writes it, keyed subtree remounts on change.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div {
            key: "{lang_code()}",
            class: "app {theme().css_class()}",
            {children}
        }
    }
}
