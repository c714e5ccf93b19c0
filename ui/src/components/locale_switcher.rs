use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Language picker. Hidden when only one locale is embedded.
///
/// Writes the global language code signal (provided by `AppShell`) so the keyed
/// app subtree re-renders with the new bundle.
#[component]
pub fn LocaleSwitcher() -> Element {
    let langs = use_signal(i18n::available_languages);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current = lang_code_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(i18n::current_language);

    if langs().len() <= 1 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => log::warn!("Could not switch language to {val}: {err}"),
        }
    };

    rsx! {
        div { class: "locale",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!("nav-language-label")}
            }
            select {
                id: "locale-select",
                class: "locale__select",
                value: "{current}",
                oninput: on_change,
                for code in langs().into_iter() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
