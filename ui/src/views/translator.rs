use dioxus::prelude::*;

use crate::translator::TranslatorView;

#[component]
pub fn Translator() -> Element {
    rsx! {
        section { class: "page page-translator",
            TranslatorView {}
        }
    }
}
