use crate::t;
use dioxus::prelude::*;

/// Password input with a show/hide toggle. Visibility is presentation only.
#[component]
pub fn PasswordField(
    value: String,
    visible: bool,
    oninput: EventHandler<String>,
    ontoggle: EventHandler,
) -> Element {
    let input_type = if visible { "text" } else { "password" };
    let toggle_label = if visible {
        t!("password-hide")
    } else {
        t!("password-show")
    };

    rsx! {
        div { class: "field field--with-action",
            input {
                class: "input",
                r#type: input_type,
                name: "password",
                placeholder: t!("field-password-placeholder"),
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
            button {
                r#type: "button",
                class: "field__action",
                aria_label: "{toggle_label}",
                onclick: move |_| ontoggle.call(()),
                if visible { "🙈" } else { "👁" }
            }
        }
    }
}
