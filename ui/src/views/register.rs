use dioxus::prelude::*;

use crate::auth::register::{self, RegisterOutcome, RegistrationForm, REGISTER_SUCCESS};
use crate::components::{BackendHandle, LocaleSwitcher, PasswordField};
use crate::core::{platform, routes};
use crate::t;

#[component]
pub fn Register() -> Element {
    let backend = use_context::<BackendHandle>();
    let nav = navigator();

    let mut form = use_signal(RegistrationForm::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        form.with_mut(RegistrationForm::begin_submit);
        let registration = form.read().registration();
        let backend = backend.clone();
        let mut form_signal = form;

        spawn(async move {
            let outcome = register::submit(&*backend, &registration).await;
            form_signal.with_mut(|f| f.apply(&outcome));
            if outcome == RegisterOutcome::Registered {
                platform::alert(REGISTER_SUCCESS);
                nav.push(routes::LOGIN);
            }
        });
    };

    let snapshot = form();

    rsx! {
        section { class: "page page-auth",
            div { class: "auth-card",
                div { class: "auth-card__header",
                    div { class: "auth-card__badge", aria_hidden: "true", "👤" }
                    h1 { {t!("auth-title")} }
                    p { class: "auth-card__subtitle", {t!("register-subtitle")} }
                }

                form { class: "auth-card__form", onsubmit: on_submit,
                    div { class: "field",
                        input {
                            class: "input",
                            r#type: "text",
                            name: "nombre",
                            placeholder: t!("field-name-placeholder"),
                            value: "{snapshot.name}",
                            oninput: move |evt| form.with_mut(|f| f.name = evt.value()),
                        }
                    }
                    div { class: "field",
                        input {
                            class: "input",
                            r#type: "email",
                            name: "email",
                            placeholder: t!("field-email-placeholder"),
                            value: "{snapshot.email}",
                            oninput: move |evt| form.with_mut(|f| f.email = evt.value()),
                        }
                    }

                    PasswordField {
                        value: snapshot.password.clone(),
                        visible: snapshot.show_password,
                        oninput: move |value| form.with_mut(|f| f.password = value),
                        ontoggle: move |_| form.with_mut(RegistrationForm::toggle_password),
                    }

                    if let Some(err) = snapshot.error.as_ref() {
                        p { class: "auth-card__error", role: "alert", "{err}" }
                    }

                    button { r#type: "submit", class: "button button--accent button--block",
                        {t!("register-submit")}
                    }

                    p { class: "auth-card__switch",
                        {t!("register-have-account")}
                        " "
                        Link { to: routes::LOGIN, {t!("register-login-link")} }
                    }
                }

                LocaleSwitcher {}
            }
        }
    }
}
