use dioxus::prelude::*;

use crate::auth::login::{self, LoginForm, LoginOutcome};
use crate::auth::CONNECTION_ERROR;
use crate::components::{BackendHandle, LocaleSwitcher, PasswordField};
use crate::core::session::Session;
use crate::core::theme::{self, Theme};
use crate::core::routes;
use crate::t;

#[component]
pub fn Login() -> Element {
    let session = use_context::<Session>();
    let backend = use_context::<BackendHandle>();
    let theme = use_context::<Signal<Theme>>();
    let nav = navigator();

    let mut form = use_signal(LoginForm::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        form.with_mut(LoginForm::begin_submit);
        let credentials = form.read().credentials();
        let backend = backend.clone();
        let session = session.clone();
        let mut form_signal = form;
        let mut theme_signal = theme;

        spawn(async move {
            let outcome = login::submit(&*backend, &credentials).await;
            form_signal.with_mut(|f| f.apply(&outcome));

            let LoginOutcome::Authenticated(success) = outcome else {
                return;
            };
            if let Err(err) = session.sign_in(&success.session_id) {
                log::error!("Could not persist session: {err}");
                form_signal.with_mut(|f| f.error = Some(CONNECTION_ERROR.to_string()));
                return;
            }
            nav.push(routes::WORKSPACE);

            // Outlives this view: the login page unmounts on navigation.
            spawn_forever(async move {
                let outcome =
                    theme::fetch_after_login(&*backend, &success.preference_lookup_id).await;
                if let Some(preferred) = outcome.fetched_theme() {
                    theme_signal.set(preferred);
                }
            });
        });
    };

    let snapshot = form();

    rsx! {
        section { class: "page page-auth",
            div { class: "auth-card",
                div { class: "auth-card__header",
                    div { class: "auth-card__badge", aria_hidden: "true", "👤" }
                    h1 { {t!("auth-title")} }
                    p { class: "auth-card__subtitle", {t!("login-subtitle")} }
                }

                form { class: "auth-card__form", onsubmit: on_submit,
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
                        ontoggle: move |_| form.with_mut(LoginForm::toggle_password),
                    }

                    if let Some(err) = snapshot.error.as_ref() {
                        p { class: "auth-card__error", role: "alert", "{err}" }
                    }

                    button { r#type: "submit", class: "button button--accent button--block",
                        {t!("login-submit")}
                    }

                    p { class: "auth-card__switch",
                        {t!("login-no-account")}
                        " "
                        Link { to: routes::REGISTER, {t!("login-register-link")} }
                    }
                }

                LocaleSwitcher {}
            }
        }
    }
}
