use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::components::{BackendHandle, SpeakerHandle};
use crate::core::session::Session;
use crate::core::speech::{SpeechCallback, SpeechController, SpeechEvent};
use crate::core::theme::{self, Theme};
use crate::core::platform;
use crate::t;

use super::engine::{self, TranslatorState, PLACEHOLDER_IMAGE, SAVE_FAILURE, SAVE_SUCCESS};
use super::history::{self, HistoryRow};

#[derive(Debug, Clone, PartialEq)]
enum TranslatorEvent {
    Speak,
    Interrupt,
    StopSpeech,
    Speech(SpeechEvent),
}

#[component]
pub fn TranslatorView() -> Element {
    let session = use_context::<Session>();
    let backend = use_context::<BackendHandle>();
    let speaker = use_context::<SpeakerHandle>();
    let mut theme = use_context::<Signal<Theme>>();
    let nav = navigator();

    let mut state = use_signal(TranslatorState::default);
    let speech = use_signal(SpeechController::default);

    // Mount: guard the route, then pull the stored theme for this user.
    {
        let session = session.clone();
        let backend = backend.clone();
        use_effect(move || {
            let user_id = match engine::workspace_entry(&session) {
                Ok(user_id) => user_id,
                Err(route) => {
                    nav.push(route);
                    return;
                }
            };
            let backend = backend.clone();
            spawn(async move {
                let outcome = theme::fetch_for_workspace(&*backend, &user_id).await;
                if let Some(preferred) = outcome.fetched_theme() {
                    theme.set(preferred);
                }
            });
        });
    }

    let sender_slot: Rc<RefCell<Option<UnboundedSender<TranslatorEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let speaker = speaker.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<TranslatorEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let speaker = speaker.clone();
            let mut speech_signal = speech;
            let state_signal = state;

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        TranslatorEvent::Speak | TranslatorEvent::Interrupt => {
                            let text = state_signal.with(|s| s.result.clone());
                            let queued = speech_signal.with_mut(|ctl| {
                                if event == TranslatorEvent::Interrupt {
                                    ctl.interrupt(&text)
                                } else {
                                    ctl.start(&text)
                                }
                            });
                            match queued {
                                Some(utterance) => {
                                    if event == TranslatorEvent::Interrupt {
                                        speaker.cancel();
                                    }
                                    speaker.speak(&utterance, speech_callback(sender_slot.clone()));
                                }
                                None => log::debug!("Speech request ignored"),
                            }
                        }
                        TranslatorEvent::StopSpeech => {
                            if speech_signal.with_mut(SpeechController::stop) {
                                speaker.cancel();
                            }
                        }
                        TranslatorEvent::Speech(speech_event) => {
                            speech_signal.with_mut(|ctl| ctl.handle(speech_event));
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    {
        let speaker = speaker.clone();
        use_drop(move || speaker.cancel());
    }

    let toggle_theme = {
        let session = session.clone();
        let backend = backend.clone();
        move |_: MouseEvent| {
            let next = theme().toggled();
            theme.set(next);
            let user_id = session.user_id();
            let backend = backend.clone();
            spawn(async move {
                theme::persist(&*backend, user_id.as_deref(), next).await;
            });
        }
    };

    let logout = {
        let session = session.clone();
        let speaker = speaker.clone();
        move |_: MouseEvent| {
            speaker.cancel();
            nav.push(engine::logout(&session));
        }
    };

    let translate = {
        let backend = backend.clone();
        move |_: MouseEvent| {
            let Some(paths) = state.with_mut(TranslatorState::begin_translate) else {
                return;
            };
            let backend = backend.clone();
            spawn(async move {
                let outcome = engine::translate(&*backend, &paths).await;
                state.with_mut(|s| s.finish_translate(outcome));
            });
        }
    };

    let load_history = {
        let session = session.clone();
        let backend = backend.clone();
        move |_: MouseEvent| {
            let Some(user_id) = session.user_id() else {
                return;
            };
            let backend = backend.clone();
            spawn(async move {
                if let Some(records) = engine::load_history(&*backend, &user_id).await {
                    state.with_mut(|s| s.show_history(records));
                }
            });
        }
    };

    let save = {
        let session = session.clone();
        let backend = backend.clone();
        move |_: MouseEvent| {
            let user_id = session.user_id();
            let Some(request) = state
                .read()
                .save_request(user_id.as_deref(), platform::unix_millis())
            else {
                return;
            };
            let backend = backend.clone();
            spawn(async move {
                match engine::save(&*backend, &request).await {
                    Ok(()) => {
                        platform::alert(SAVE_SUCCESS);
                        if let Some(records) =
                            engine::load_history(&*backend, &request.user_id).await
                        {
                            state.with_mut(|s| s.show_history(records));
                        }
                    }
                    Err(err) => {
                        log::error!("Error al guardar traducción: {err}");
                        platform::alert(SAVE_FAILURE);
                    }
                }
            });
        }
    };

    let speak = {
        let coroutine = coroutine.clone();
        move |_: MouseEvent| coroutine.send(TranslatorEvent::Speak)
    };
    let interrupt = {
        let coroutine = coroutine.clone();
        move |_: MouseEvent| coroutine.send(TranslatorEvent::Interrupt)
    };
    let stop_speech = {
        let coroutine = coroutine.clone();
        move |_: MouseEvent| coroutine.send(TranslatorEvent::StopSpeech)
    };

    let snapshot = state();
    let playback = speech();
    let current_theme = theme();
    let theme_label = match current_theme {
        Theme::Light => t!("theme-toggle-dark"),
        Theme::Dark => t!("theme-toggle-light"),
    };
    let history_rows = history::rows(&snapshot.history);

    rsx! {
        article { class: "translator",
            header { class: "translator__header",
                h1 { {t!("translator-title", version = env!("CARGO_PKG_VERSION"))} }
                div { class: "translator__header-actions",
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: toggle_theme,
                        "{theme_label}"
                    }
                    button {
                        class: "button button--danger",
                        r#type: "button",
                        onclick: logout,
                        {t!("logout")}
                    }
                }
            }

            section { class: "translator__inputs",
                div { class: "field field--with-action",
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: t!("image-url-placeholder"),
                        value: "{snapshot.draft_path}",
                        oninput: move |evt| state.with_mut(|s| s.draft_path = evt.value()),
                    }
                    button {
                        class: "button button--accent",
                        r#type: "button",
                        disabled: !snapshot.can_add_image(),
                        onclick: move |_| {
                            state.with_mut(|s| {
                                s.add_image();
                            });
                        },
                        {t!("image-add")}
                    }
                }

                div { class: "image-grid",
                    for (index, image) in snapshot.images.iter().cloned().enumerate() {
                        ImageCard {
                            key: "{index}-{image.path}",
                            index,
                            preview: image.preview.clone(),
                            onremove: move |idx: usize| {
                                state.with_mut(|s| {
                                    s.remove_image(idx);
                                });
                            },
                        }
                    }
                }

                div { class: "translator__actions",
                    button {
                        class: "button button--accent",
                        r#type: "button",
                        disabled: !snapshot.can_translate(),
                        onclick: translate,
                        if snapshot.is_translating {
                            {t!("translating")}
                        } else {
                            {t!("translate")}
                        }
                    }
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        aria_label: t!("clear-all-label"),
                        onclick: move |_| state.with_mut(TranslatorState::reset),
                        {t!("clear-all")}
                    }
                }
            }

            section { class: "translator__result",
                h2 { {t!("result-heading")} }
                if let Some(err) = snapshot.error.as_ref() {
                    p { class: "translator__error", role: "alert", "{err}" }
                }
                div { class: "result-box",
                    if snapshot.has_result() {
                        p { class: "result-box__text", "{snapshot.result}" }
                    } else {
                        p { class: "result-box__placeholder", {t!("result-placeholder")} }
                    }
                }

                div { class: "translator__actions",
                    if playback.is_busy() {
                        button {
                            class: "button button--accent",
                            r#type: "button",
                            disabled: !snapshot.has_result(),
                            onclick: interrupt,
                            if playback.is_playing() {
                                {t!("playing-audio")}
                            } else {
                                {t!("play-audio")}
                            }
                        }
                        button {
                            class: "button button--danger",
                            r#type: "button",
                            onclick: stop_speech,
                            {t!("stop-audio")}
                        }
                    } else {
                        button {
                            class: "button button--accent",
                            r#type: "button",
                            disabled: !snapshot.has_result(),
                            onclick: speak,
                            {t!("play-audio")}
                        }
                    }
                    button {
                        class: "button button--success",
                        r#type: "button",
                        aria_label: t!("save-label"),
                        disabled: !snapshot.has_result(),
                        onclick: save,
                        {t!("save")}
                    }
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: load_history,
                        {t!("history-open")}
                    }
                }
            }

            if snapshot.show_history {
                section { class: "history",
                    h2 { {t!("history-heading")} }
                    {render_history(&history_rows)}
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_| state.with_mut(TranslatorState::close_history),
                        {t!("history-close")}
                    }
                }
            }
        }
    }
}

#[component]
fn ImageCard(index: usize, preview: String, onremove: EventHandler<usize>) -> Element {
    let mut src = use_signal(|| preview.clone());
    let position = index + 1;

    rsx! {
        figure { class: "image-card",
            img {
                class: "image-card__img",
                src: "{src}",
                alt: t!("image-alt", index = position),
                onerror: move |_| {
                    if src() != PLACEHOLDER_IMAGE {
                        src.set(PLACEHOLDER_IMAGE.to_string());
                    }
                },
            }
            button {
                class: "image-card__remove",
                r#type: "button",
                aria_label: t!("image-remove", index = position),
                onclick: move |_| onremove.call(index),
                "✕"
            }
        }
    }
}

fn render_history(rows: &[HistoryRow]) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "history__empty", {t!("history-empty")} }
        };
    }

    rsx! {
        table { class: "history__table",
            thead {
                tr {
                    th { {t!("history-col-id")} }
                    th { {t!("history-col-text")} }
                    th { {t!("history-col-audio")} }
                    th { {t!("history-col-date")} }
                }
            }
            tbody {
                for row in rows.iter() {
                    tr { key: "{row.id}",
                        td { "{row.id}" }
                        td { "{row.text}" }
                        td { "{row.audio_path}" }
                        td { "{row.date}" }
                    }
                }
            }
        }
    }
}

fn speech_callback(sender_slot: Rc<RefCell<Option<UnboundedSender<TranslatorEvent>>>>) -> SpeechCallback {
    Rc::new(move |event| {
        if let Some(sender) = sender_slot.borrow().as_ref() {
            let _ = sender.unbounded_send(TranslatorEvent::Speech(event));
        }
    })
}
