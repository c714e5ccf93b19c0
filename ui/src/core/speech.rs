//! Text-to-speech playback as a cancellable task.
//!
//! [`SpeechController`] is the pure playback state; a [`Speaker`] drives the
//! platform engine and reports [`SpeechEvent`]s back, tagged with the utterance id
//! so events from a cancelled utterance cannot flip the state of a newer one.

use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEvent {
    Started(u64),
    Ended(u64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    /// Queued on the engine, start callback not received yet.
    Pending { id: u64 },
    Speaking { id: u64 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechController {
    next_id: u64,
    state: PlaybackState,
}

impl SpeechController {
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Speaking { .. })
    }

    pub fn is_busy(&self) -> bool {
        !matches!(self.state, PlaybackState::Idle)
    }

    /// Queue `text` unless it is blank or something is already queued or playing.
    pub fn start(&mut self, text: &str) -> Option<Utterance> {
        if text.trim().is_empty() || self.is_busy() {
            return None;
        }
        Some(self.enqueue(text))
    }

    /// Cancel whatever is active and queue `text` in its place.
    pub fn interrupt(&mut self, text: &str) -> Option<Utterance> {
        self.stop();
        self.start(text)
    }

    /// Returns whether anything was cancelled.
    pub fn stop(&mut self) -> bool {
        let was_busy = self.is_busy();
        self.state = PlaybackState::Idle;
        was_busy
    }

    pub fn handle(&mut self, event: SpeechEvent) {
        match (event, self.state) {
            (SpeechEvent::Started(id), PlaybackState::Pending { id: current }) if id == current => {
                self.state = PlaybackState::Speaking { id };
            }
            (SpeechEvent::Ended(id), PlaybackState::Pending { id: current })
            | (SpeechEvent::Ended(id), PlaybackState::Speaking { id: current })
                if id == current =>
            {
                self.state = PlaybackState::Idle;
            }
            (event, state) => {
                log::trace!("Ignoring stale speech event {event:?} in state {state:?}");
            }
        }
    }

    fn enqueue(&mut self, text: &str) -> Utterance {
        self.next_id += 1;
        let id = self.next_id;
        self.state = PlaybackState::Pending { id };
        Utterance {
            id,
            text: text.to_string(),
        }
    }
}

pub type SpeechCallback = Rc<dyn Fn(SpeechEvent)>;

/// Platform speech engine.
pub trait Speaker {
    fn speak(&self, utterance: &Utterance, on_event: SpeechCallback);
    fn cancel(&self);
}

/// Browser `speechSynthesis` (also available inside desktop/mobile webviews on web targets).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct WebSpeaker;

#[cfg(target_arch = "wasm32")]
impl Speaker for WebSpeaker {
    fn speak(&self, utterance: &Utterance, on_event: SpeechCallback) {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) else {
            log::warn!("speechSynthesis is not available");
            on_event(SpeechEvent::Ended(utterance.id));
            return;
        };
        let native = match web_sys::SpeechSynthesisUtterance::new_with_text(&utterance.text) {
            Ok(native) => native,
            Err(err) => {
                log::warn!("Could not create utterance: {err:?}");
                on_event(SpeechEvent::Ended(utterance.id));
                return;
            }
        };

        let id = utterance.id;
        let started = on_event.clone();
        let onstart = Closure::once_into_js(move || started(SpeechEvent::Started(id)));
        let ended = on_event.clone();
        let onend = Closure::once_into_js(move || ended(SpeechEvent::Ended(id)));
        let failed = on_event;
        let onerror = Closure::once_into_js(move || failed(SpeechEvent::Ended(id)));

        native.set_onstart(Some(onstart.unchecked_ref()));
        native.set_onend(Some(onend.unchecked_ref()));
        native.set_onerror(Some(onerror.unchecked_ref()));
        synth.speak(&native);
    }

    fn cancel(&self) {
        if let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) {
            synth.cancel();
        }
    }
}

/// Engine for targets without speech synthesis: every utterance ends immediately.
#[derive(Debug, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, utterance: &Utterance, on_event: SpeechCallback) {
        log::warn!("Speech synthesis is not available on this platform");
        on_event(SpeechEvent::Ended(utterance.id));
    }

    fn cancel(&self) {}
}

pub fn platform_speaker() -> Rc<dyn Speaker> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(WebSpeaker)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(SilentSpeaker)
    }
}
