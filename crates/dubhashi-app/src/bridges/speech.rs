use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::SpeechSynthesisUtterance;

use dubhashi_translator::{SpeechEvent, SpeechRecognizer, SpeechSynthesizer};

type EventSink = Rc<RefCell<Box<dyn FnMut(SpeechEvent)>>>;

/// Recognizer over the Web Speech API. The constructor is looked up through
/// `Reflect` because Chromium only exposes it under the `webkit` prefix.
pub struct WebSpeechRecognizer;

impl WebSpeechRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn constructor() -> Option<Function> {
        let window = web_sys::window()?;
        for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
            if let Ok(value) = Reflect::get(&window, &JsValue::from_str(name)) {
                if let Some(ctor) = value.dyn_ref::<Function>() {
                    return Some(ctor.clone());
                }
            }
        }
        None
    }
}

impl Default for WebSpeechRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn set_property(target: &JsValue, name: &str, value: &JsValue) -> Result<(), String> {
    Reflect::set(target, &JsValue::from_str(name), value)
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}

fn attach_handler(
    target: &JsValue,
    name: &str,
    handler: Closure<dyn FnMut(JsValue)>,
) -> Result<(), String> {
    set_property(target, name, handler.as_ref())?;
    handler.forget();
    Ok(())
}

/// `event.results[0][0].transcript`, the single best alternative of the
/// first (and only, with interim results off) result.
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let first = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&first, 0).ok()?;
    Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}

impl SpeechRecognizer for WebSpeechRecognizer {
    fn is_supported(&self) -> bool {
        Self::constructor().is_some()
    }

    fn start(
        &self,
        language: &str,
        on_event: Box<dyn FnMut(SpeechEvent) + 'static>,
    ) -> Result<(), String> {
        let ctor = Self::constructor().ok_or("speech recognition unavailable")?;
        let recognition: JsValue = Reflect::construct(&ctor, &Array::new())
            .map_err(|e| format!("{e:?}"))?
            .into();

        set_property(&recognition, "lang", &JsValue::from_str(language))?;
        set_property(&recognition, "interimResults", &JsValue::FALSE)?;
        set_property(&recognition, "maxAlternatives", &JsValue::from_f64(1.0))?;

        let sink: EventSink = Rc::new(RefCell::new(on_event));

        let onstart = {
            let sink = sink.clone();
            Closure::wrap(Box::new(move |_: JsValue| {
                (sink.borrow_mut())(SpeechEvent::Started);
            }) as Box<dyn FnMut(JsValue)>)
        };
        attach_handler(&recognition, "onstart", onstart)?;

        let onresult = {
            let sink = sink.clone();
            Closure::wrap(Box::new(move |event: JsValue| {
                if let Some(transcript) = first_transcript(&event) {
                    (sink.borrow_mut())(SpeechEvent::Transcript(transcript));
                }
            }) as Box<dyn FnMut(JsValue)>)
        };
        attach_handler(&recognition, "onresult", onresult)?;

        let onerror = {
            let sink = sink.clone();
            Closure::wrap(Box::new(move |event: JsValue| {
                let code = Reflect::get(&event, &JsValue::from_str("error"))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_else(|| "unknown".to_string());
                (sink.borrow_mut())(SpeechEvent::Error(code));
            }) as Box<dyn FnMut(JsValue)>)
        };
        attach_handler(&recognition, "onerror", onerror)?;

        let onend = {
            let sink = sink.clone();
            Closure::wrap(Box::new(move |_: JsValue| {
                (sink.borrow_mut())(SpeechEvent::Ended);
            }) as Box<dyn FnMut(JsValue)>)
        };
        attach_handler(&recognition, "onend", onend)?;

        let start = Reflect::get(&recognition, &JsValue::from_str("start"))
            .map_err(|e| format!("{e:?}"))?;
        let start: &Function = start.dyn_ref().ok_or("start is not callable")?;
        start.call0(&recognition).map_err(|e| format!("{e:?}"))?;
        Ok(())
    }
}

/// Text-to-speech over `window.speechSynthesis`.
pub struct WebSpeechSynthesizer;

impl SpeechSynthesizer for WebSpeechSynthesizer {
    fn speak(&self, text: &str, language: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let synthesis = window.speech_synthesis().map_err(|e| format!("{e:?}"))?;
        let utterance =
            SpeechSynthesisUtterance::new_with_text(text).map_err(|e| format!("{e:?}"))?;
        utterance.set_lang(language);
        synthesis.speak(&utterance);
        Ok(())
    }
}
