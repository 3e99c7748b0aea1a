use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use dubhashi_translator::{SpeechRecognizer, MAX_CHARS};

use crate::bridges::fetch_translate;
use crate::bridges::speech::WebSpeechRecognizer;
use crate::state::AppState;

/// Source-text entry: capped textarea, character counter and the mic button
/// for spoken input.
#[component]
pub fn InputPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let translator = state.translator;

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let accepted = translator.try_update(|s| s.set_text(&value)).unwrap_or(false);
        if !accepted {
            // Rejected mutation: snap the DOM field back to the retained value.
            if let Some(area) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
            {
                area.set_value(&translator.with_untracked(|s| s.input_text().to_string()));
            }
        }
    };

    // Enter translates instead of inserting a newline.
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            fetch_translate::request_translation(translator);
        }
    };

    let on_mic = move |_| {
        let recognizer = WebSpeechRecognizer::new();
        if !recognizer.is_supported() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .alert_with_message("Speech recognition is not supported in this browser.");
            }
            return;
        }
        let language = translator.with_untracked(|s| s.source_language().to_string());
        let started = recognizer.start(
            &language,
            Box::new(move |event| translator.update(|s| s.apply_speech_event(event))),
        );
        if let Err(err) = started {
            log::error!("failed to start speech recognition: {err}");
        }
    };

    view! {
        <div class="w-full relative">
            <textarea
                class="textarea w-full text-gray-200 border-white"
                rows=4
                prop:value=move || translator.with(|s| s.input_text().to_string())
                on:input=on_input
                on:keydown=on_keydown
            ></textarea>

            <div class="absolute bottom-2 right-4 text-gray-400 text-xs">
                {move || translator.with(|s| format!("{}/{}", s.char_count(), MAX_CHARS))}
            </div>

            <button
                class=move || {
                    if translator.with(|s| s.is_listening()) {
                        "absolute bottom-2 left-2 text-green-400 animate-pulse"
                    } else {
                        "absolute bottom-2 left-2 text-gray-400"
                    }
                }
                title="Speak"
                on:click=on_mic
            >
                "\u{1F399}"
            </button>
        </div>
    }
}
