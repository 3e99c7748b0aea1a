use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Response;

use dubhashi_translator::{
    parse_translation, TranslateError, TranslationRequest, TranslationService, TranslatorScreen,
};

/// Translation transport over the browser's `fetch`.
pub struct MyMemoryClient;

impl TranslationService for MyMemoryClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let window = web_sys::window()
            .ok_or_else(|| TranslateError::Transport("no window".to_string()))?;

        let response_js = JsFuture::from(window.fetch_with_str(&request.endpoint_url()))
            .await
            .map_err(|e| TranslateError::Transport(format!("{e:?}")))?;
        let response: Response = response_js
            .dyn_into()
            .map_err(|_| TranslateError::Transport("not a Response".to_string()))?;

        if !response.ok() {
            return Err(TranslateError::Status(response.status()));
        }

        let body_js = JsFuture::from(
            response
                .text()
                .map_err(|e| TranslateError::Transport(format!("{e:?}")))?,
        )
        .await
        .map_err(|e| TranslateError::Transport(format!("{e:?}")))?;
        let body = body_js
            .as_string()
            .ok_or_else(|| TranslateError::Transport("body is not text".to_string()))?;

        parse_translation(&body)
    }
}

/// Kicks off one translation for the screen's current input. Empty input
/// short-circuits inside the state machine and never reaches the network.
/// The response is applied only if no newer request superseded it.
pub fn request_translation(translator: RwSignal<TranslatorScreen>) {
    let Some(request) = translator.try_update(|s| s.begin_translation()).flatten() else {
        return;
    };
    spawn_local(async move {
        let generation = request.generation;
        let outcome = MyMemoryClient.translate(&request).await;
        translator.update(|s| s.apply_translation(generation, outcome));
    });
}
