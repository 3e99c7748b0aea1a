use leptos::prelude::*;

use crate::bridges::speech::WebSpeechSynthesizer;
use crate::state::AppState;

/// Read-only translation output with the play button.
#[component]
pub fn OutputPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let translator = state.translator;

    let speak = move |_| {
        translator.with_untracked(|s| s.speak(&WebSpeechSynthesizer));
    };

    view! {
        <div class="w-full relative">
            <textarea
                class="textarea w-full text-[#b6f492] border-white"
                rows=4
                readonly=true
                prop:value=move || translator.with(|s| s.translated_text().to_string())
            ></textarea>

            <button
                class="absolute bottom-2 left-2 text-[#b6f492]"
                title="Play translation"
                on:click=speak
            >
                "\u{1F50A}"
            </button>
        </div>
    }
}
