use leptos::prelude::*;

use crate::bridges::fetch_translate;
use crate::components::input_panel::InputPanel;
use crate::components::language_selector::LanguageSelector;
use crate::components::output_panel::OutputPanel;
use crate::state::AppState;

/// The translator screen: language bar, input and output panels, and the
/// translate trigger between them.
#[component]
pub fn Translator() -> impl IntoView {
    let state = expect_context::<AppState>();
    let translator = state.translator;

    let translate = move |_| fetch_translate::request_translation(translator);

    view! {
        <div class="w-full flex flex-col gap-y-4 justify-center items-center px-6 sm:px-8 pt-12 pb-6 relative">
            <button
                class="absolute top-4 right-4 text-gray-300"
                title="Close"
                on:click=move |_| state.close_translator()
            >
                "\u{2715}"
            </button>

            <LanguageSelector />
            <InputPanel />

            <button
                class="w-12 h-12 bg-gradient-to-r from-[#b6f492] to-[#338b93] rounded-full text-2xl text-gray-600 flex justify-center items-center active:translate-y-[1px]"
                title="Translate"
                on:click=translate
            >
                "\u{2193}"
            </button>

            <OutputPanel />
        </div>
    }
}
