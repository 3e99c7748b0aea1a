use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub fn StartScreen() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="flex flex-col items-center gap-6 px-8 py-16">
            <h1 class="text-4xl font-bold bg-gradient-to-r from-[#b6f492] to-[#338b93] bg-clip-text text-transparent">
                "Dubhashi"
            </h1>
            <p class="text-sm text-gray-400 text-center">
                "Type or speak, pick your languages, translate."
            </p>
            <button
                class="px-6 py-3 rounded-full bg-gradient-to-r from-[#b6f492] to-[#338b93] text-gray-800 font-semibold active:translate-y-[1px]"
                on:click=move |_| state.open_translator()
            >
                "Start Translating"
            </button>
        </div>
    }
}
