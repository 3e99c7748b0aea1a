use leptos::prelude::*;

use crate::components::start::StartScreen;
use crate::components::translator::Translator;
use crate::state::{ActiveView, AppState};

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    let view = state.view;
    provide_context(state);

    view! {
        <div class="w-full h-screen bg-gradient-to-l from-[#b6f492] to-[#338b93] flex justify-center items-center">
            <div class="w-[90%] max-w-lg bg-[#2d2d2d] rounded-xl shadow-2xl shadow-gray-800 flex flex-col">
                {move || match view.get() {
                    ActiveView::Start => view! { <StartScreen /> }.into_any(),
                    ActiveView::Translator => view! { <Translator /> }.into_any(),
                }}
            </div>
        </div>
    }
}
