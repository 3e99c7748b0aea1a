use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use dubhashi_translator::{language_name, LanguageSlot, LANGUAGES};

use crate::state::AppState;

/// Source/target language bar with the swap control, plus the picker
/// overlay that commits a catalog entry into whichever slot was tapped.
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let state = expect_context::<AppState>();
    let translator = state.translator;

    let picker_ref = NodeRef::<Div>::new();

    // Dismiss-without-commit: a mousedown anywhere outside the open picker
    // closes it without touching either language. The listener must come off
    // again on unmount; otherwise every open/close cycle leaves a stale
    // closure holding the previous mount's picker_ref.
    let document = web_sys::window().unwrap().document().unwrap();
    let mousedown_handler = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        if !translator.with_untracked(|s| s.picker_open()) {
            return;
        }
        let inside = match (picker_ref.get_untracked(), event.target()) {
            (Some(picker), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .map(|node| picker.contains(Some(node)))
                .unwrap_or(false),
            _ => false,
        };
        if !inside {
            translator.update(|s| s.dismiss_picker());
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    document
        .add_event_listener_with_callback("mousedown", mousedown_handler.as_ref().unchecked_ref())
        .unwrap();
    let listener = SendWrapper::new((document, mousedown_handler));
    on_cleanup(move || {
        let (document, handler) = listener.take();
        let _ = document
            .remove_event_listener_with_callback("mousedown", handler.as_ref().unchecked_ref());
    });

    view! {
        <div class="flex items-center justify-center gap-4">
            <button
                class="language cursor-pointer text-gray-200"
                on:click=move |_| translator.update(|s| s.select_slot(LanguageSlot::Source))
            >
                {move || translator.with(|s| language_name(s.source_language()))}
            </button>

            <button
                class="text-gray-300 text-xl cursor-pointer"
                title="Swap languages"
                on:click=move |_| translator.update(|s| s.swap())
            >
                "\u{21C4}"
            </button>

            <button
                class="language cursor-pointer text-gray-200"
                on:click=move |_| translator.update(|s| s.select_slot(LanguageSlot::Target))
            >
                {move || translator.with(|s| language_name(s.target_language()))}
            </button>
        </div>

        {move || {
            translator.with(|s| s.picker_open()).then(|| {
                view! {
                    <div
                        class="w-[calc(100%-4rem)] h-[calc(100%-9rem)] bg-gradient-to-r from-[#b6f492] to-[#338b93] absolute top-32 left-8 z-10 rounded shadow-lg p-4 overflow-y-scroll"
                        node_ref=picker_ref
                    >
                        <ul>
                            {LANGUAGES.iter().map(|(code, name)| {
                                let code = *code;
                                let name = *name;
                                view! {
                                    <li
                                        class="cursor-pointer hover:bg-[#10646b] transition duration-200 p-2 rounded"
                                        on:click=move |_| translator.update(|s| s.choose(code))
                                    >
                                        {name}
                                    </li>
                                }
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                }
            })
        }}
    }
}
