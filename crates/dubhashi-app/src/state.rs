use leptos::prelude::*;

use dubhashi_translator::TranslatorScreen;

/// Which of the two screens is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Start,
    Translator,
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub view: RwSignal<ActiveView>,
    /// The translator screen's entire state. Children receive this through
    /// context and mutate it only from their own event handlers.
    pub translator: RwSignal<TranslatorScreen>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ActiveView::Start),
            translator: RwSignal::new(TranslatorScreen::new()),
        }
    }

    pub fn open_translator(&self) {
        self.view.set(ActiveView::Translator);
    }

    /// Leaving the translator discards its state; nothing survives a close.
    pub fn close_translator(&self) {
        self.translator.set(TranslatorScreen::new());
        self.view.set(ActiveView::Start);
    }
}
