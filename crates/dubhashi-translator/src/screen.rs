//! State machine for the translator screen.

use crate::service::{TranslateError, TranslationRequest, TRANSLATION_FAILED};
use crate::speech::{SpeechEvent, SpeechSynthesizer};

/// Ceiling on typed input length, in characters.
pub const MAX_CHARS: usize = 200;

const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSlot {
    Source,
    Target,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorScreen {
    source_language: String,
    target_language: String,
    input_text: String,
    translated_text: String,
    listening: bool,
    active_slot: Option<LanguageSlot>,
    picker_open: bool,
    generation: u64,
}

impl Default for TranslatorScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslatorScreen {
    pub fn new() -> Self {
        Self {
            source_language: DEFAULT_LANGUAGE.to_string(),
            target_language: DEFAULT_LANGUAGE.to_string(),
            input_text: String::new(),
            translated_text: String::new(),
            listening: false,
            active_slot: None,
            picker_open: false,
            generation: 0,
        }
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn active_slot(&self) -> Option<LanguageSlot> {
        self.active_slot
    }

    pub fn char_count(&self) -> usize {
        self.input_text.chars().count()
    }

    pub fn select_slot(&mut self, slot: LanguageSlot) {
        self.active_slot = Some(slot);
        self.picker_open = true;
    }

    /// Commits `code` to the active slot (none active: no language changes).
    /// The picker closes either way.
    pub fn choose(&mut self, code: &str) {
        match self.active_slot {
            Some(LanguageSlot::Source) => self.source_language = code.to_string(),
            Some(LanguageSlot::Target) => self.target_language = code.to_string(),
            None => {}
        }
        self.picker_open = false;
    }

    pub fn dismiss_picker(&mut self) {
        self.picker_open = false;
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
    }

    /// An over-long value is dropped whole (the field keeps its prior
    /// contents, no truncated prefix). Returns whether it was accepted.
    pub fn set_text(&mut self, value: &str) -> bool {
        if value.chars().count() > MAX_CHARS {
            return false;
        }
        self.input_text = value.to_string();
        true
    }

    /// A transcript replaces the input as-is; the typed-path length ceiling
    /// does not apply here.
    pub fn apply_speech_event(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Started => self.listening = true,
            SpeechEvent::Transcript(transcript) => {
                self.input_text = transcript;
            }
            SpeechEvent::Error(code) => {
                log::error!("speech recognition error: {code}");
                self.listening = false;
            }
            SpeechEvent::Ended => self.listening = false,
        }
    }

    /// Empty or whitespace-only input short-circuits: the output clears and
    /// no request is issued.
    pub fn begin_translation(&mut self) -> Option<TranslationRequest> {
        if self.input_text.trim().is_empty() {
            self.translated_text.clear();
            return None;
        }
        self.generation += 1;
        Some(TranslationRequest {
            text: self.input_text.clone(),
            source: self.source_language.clone(),
            target: self.target_language.clone(),
            generation: self.generation,
        })
    }

    /// Responses from superseded requests are dropped, so the latest issued
    /// request wins regardless of arrival order.
    pub fn apply_translation(
        &mut self,
        generation: u64,
        outcome: Result<String, TranslateError>,
    ) {
        if generation != self.generation {
            log::debug!("dropping stale translation response (generation {generation})");
            return;
        }
        match outcome {
            Ok(translated) => self.translated_text = translated,
            Err(err) => {
                log::error!("translation failed: {err}");
                self.translated_text = TRANSLATION_FAILED.to_string();
            }
        }
    }

    pub fn speak<S: SpeechSynthesizer>(&self, voice: &S) {
        if self.translated_text.is_empty() {
            return;
        }
        if let Err(err) = voice.speak(&self.translated_text, &self.target_language) {
            log::error!("speech synthesis failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::TranslationService;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Service double that returns a canned outcome and records each call.
    struct ScriptedService {
        outcome: Result<String, String>,
        calls: RefCell<Vec<TranslationRequest>>,
    }

    impl ScriptedService {
        fn ok(text: &str) -> Self {
            Self {
                outcome: Ok(text.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                outcome: Err("connection refused".to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl TranslationService for ScriptedService {
        async fn translate(
            &self,
            request: &TranslationRequest,
        ) -> Result<String, TranslateError> {
            self.calls.borrow_mut().push(request.clone());
            self.outcome
                .clone()
                .map_err(TranslateError::Transport)
        }
    }

    struct RecordingVoice {
        spoken: RefCell<Vec<(String, String)>>,
    }

    impl RecordingVoice {
        fn new() -> Self {
            Self {
                spoken: RefCell::new(Vec::new()),
            }
        }
    }

    impl SpeechSynthesizer for RecordingVoice {
        fn speak(&self, text: &str, language: &str) -> Result<(), String> {
            self.spoken
                .borrow_mut()
                .push((text.to_string(), language.to_string()));
            Ok(())
        }
    }

    /// Runs both halves of a translation against `service`, the way the UI
    /// handler does.
    fn translate_with<S: TranslationService>(screen: &mut TranslatorScreen, service: &S) {
        let Some(request) = screen.begin_translation() else {
            return;
        };
        let outcome = block_on(service.translate(&request));
        screen.apply_translation(request.generation, outcome);
    }

    #[test]
    fn defaults_are_english_to_english() {
        let screen = TranslatorScreen::new();
        assert_eq!(screen.source_language(), "en");
        assert_eq!(screen.target_language(), "en");
        assert_eq!(screen.input_text(), "");
        assert_eq!(screen.translated_text(), "");
        assert_eq!(screen.char_count(), 0);
        assert!(!screen.is_listening());
        assert!(!screen.picker_open());
        assert_eq!(screen.active_slot(), None);
    }

    #[test]
    fn set_text_within_limit_updates_text_and_count() {
        let mut screen = TranslatorScreen::new();
        let text = "a".repeat(MAX_CHARS);
        assert!(screen.set_text(&text));
        assert_eq!(screen.input_text(), text);
        assert_eq!(screen.char_count(), MAX_CHARS);
    }

    #[test]
    fn set_text_over_limit_keeps_prior_value() {
        let mut screen = TranslatorScreen::new();
        assert!(screen.set_text("hello"));
        let too_long = "a".repeat(MAX_CHARS + 1);
        assert!(!screen.set_text(&too_long));
        assert_eq!(screen.input_text(), "hello");
        assert_eq!(screen.char_count(), 5);
    }

    #[test]
    fn set_text_counts_characters_not_bytes() {
        let mut screen = TranslatorScreen::new();
        let text = "ü".repeat(MAX_CHARS);
        assert!(screen.set_text(&text));
        assert_eq!(screen.char_count(), MAX_CHARS);
    }

    #[test]
    fn swap_is_an_involution() {
        let mut screen = TranslatorScreen::new();
        screen.select_slot(LanguageSlot::Source);
        screen.choose("fr");
        screen.select_slot(LanguageSlot::Target);
        screen.choose("de");

        screen.swap();
        assert_eq!(screen.source_language(), "de");
        assert_eq!(screen.target_language(), "fr");

        screen.swap();
        assert_eq!(screen.source_language(), "fr");
        assert_eq!(screen.target_language(), "de");
    }

    #[test]
    fn choosing_for_source_leaves_target_alone() {
        let mut screen = TranslatorScreen::new();
        screen.select_slot(LanguageSlot::Source);
        assert!(screen.picker_open());

        screen.choose("fr");
        assert_eq!(screen.source_language(), "fr");
        assert_eq!(screen.target_language(), "en");
        assert!(!screen.picker_open());
    }

    #[test]
    fn choose_without_active_slot_changes_nothing_but_closes() {
        let mut screen = TranslatorScreen::new();
        screen.choose("fr");
        assert_eq!(screen.source_language(), "en");
        assert_eq!(screen.target_language(), "en");
        assert!(!screen.picker_open());
    }

    #[test]
    fn reopening_the_picker_still_commits_choices() {
        let mut screen = TranslatorScreen::new();
        screen.select_slot(LanguageSlot::Source);
        screen.dismiss_picker();

        screen.select_slot(LanguageSlot::Source);
        assert!(screen.picker_open());
        screen.choose("fr");

        assert_eq!(screen.source_language(), "fr");
        assert!(!screen.picker_open());
    }

    #[test]
    fn dismiss_closes_without_committing() {
        let mut screen = TranslatorScreen::new();
        screen.select_slot(LanguageSlot::Target);
        screen.dismiss_picker();
        assert!(!screen.picker_open());
        assert_eq!(screen.target_language(), "en");
        // the slot stays armed for the next open
        assert_eq!(screen.active_slot(), Some(LanguageSlot::Target));
    }

    #[test]
    fn empty_input_short_circuits_without_a_request() {
        let mut screen = TranslatorScreen::new();
        let service = ScriptedService::ok("Hola");

        screen.set_text("Hello");
        translate_with(&mut screen, &service);
        assert_eq!(screen.translated_text(), "Hola");

        // clearing the input clears the output without another request
        screen.set_text("   ");
        translate_with(&mut screen, &service);

        assert_eq!(screen.translated_text(), "");
        assert_eq!(service.calls.borrow().len(), 1);
    }

    #[test]
    fn successful_translation_replaces_output_verbatim() {
        let mut screen = TranslatorScreen::new();
        screen.select_slot(LanguageSlot::Target);
        screen.choose("es");
        screen.set_text("Hello");

        let service = ScriptedService::ok("Hola");
        translate_with(&mut screen, &service);

        assert_eq!(screen.translated_text(), "Hola");
        let calls = service.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].text, "Hello");
        assert_eq!(calls[0].source, "en");
        assert_eq!(calls[0].target, "es");
    }

    #[test]
    fn failed_translation_shows_fixed_error_and_keeps_input() {
        let mut screen = TranslatorScreen::new();
        screen.set_text("Hello");

        translate_with(&mut screen, &ScriptedService::failing());

        assert_eq!(screen.translated_text(), TRANSLATION_FAILED);
        assert_eq!(screen.input_text(), "Hello");
    }

    #[test]
    fn stale_response_loses_to_latest_request() {
        let mut screen = TranslatorScreen::new();
        screen.set_text("Hello");
        let first = screen.begin_translation().unwrap();
        let second = screen.begin_translation().unwrap();

        // second resolves first, then the superseded response arrives
        screen.apply_translation(second.generation, Ok("Bonjour".to_string()));
        screen.apply_translation(first.generation, Ok("Hola".to_string()));

        assert_eq!(screen.translated_text(), "Bonjour");
    }

    #[test]
    fn transcript_bypasses_the_length_ceiling() {
        let mut screen = TranslatorScreen::new();
        let transcript = "a".repeat(500);

        screen.apply_speech_event(SpeechEvent::Started);
        assert!(screen.is_listening());

        screen.apply_speech_event(SpeechEvent::Transcript(transcript.clone()));
        screen.apply_speech_event(SpeechEvent::Ended);

        assert_eq!(screen.input_text(), transcript);
        assert_eq!(screen.char_count(), 500);
        assert!(!screen.is_listening());
    }

    #[test]
    fn speech_error_resets_listening() {
        let mut screen = TranslatorScreen::new();
        screen.set_text("keep me");
        screen.apply_speech_event(SpeechEvent::Started);
        screen.apply_speech_event(SpeechEvent::Error("no-speech".to_string()));

        assert!(!screen.is_listening());
        assert_eq!(screen.input_text(), "keep me");
    }

    #[test]
    fn speak_skips_empty_output() {
        let screen = TranslatorScreen::new();
        let voice = RecordingVoice::new();
        screen.speak(&voice);
        assert!(voice.spoken.borrow().is_empty());
    }

    #[test]
    fn speak_submits_output_in_target_language() {
        let mut screen = TranslatorScreen::new();
        screen.select_slot(LanguageSlot::Target);
        screen.choose("es");
        screen.set_text("Hello");
        translate_with(&mut screen, &ScriptedService::ok("Hola"));

        let voice = RecordingVoice::new();
        screen.speak(&voice);
        assert_eq!(
            *voice.spoken.borrow(),
            vec![("Hola".to_string(), "es".to_string())]
        );
    }
}
