pub mod catalog;
pub mod screen;
pub mod service;
pub mod speech;

pub use catalog::{language_name, LANGUAGES};
pub use screen::{LanguageSlot, TranslatorScreen, MAX_CHARS};
pub use service::{
    parse_translation, TranslateError, TranslationRequest, TranslationService,
    TRANSLATION_FAILED,
};
pub use speech::{SpeechEvent, SpeechRecognizer, SpeechSynthesizer};
