//! Speech capability ports, implemented against the Web Speech API in the
//! app crate.

/// Recognition session events, mirroring the browser's
/// start/result/error/end callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Started,
    Transcript(String),
    Error(String),
    Ended,
}

pub trait SpeechRecognizer {
    fn is_supported(&self) -> bool;

    /// Starts one session for `language`: final results only, single best
    /// alternative.
    fn start(
        &self,
        language: &str,
        on_event: Box<dyn FnMut(SpeechEvent) + 'static>,
    ) -> Result<(), String>;
}

pub trait SpeechSynthesizer {
    /// Fire-and-forget; there is no completion signal to consume.
    fn speak(&self, text: &str, language: &str) -> Result<(), String>;
}
