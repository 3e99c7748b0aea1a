//! Translation service port and the MyMemory wire format. The transport
//! lives in the app crate behind [`TranslationService`].

use serde::Deserialize;
use thiserror::Error;

pub const MYMEMORY_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Fixed user-visible output when a translation attempt fails.
pub const TRANSLATION_FAILED: &str = "Error occurred during translation.";

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("translation service returned HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Snapshot of one translation call. `generation` ties the eventual
/// response back to the request that produced it; only the latest is
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: String,
    pub target: String,
    pub generation: u64,
}

impl TranslationRequest {
    /// `GET <endpoint>?q=<text>&langpair=<source>|<target>`
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}?q={}&langpair={}|{}",
            MYMEMORY_ENDPOINT,
            urlencoding::encode(&self.text),
            self.source,
            self.target,
        )
    }
}

#[allow(async_fn_in_trait)]
pub trait TranslationService {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: ResponseData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    translated_text: String,
}

pub fn parse_translation(body: &str) -> Result<String, TranslateError> {
    let response: MyMemoryResponse = serde_json::from_str(body)?;
    Ok(response.response_data.translated_text)
}
