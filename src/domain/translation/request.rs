//! Translation request value object and URL builder

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use super::language::{LanguageCode, LanguageTable};
use crate::domain::error::RequestError;

/// Default translation endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api-platform.systran.net/translation/text/translate";

/// Query values keep only RFC 3986 unreserved characters; everything else is escaped.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'<').add(b'>').add(b'`').add(b'%')
    .add(b':').add(b'/').add(b'?').add(b'#').add(b'[').add(b']').add(b'@')
    .add(b'!').add(b'$').add(b'&').add(b'\'').add(b'(').add(b')')
    .add(b'*').add(b'+').add(b',').add(b';').add(b'=')
    .add(b'{').add(b'}').add(b'|').add(b'\\').add(b'^');

/// A validated, immutable request to translate one text blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    source_text: String,
    target: LanguageCode,
}

impl TranslationRequest {
    /// Create a request, checking the text is non-empty and the target is supported.
    pub fn new(
        source_text: impl Into<String>,
        target: LanguageCode,
        languages: &LanguageTable,
    ) -> Result<Self, RequestError> {
        let source_text = source_text.into();
        if source_text.trim().is_empty() {
            return Err(RequestError::EmptySourceText);
        }
        if !languages.supports(&target) {
            return Err(RequestError::UnsupportedLanguage(target.to_string()));
        }
        Ok(Self {
            source_text,
            target,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target(&self) -> &LanguageCode {
        &self.target
    }
}

/// Builds request URLs against a translation endpoint.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    endpoint: String,
    api_key: String,
}

impl RequestBuilder {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Substitute the request into the endpoint template and parse the result.
    ///
    /// Returns `RequestError::MalformedUrl` when the result is not a valid
    /// http(s) URL; nothing should be sent in that case.
    pub fn build(&self, request: &TranslationRequest) -> Result<Url, RequestError> {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        let raw = format!(
            "{}{}key={}&source=auto&target={}&input={}",
            self.endpoint.trim(),
            separator,
            encode(&self.api_key),
            encode(request.target().as_str()),
            encode(request.source_text()),
        );

        let url = Url::parse(&raw).map_err(|e| RequestError::MalformedUrl(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(RequestError::MalformedUrl(format!(
                "unsupported scheme '{}'",
                other
            ))),
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET).to_string()
}
