//! Translation service infrastructure module

mod http;

pub use http::HttpTranslationClient;
