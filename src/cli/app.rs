//! Main app runner for one-shot mode

use std::env;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use crate::application::ports::{ConfigStore, InputItem};
use crate::application::{
    PresentationContext, TranslateCallbacks, TranslateError, TranslateInput, TranslateTextUseCase,
};
use crate::domain::config::AppConfig;
use crate::domain::translation::RequestBuilder;
use crate::infrastructure::{
    FileAttachment, HttpTranslationClient, StdinAttachment, TerminalDisplay, TextAttachment,
};

use super::args::TranslateOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the service credential
pub const API_KEY_ENV: &str = "TRANSLATION_API_KEY";

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV: &str = "TRANSLATION_ENDPOINT";

/// Run the one-shot translation
pub async fn run_oneshot(options: TranslateOptions) -> ExitCode {
    let presenter = Presenter::new();

    let Some(api_key) = options.api_key.clone().filter(|k| !k.is_empty()) else {
        presenter.error(&format!(
            "Missing API key. Set {} or run 'quick-translate config set api_key <key>'",
            API_KEY_ENV
        ));
        return ExitCode::from(EXIT_ERROR);
    };

    let context = match PresentationContext::spawn(TerminalDisplay::stdout()) {
        Ok(context) => context,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let display = context.handle();

    let use_case = TranslateTextUseCase::new(
        HttpTranslationClient::new(),
        RequestBuilder::new(options.endpoint.clone(), api_key),
        options.languages.clone(),
    );

    let input = TranslateInput {
        items: build_items(&options.texts, &options.files),
        target: options.target.clone(),
        report_empty: options.report_empty,
    };

    let spinner = presenter.spinner("Translating...");
    let (start, end) = (spinner.clone(), spinner.clone());
    let callbacks = TranslateCallbacks {
        on_request_start: Some(Box::new(move || Presenter::start_spinner(&start))),
        on_request_end: Some(Box::new(move || end.finish_and_clear())),
    };

    let result = use_case.execute(input, callbacks, &display).await;
    spinner.finish_and_clear();
    drop(display);

    // Wait for the presentation thread to flush its last write
    if let Ok(Err(e)) = tokio::task::spawn_blocking(move || context.shutdown()).await {
        tracing::warn!(error = %e, "presentation context did not shut down cleanly");
    }

    match result {
        Ok(output) => {
            tracing::debug!(items = output.items.len(), "returning input items to host");
            match output.outcome {
                Some(outcome) if !outcome.is_success() => ExitCode::from(EXIT_ERROR),
                _ => ExitCode::from(EXIT_SUCCESS),
            }
        }
        Err(e @ TranslateError::UnsupportedLanguage(_)) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Turn CLI inputs into host items: texts first, then files in order.
///
/// `-` stands for stdin. With no inputs at all, piped stdin is used.
pub fn build_items(texts: &[String], files: &[impl AsRef<Path>]) -> Vec<InputItem> {
    let mut items: Vec<InputItem> = texts
        .iter()
        .map(|text| InputItem::single(TextAttachment::new(text.clone())))
        .collect();

    for file in files {
        let path = file.as_ref();
        if path == Path::new("-") {
            items.push(InputItem::single(StdinAttachment::new()));
        } else {
            items.push(InputItem::single(FileAttachment::new(path)));
        }
    }

    if items.is_empty() && !std::io::stdin().is_terminal() {
        items.push(InputItem::single(StdinAttachment::new()));
    }

    items
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load_or_empty().await;

    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        endpoint: env::var(ENDPOINT_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
