//! Translate text use case

use std::sync::Arc;

use thiserror::Error;

use super::extract::extract_text;
use super::ports::{ClientError, InputItem, TranslationClient};
use super::present::{PresentError, PresentationHandle, ResultPresenter};
use crate::domain::error::RequestError;
use crate::domain::translation::{
    interpret, FailureKind, LanguageCode, LanguageTable, PipelineOutcome, RequestBuilder,
    TranslationRequest,
};

/// Errors from the translate use case
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Unsupported target language '{0}'. Add it under [languages] in the config file")]
    UnsupportedLanguage(String),

    #[error("Failed to display result: {0}")]
    Presentation(#[from] PresentError),
}

/// Input parameters for the translate use case
#[derive(Debug, Clone, Default)]
pub struct TranslateInput {
    /// Items offered by the host, scanned in order
    pub items: Vec<InputItem>,
    /// Language to translate into
    pub target: LanguageCode,
    /// Whether missing input is shown to the user instead of ignored
    pub report_empty: bool,
}

/// Output from the translate use case
#[derive(Debug)]
pub struct TranslateOutput {
    /// The host's items, returned unmodified
    pub items: Vec<InputItem>,
    /// The presented outcome, or None when nothing was shown
    pub outcome: Option<PipelineOutcome>,
}

/// Callbacks for status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct TranslateCallbacks {
    /// Called right before the network request is issued
    pub on_request_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called once the network request completes, whatever the result
    pub on_request_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// Single-shot translation use case
pub struct TranslateTextUseCase<C>
where
    C: TranslationClient + 'static,
{
    client: Arc<C>,
    builder: RequestBuilder,
    languages: LanguageTable,
    presenter: ResultPresenter,
}

impl<C> TranslateTextUseCase<C>
where
    C: TranslationClient + 'static,
{
    /// Create a new use case instance
    pub fn new(client: C, builder: RequestBuilder, languages: LanguageTable) -> Self {
        Self {
            client: Arc::new(client),
            builder,
            presenter: ResultPresenter::new(languages.clone()),
            languages,
        }
    }

    /// Execute the translation workflow.
    ///
    /// Every outcome except silent missing input is written to `display`
    /// exactly once. The host's items are always handed back.
    pub async fn execute(
        &self,
        input: TranslateInput,
        callbacks: TranslateCallbacks,
        display: &PresentationHandle,
    ) -> Result<TranslateOutput, TranslateError> {
        let TranslateInput {
            items,
            target,
            report_empty,
        } = input;

        if !self.languages.supports(&target) {
            return Err(TranslateError::UnsupportedLanguage(target.to_string()));
        }

        let outcome = match extract_text(&items).await {
            Some(text) => Some(self.translate(text, &target, &callbacks).await),
            None if report_empty => Some(PipelineOutcome::Failure(FailureKind::NoActionableInput)),
            None => None,
        };

        if let Some(ref outcome) = outcome {
            self.presenter.present(outcome, &target, display).await?;
        }

        Ok(TranslateOutput { items, outcome })
    }

    /// Build, send, and interpret one request
    async fn translate(
        &self,
        text: String,
        target: &LanguageCode,
        callbacks: &TranslateCallbacks,
    ) -> PipelineOutcome {
        let request = match TranslationRequest::new(text, target.clone(), &self.languages) {
            Ok(request) => request,
            Err(e) => return PipelineOutcome::Failure(request_failure(e)),
        };

        let url = match self.builder.build(&request) {
            Ok(url) => url,
            Err(e) => return PipelineOutcome::Failure(request_failure(e)),
        };

        tracing::debug!(
            endpoint = %self.builder.endpoint(),
            target_language = %target,
            "sending translation request"
        );

        if let Some(ref cb) = callbacks.on_request_start {
            cb();
        }

        let client = Arc::clone(&self.client);
        let fetch = tokio::spawn(async move { client.fetch(&url).await });
        let body = match fetch.await {
            Ok(result) => result,
            Err(e) => Err(ClientError::RequestFailed(format!("Task join error: {}", e))),
        };

        if let Some(ref cb) = callbacks.on_request_end {
            cb();
        }

        match body {
            Ok(body) => interpret(&body).into(),
            Err(e) => PipelineOutcome::Failure(FailureKind::NetworkFailure(e.to_string())),
        }
    }
}

fn request_failure(error: RequestError) -> FailureKind {
    match error {
        RequestError::EmptySourceText => FailureKind::NoActionableInput,
        RequestError::UnsupportedLanguage(code) => {
            FailureKind::MalformedUrl(format!("unsupported target '{}'", code))
        }
        RequestError::MalformedUrl(reason) => FailureKind::MalformedUrl(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::extract::tests::MockAttachment;
    use crate::application::present::tests::RecordingSurface;
    use crate::application::present::{
        PresentationContext, GENERIC_ERROR_MESSAGE, NOTHING_TO_TRANSLATE_MESSAGE,
        PRESENTATION_THREAD, URL_ERROR_MESSAGE,
    };
    use crate::domain::translation::DEFAULT_ENDPOINT;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use url::Url;

    // Mock implementations for testing
    struct MockClient {
        response: Result<Vec<u8>, ClientError>,
        calls: Arc<AtomicUsize>,
        last_url: Arc<Mutex<Option<Url>>>,
    }

    impl MockClient {
        fn returning(body: &str) -> Self {
            Self::with_result(Ok(body.as_bytes().to_vec()))
        }

        fn with_result(response: Result<Vec<u8>, ClientError>) -> Self {
            Self {
                response,
                calls: Arc::new(AtomicUsize::new(0)),
                last_url: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl TranslationClient for MockClient {
        async fn fetch(&self, url: &Url) -> Result<Vec<u8>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_url.lock().unwrap() = Some(url.clone());
            self.response.clone()
        }
    }

    fn use_case(client: MockClient) -> TranslateTextUseCase<MockClient> {
        use_case_with_endpoint(client, DEFAULT_ENDPOINT)
    }

    fn use_case_with_endpoint(
        client: MockClient,
        endpoint: &str,
    ) -> TranslateTextUseCase<MockClient> {
        TranslateTextUseCase::new(
            client,
            RequestBuilder::new(endpoint, "test-key"),
            LanguageTable::default(),
        )
    }

    fn text_input(text: &str) -> TranslateInput {
        TranslateInput {
            items: vec![InputItem::single(MockAttachment::text(text))],
            ..Default::default()
        }
    }

    async fn run(
        use_case: &TranslateTextUseCase<MockClient>,
        input: TranslateInput,
    ) -> (TranslateOutput, RecordingSurface) {
        let context = PresentationContext::spawn(RecordingSurface::default()).unwrap();
        let handle = context.handle();
        let output = use_case
            .execute(input, TranslateCallbacks::default(), &handle)
            .await
            .unwrap();
        drop(handle);
        (output, context.shutdown().unwrap())
    }

    #[tokio::test]
    async fn execute_displays_translation() {
        let use_case = use_case(MockClient::returning(
            r#"{"outputs":{"output":["Hola mundo"]}}"#,
        ));

        let (output, surface) = run(&use_case, text_input("Hello world")).await;

        assert_eq!(
            output.outcome,
            Some(PipelineOutcome::Success("Hola mundo".to_string()))
        );
        assert_eq!(surface.current, "Spanish Text: Hola mundo");
    }

    #[tokio::test]
    async fn execute_sends_encoded_text_and_target() {
        let client = MockClient::returning(r#"{"outputs":{"output":"Hola"}}"#);
        let last_url = Arc::clone(&client.last_url);
        let use_case = use_case(client);

        run(&use_case, text_input("Hello world")).await;

        let url = last_url.lock().unwrap().clone().unwrap();
        assert!(url.as_str().contains("input=Hello%20world"));
        assert!(url.as_str().contains("target=es"));
        assert!(url.as_str().contains("source=auto"));
        assert!(url.as_str().contains("key=test-key"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn network_failure_shows_generic_message_once() {
        let use_case = use_case(MockClient::with_result(Err(ClientError::RequestFailed(
            "connection refused".to_string(),
        ))));

        let (output, surface) = run(&use_case, text_input("Hello world")).await;

        assert!(matches!(
            output.outcome,
            Some(PipelineOutcome::Failure(FailureKind::NetworkFailure(_)))
        ));
        let log = surface.log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].0, GENERIC_ERROR_MESSAGE);
        assert_eq!(log[0].1.as_deref(), Some(PRESENTATION_THREAD));
    }

    #[tokio::test]
    async fn empty_body_is_network_failure() {
        let use_case = use_case(MockClient::with_result(Err(ClientError::EmptyBody)));

        let (output, surface) = run(&use_case, text_input("Hello")).await;

        assert!(matches!(
            output.outcome,
            Some(PipelineOutcome::Failure(FailureKind::NetworkFailure(_)))
        ));
        assert_eq!(surface.current, GENERIC_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn malformed_endpoint_never_sends() {
        let client = MockClient::returning(r#"{"outputs":{"output":"Hola"}}"#);
        let calls = Arc::clone(&client.calls);
        let use_case = use_case_with_endpoint(client, "not a url");

        let (output, surface) = run(&use_case, text_input("Hello")).await;

        assert!(matches!(
            output.outcome,
            Some(PipelineOutcome::Failure(FailureKind::MalformedUrl(_)))
        ));
        assert_eq!(surface.current, URL_ERROR_MESSAGE);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn bad_response_shows_generic_message() {
        for body in ["not json", r#"{"outputs":{"output":[]}}"#, r#"{"outputs":{}}"#] {
            let use_case = use_case(MockClient::returning(body));
            let (output, surface) = run(&use_case, text_input("Hello")).await;
            assert!(!output.outcome.unwrap().is_success());
            assert_eq!(surface.current, GENERIC_ERROR_MESSAGE);
        }
    }

    #[tokio::test]
    async fn missing_text_is_silent_and_sends_nothing() {
        let client = MockClient::returning(r#"{"outputs":{"output":"Hola"}}"#);
        let calls = Arc::clone(&client.calls);
        let use_case = use_case(client);
        let input = TranslateInput {
            items: vec![InputItem::single(MockAttachment::other("image/png"))],
            ..Default::default()
        };

        let (output, surface) = run(&use_case, input).await;

        assert!(output.outcome.is_none());
        assert!(surface.log.lock().unwrap().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_text_reported_when_enabled() {
        let use_case = use_case(MockClient::returning("{}"));
        let input = TranslateInput {
            items: vec![],
            report_empty: true,
            ..Default::default()
        };

        let (output, surface) = run(&use_case, input).await;

        assert_eq!(
            output.outcome,
            Some(PipelineOutcome::Failure(FailureKind::NoActionableInput))
        );
        assert_eq!(surface.current, NOTHING_TO_TRANSLATE_MESSAGE);
    }

    #[tokio::test]
    async fn items_are_echoed_back() {
        let use_case = use_case(MockClient::returning(r#"{"outputs":{"output":"Hola"}}"#));
        let input = TranslateInput {
            items: vec![
                InputItem::single(MockAttachment::other("image/png")),
                InputItem::single(MockAttachment::text("Hello")),
            ],
            ..Default::default()
        };
        let originals: Vec<_> = input
            .items
            .iter()
            .map(|item| Arc::clone(&item.attachments()[0]))
            .collect();

        let (output, _) = run(&use_case, input).await;

        assert_eq!(output.items.len(), 2);
        for (item, original) in output.items.iter().zip(&originals) {
            assert!(Arc::ptr_eq(&item.attachments()[0], original));
        }
    }

    #[tokio::test]
    async fn unsupported_target_is_rejected() {
        let use_case = use_case(MockClient::returning("{}"));
        let context = PresentationContext::spawn(RecordingSurface::default()).unwrap();
        let handle = context.handle();
        let input = TranslateInput {
            target: "fr".parse().unwrap(),
            ..text_input("Hello")
        };

        let result = use_case
            .execute(input, TranslateCallbacks::default(), &handle)
            .await;

        assert!(matches!(result, Err(TranslateError::UnsupportedLanguage(_))));
    }

    #[tokio::test]
    async fn callbacks_wrap_the_request() {
        let use_case = use_case(MockClient::returning(r#"{"outputs":{"output":"Hola"}}"#));
        let starts = Arc::new(AtomicUsize::new(0));
        let ends = Arc::new(AtomicUsize::new(0));
        let (s, e) = (Arc::clone(&starts), Arc::clone(&ends));
        let callbacks = TranslateCallbacks {
            on_request_start: Some(Box::new(move || {
                s.fetch_add(1, Ordering::SeqCst);
            })),
            on_request_end: Some(Box::new(move || {
                e.fetch_add(1, Ordering::SeqCst);
            })),
        };
        let context = PresentationContext::spawn(RecordingSurface::default()).unwrap();
        let handle = context.handle();

        use_case
            .execute(text_input("Hello"), callbacks, &handle)
            .await
            .unwrap();

        assert_eq!(starts.load(Ordering::SeqCst), 1);
        assert_eq!(ends.load(Ordering::SeqCst), 1);
    }
}
