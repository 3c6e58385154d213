//! End-to-end translation pipeline tests against a mock service

use std::process::Command;

use quick_translate::application::ports::InputItem;
use quick_translate::application::present::{GENERIC_ERROR_MESSAGE, NOTHING_TO_TRANSLATE_MESSAGE};
use quick_translate::application::{
    PresentationContext, TranslateCallbacks, TranslateInput, TranslateTextUseCase,
};
use quick_translate::domain::translation::{FailureKind, LanguageTable, PipelineOutcome, RequestBuilder};
use quick_translate::infrastructure::{HttpTranslationClient, TerminalDisplay, TextAttachment};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

async fn mock_service(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate"))
        .and(query_param("key", API_KEY))
        .and(query_param("source", "auto"))
        .and(query_param("target", "es"))
        .and(query_param("input", "Hello world"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// Run the pipeline once and return the outcome plus what the display shows
async fn translate_once(
    endpoint: String,
    items: Vec<InputItem>,
    report_empty: bool,
) -> (Option<PipelineOutcome>, String) {
    let context = PresentationContext::spawn(TerminalDisplay::new(Vec::new())).unwrap();
    let display = context.handle();

    let use_case = TranslateTextUseCase::new(
        HttpTranslationClient::new(),
        RequestBuilder::new(endpoint, API_KEY),
        LanguageTable::default(),
    );

    let input = TranslateInput {
        items,
        target: Default::default(),
        report_empty,
    };
    let output = use_case
        .execute(input, TranslateCallbacks::default(), &display)
        .await
        .unwrap();
    drop(display);

    let surface = context.shutdown().unwrap();
    let shown = String::from_utf8(surface.into_inner()).unwrap();
    (output.outcome, shown)
}

#[tokio::test]
async fn translates_text_through_service() {
    let server = mock_service(r#"{"outputs":[{"output":"Hola mundo"}]}"#).await;

    let (outcome, shown) = translate_once(
        format!("{}/translate", server.uri()),
        vec![InputItem::single(TextAttachment::new("Hello world"))],
        false,
    )
    .await;

    assert_eq!(outcome, Some(PipelineOutcome::Success("Hola mundo".to_string())));
    assert_eq!(shown, "Spanish Text: Hola mundo\n");
}

#[tokio::test]
async fn accepts_single_string_output() {
    let server = mock_service(r#"{"outputs":{"output":"Hola mundo"}}"#).await;

    let (_, shown) = translate_once(
        format!("{}/translate", server.uri()),
        vec![InputItem::single(TextAttachment::new("Hello world"))],
        false,
    )
    .await;

    assert_eq!(shown, "Spanish Text: Hola mundo\n");
}

#[tokio::test]
async fn empty_output_list_shows_generic_message() {
    let server = mock_service(r#"{"outputs":{"output":[]}}"#).await;

    let (outcome, shown) = translate_once(
        format!("{}/translate", server.uri()),
        vec![InputItem::single(TextAttachment::new("Hello world"))],
        false,
    )
    .await;

    assert_eq!(
        outcome,
        Some(PipelineOutcome::Failure(FailureKind::EmptyOutputList))
    );
    assert_eq!(shown, format!("{}\n", GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn malformed_body_shows_generic_message() {
    let server = mock_service("<html>oops</html>").await;

    let (outcome, shown) = translate_once(
        format!("{}/translate", server.uri()),
        vec![InputItem::single(TextAttachment::new("Hello world"))],
        false,
    )
    .await;

    assert!(matches!(
        outcome,
        Some(PipelineOutcome::Failure(FailureKind::MalformedJson(_)))
    ));
    assert_eq!(shown, format!("{}\n", GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn server_error_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (outcome, shown) = translate_once(
        format!("{}/translate", server.uri()),
        vec![InputItem::single(TextAttachment::new("Hello world"))],
        false,
    )
    .await;

    assert!(matches!(
        outcome,
        Some(PipelineOutcome::Failure(FailureKind::NetworkFailure(_)))
    ));
    assert_eq!(shown, format!("{}\n", GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn no_input_never_contacts_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (outcome, shown) =
        translate_once(format!("{}/translate", server.uri()), Vec::new(), false).await;
    assert_eq!(outcome, None);
    assert!(shown.is_empty());

    let (outcome, shown) =
        translate_once(format!("{}/translate", server.uri()), Vec::new(), true).await;
    assert_eq!(
        outcome,
        Some(PipelineOutcome::Failure(FailureKind::NoActionableInput))
    );
    assert_eq!(shown, format!("{}\n", NOTHING_TO_TRANSLATE_MESSAGE));
}

#[tokio::test]
async fn binary_prints_translation() {
    let server = mock_service(r#"{"outputs":[{"output":"Hola mundo"}]}"#).await;
    let endpoint = format!("{}/translate", server.uri());
    let config_dir = tempfile::tempdir().unwrap();
    let home = config_dir.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_quick-translate"))
            .args(["--text", "Hello world", "--endpoint", &endpoint])
            .env("TRANSLATION_API_KEY", API_KEY)
            .env_remove("TRANSLATION_ENDPOINT")
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", &home)
            .output()
            .expect("Failed to execute command")
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Spanish Text: Hola mundo\n"
    );
}
