use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt; // for Router::oneshot

use translate_skill::config::Config;
use translate_skill::routes::build_app;
use translate_skill::state::AppState;
use translate_skill::translate::{TranslateError, TranslateRequest, TranslateResponse, Translator};

struct FixedTranslator {
    reply: Result<String, u16>,
    calls: AtomicUsize,
}

impl FixedTranslator {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl Translator for FixedTranslator {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(request.target_lang, "en-us");
        match &self.reply {
            Ok(text) => Ok(TranslateResponse {
                translated_text: text.clone(),
            }),
            Err(status) => Err(TranslateError::Status {
                status: *status,
                body: "upstream error".to_string(),
            }),
        }
    }
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.translator.subscription_key = "test-key".to_string();
    config
}

async fn post(app: axum::Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/Translate")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("router handled request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn translates_spanish_record() {
    let translator = FixedTranslator::replying("This is a contract in English");
    let app = build_app(AppState::with_translator(test_config(), translator.clone()));

    let (status, body) = post(
        app,
        r#"{"values":[{"recordId":"a1","data":{"text":"Este es un contrato en Inglés","language":"es"}}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"values":[{"recordId":"a1","data":{"text":"This is a contract in English"},"errors":null,"warnings":null}]})
    );
    assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn english_record_is_returned_unchanged() {
    let translator = FixedTranslator::replying("should not be used");
    let app = build_app(AppState::with_translator(test_config(), translator.clone()));

    let (status, body) = post(
        app,
        r#"{"values":[{"recordId":"r1","data":{"text":"Hello","language":"en"}}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["values"][0]["recordId"], "r1");
    assert_eq!(body["values"][0]["data"]["text"], "Hello");
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn validation_errors_are_client_errors() {
    let cases = [
        (r#"{"something":[]}"#, "values array"),
        (r#"{"values":[]}"#, "valid records"),
        (r#"{"values":[{"recordId":null,"data":{"text":"Hola","language":"es"}}]}"#, "recordId"),
        ("{not json", "values array"),
        (r#"[[{"recordId":"a","data":{"text":"Hola","language":"es"}}]]"#, "values array"),
        (r#"{"values":[{"recordId":"a","data":{"text":"Hola","language":5}}]}"#, "language must be a string"),
    ];

    for (request, expected) in cases {
        let translator = FixedTranslator::replying("unused");
        let app = build_app(AppState::with_translator(test_config(), translator.clone()));

        let (status, body) = post(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "request {request}");
        let message = body["error"].as_str().expect("error message");
        assert!(message.contains(expected), "{message:?} should mention {expected:?}");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn missing_language_rejected_when_configured() {
    let mut config = test_config();
    config.language.missing_language = translate_skill::skill::MissingLanguagePolicy::Reject;
    let translator = FixedTranslator::replying("unused");
    let app = build_app(AppState::with_translator(config, translator.clone()));

    let (status, body) = post(app, r#"{"values":[{"recordId":"a1","data":{"text":"Hola"}}]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "language cannot be null");
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn translator_failure_is_bad_gateway() {
    let translator = FixedTranslator::failing(503);
    let app = build_app(AppState::with_translator(test_config(), translator));

    let (status, body) = post(
        app,
        r#"{"values":[{"recordId":"a1","data":{"text":"Hola","language":"es"}}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().starts_with("translation failed"));
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = build_app(AppState::with_translator(test_config(), FixedTranslator::replying("")));

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
