use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_render_the_empty_page(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response
        .header("content-type")
        .is_some_and(|ct| ct.starts_with("text/html")));
    response
        .assert_page_contains("action=\"/translate\"")
        .assert_page_contains("Haitian Creole")
        .assert_page_lacks("id=\"translation\"")
        .assert_page_lacks("<h2>History</h2>");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_the_form_to_the_backend_and_show_the_result(ctx: &TestContext) {
    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .and(body_json(json!({
            "text": "Where is the pharmacy?",
            "sourceLang": "en",
            "targetLang": "ht",
            "tone": "medical"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "translatedText": "Ki kote famasi a ye?" })),
        )
        .expect(1)
        .mount(&ctx.backend)
        .await;

    let response = ctx
        .client
        .post_form(
            "/translate",
            &[
                ("text", "Where is the pharmacy?"),
                ("source_lang", "en"),
                ("target_lang", "ht"),
                ("tone", "medical"),
            ],
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_page_contains("<p>Ki kote famasi a ye?</p>")
        .assert_page_contains("EN &rarr; HT - Medical")
        .assert_page_lacks("id=\"error\"");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_blank_submissions(ctx: &TestContext) {
    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.backend)
        .await;

    let response = ctx.translate("   ").await;

    response
        .assert_status(StatusCode::OK)
        .assert_page_lacks("id=\"translation\"")
        .assert_page_lacks("id=\"error\"");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_show_backend_errors_without_recording_history(ctx: &TestContext) {
    ctx.mock_translation_response(500, json!({ "error": "Model overloaded" }))
        .await;

    let response = ctx.translate("Hello").await;

    response
        .assert_status(StatusCode::OK)
        .assert_page_contains("id=\"error\"")
        .assert_page_contains("Translation error")
        .assert_page_contains("Model overloaded")
        .assert_page_lacks("<h2>History</h2>");

    let history = ctx.client.get("/api/history").await.unwrap();
    assert_eq!(history.body, Some(json!([])));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_a_backend_without_translate_route(ctx: &TestContext) {
    // No mock mounted for /api/translate: wiremock answers 404
    let response = ctx.translate("Hello").await;

    response
        .assert_status(StatusCode::OK)
        .assert_page_contains("id=\"error\"")
        .assert_page_contains("404");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unsupported_languages(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form(
            "/translate",
            &[("text", "Bonjour"), ("source_lang", "fr"), ("target_lang", "en")],
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("fr");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_tone_to_neutral(ctx: &TestContext) {
    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .and(body_json(json!({
            "text": "Hola",
            "sourceLang": "es",
            "targetLang": "en",
            "tone": "neutral"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "translatedText": "Hello" })))
        .expect(1)
        .mount(&ctx.backend)
        .await;

    let response = ctx
        .client
        .post_form("/translate", &[("text", "Hola"), ("source_lang", "es")])
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_page_contains("<p>Hello</p>");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_escape_user_supplied_text(ctx: &TestContext) {
    ctx.mock_translation("<img src=x onerror=alert(1)>").await;

    let response = ctx.translate("<script>alert(1)</script>").await;

    response
        .assert_status(StatusCode::OK)
        .assert_page_lacks("<script>alert(1)</script>")
        .assert_page_lacks("<img src=x")
        .assert_page_contains("&lt;script&gt;");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_a_body_carrying_both_text_fields(ctx: &TestContext) {
    ctx.mock_translation_response(200, json!({ "translatedText": "Hola", "translation": "Hola" }))
        .await;

    let response = ctx.translate("Hello").await;

    response
        .assert_status(StatusCode::OK)
        .assert_page_contains("<p>Hola</p>")
        .assert_page_lacks("id=\"error\"");

    let history = ctx.client.get("/api/history").await.unwrap();
    assert_eq!(history.body.as_ref().unwrap()[0]["translatedText"], json!("Hola"));
}
