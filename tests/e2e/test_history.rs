use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_context::test_context;

fn source_texts(history: &Value) -> Vec<&str> {
    history
        .as_array()
        .expect("history should be a JSON array")
        .iter()
        .filter_map(|entry| entry.get("sourceText").and_then(|t| t.as_str()))
        .collect()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_record_translations_newest_first(ctx: &TestContext) {
    ctx.mock_translation("ok").await;

    ctx.translate("first").await.assert_status(StatusCode::OK);
    ctx.translate("second").await.assert_status(StatusCode::OK);

    let response = ctx.client.get("/api/history").await.unwrap();
    response.assert_status(StatusCode::OK);

    let history = response.body.as_ref().unwrap();
    assert_eq!(source_texts(history), vec!["second", "first"]);

    let newest = &history[0];
    assert_eq!(newest["translatedText"], json!("ok"));
    assert_eq!(newest["sourceLang"], json!("en"));
    assert_eq!(newest["targetLang"], json!("es"));
    assert_eq!(newest["tone"], json!("neutral"));
    assert!(newest.get("id").is_some());
    assert!(newest.get("createdAt").is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_only_the_ten_most_recent(ctx: &TestContext) {
    ctx.mock_translation("ok").await;

    for i in 1..=11 {
        ctx.translate(&format!("text {}", i))
            .await
            .assert_status(StatusCode::OK);
    }

    let response = ctx.client.get("/api/history").await.unwrap();
    let texts = source_texts(response.body.as_ref().unwrap());

    assert_eq!(texts.len(), 10);
    assert_eq!(texts.first(), Some(&"text 11"));
    assert_eq!(texts.last(), Some(&"text 2"));
    assert!(!texts.contains(&"text 1"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_delete_an_entry_from_the_page(ctx: &TestContext) {
    ctx.mock_translation("ok").await;
    ctx.translate("keep me").await;
    ctx.translate("delete me").await;

    let history = ctx.client.get("/api/history").await.unwrap();
    let target_id = history.body.as_ref().unwrap()[0]["id"].as_u64().unwrap();

    let response = ctx
        .client
        .post_form(&format!("/history/{}/delete", target_id), &[])
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_page_contains("keep me")
        .assert_page_lacks(&format!("/history/{}/delete", target_id));

    let history = ctx.client.get("/api/history").await.unwrap();
    assert_eq!(source_texts(history.body.as_ref().unwrap()), vec!["keep me"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_deletes_of_stale_entries(ctx: &TestContext) {
    ctx.mock_translation("ok").await;
    ctx.translate("only").await;

    let response = ctx
        .client
        .post_form("/history/999/delete", &[])
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);

    let history = ctx.client.get("/api/history").await.unwrap();
    assert_eq!(source_texts(history.body.as_ref().unwrap()), vec!["only"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_delete_through_the_json_api(ctx: &TestContext) {
    ctx.mock_translation("ok").await;
    ctx.translate("gone").await;

    let history = ctx.client.get("/api/history").await.unwrap();
    let id = history.body.as_ref().unwrap()[0]["id"].as_u64().unwrap();

    ctx.client
        .delete(&format!("/api/history/{}", id))
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    ctx.client
        .delete(&format!("/api/history/{}", id))
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("not found");

    let history = ctx.client.get("/api/history").await.unwrap();
    assert_eq!(history.body, Some(json!([])));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_prefill_the_form_when_reusing_an_entry(ctx: &TestContext) {
    ctx.mock_translation("Bonjou").await;
    ctx.client
        .post_form(
            "/translate",
            &[
                ("text", "Good morning"),
                ("source_lang", "en"),
                ("target_lang", "ht"),
                ("tone", "formal"),
            ],
        )
        .await
        .unwrap();
    ctx.translate("Something else").await;

    let history = ctx.client.get("/api/history").await.unwrap();
    let id = history.body.as_ref().unwrap()[1]["id"].as_u64().unwrap();

    let response = ctx.client.get(&format!("/?reuse={}", id)).await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_page_contains(">Good morning</textarea>")
        .assert_page_contains("<option value=\"ht\" selected>")
        .assert_page_contains("<option value=\"formal\" selected>");
}
