use promptlingo_web::{
    controllers::{history::HistoryController, translator::TranslatorController},
    domain::translation::TranslationWorkflow,
    infrastructure::{
        api_client::{HttpTranslatorApi, TranslatorApi},
        http::build_router,
    },
    presentation::PageRenderer,
};
use serde_json::{json, Value};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::{net::TcpListener, sync::Mutex};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};


use api_client::TestClient;

pub struct TestContext {
    pub client: TestClient,
    pub backend: MockServer,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let backend = MockServer::start().await;
            let api_base_url = format!("{}/api", backend.uri());

            let api: Arc<dyn TranslatorApi> = Arc::new(HttpTranslatorApi::new(api_base_url.clone()));
            let session = Arc::new(Mutex::new(TranslationWorkflow::new(api.clone())));
            let renderer = Arc::new(PageRenderer::new().expect("Failed to compile templates"));

            let translator_controller = Arc::new(TranslatorController::new(
                session.clone(),
                renderer,
                api_base_url,
            ));
            let history_controller = Arc::new(HistoryController::new(session));
            let app = build_router(api, translator_controller, history_controller);

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

            Self {
                client: TestClient::new(&base_url),
                backend,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

impl TestContext {
    /// Backend answers every translation with `translated`
    pub async fn mock_translation(&self, translated: &str) {
        Mock::given(method("POST"))
            .and(path("/api/translate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "translatedText": translated })),
            )
            .mount(&self.backend)
            .await;
    }

    pub async fn mock_translation_response(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/api/translate"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.backend)
            .await;
    }

    pub async fn mock_voices(&self, language: &str, voices: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/voices/{}", language)))
            .respond_with(ResponseTemplate::new(200).set_body_json(voices))
            .mount(&self.backend)
            .await;
    }

    pub async fn mock_speech(&self, audio: &[u8]) {
        Mock::given(method("POST"))
            .and(path("/api/synthesize"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(audio.to_vec(), "audio/mpeg"),
            )
            .mount(&self.backend)
            .await;
    }

    pub async fn mock_speech_failure(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/synthesize"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.backend)
            .await;
    }

    pub async fn mock_backend_health(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.backend)
            .await;
    }

    /// Submit the translate form with the usual en -> es neutral settings
    pub async fn translate(&self, text: &str) -> api_client::ApiResponse {
        self.client
            .post_form(
                "/translate",
                &[
                    ("text", text),
                    ("source_lang", "en"),
                    ("target_lang", "es"),
                    ("tone", "neutral"),
                ],
            )
            .await
            .unwrap()
    }
}
