pub mod http_client;
pub mod translator_api;

pub use http_client::HttpTranslatorApi;
pub use translator_api::TranslatorApi;
