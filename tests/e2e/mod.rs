// End-to-end tests for the PromptLingo web front end
//
// Each test gets its own server on an ephemeral port, wired to a wiremock
// instance standing in for the translation backend. The session lives in
// the server, so tests are isolated by construction and run in parallel.

mod helpers;
mod test_history;
mod test_translate;
