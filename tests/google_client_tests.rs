// Google Translate client tests against a mocked upstream
// Author: kelexine (https://github.com/kelexine)

use mockito::Matcher;
use translate_relay::config::ProviderConfig;
use translate_relay::error::RelayError;
use translate_relay::provider::{GoogleTranslateClient, LanguageDetector, TranslationProvider};

fn client_for(server: &mockito::ServerGuard) -> GoogleTranslateClient {
    let config = ProviderConfig {
        api_base_url: server.url(),
        timeout_seconds: 5,
        connect_timeout_seconds: 5,
    };
    GoogleTranslateClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_translate_concatenates_segments() {
    let body = concat!(
        r#"[[["Hola. ","Hello. ",null,null,10],"#,
        r#"["¿Cómo estás?","How are you?",null,null,10]],null,"en"]"#
    );
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("client".into(), "gtx".into()),
            Matcher::UrlEncoded("sl".into(), "en".into()),
            Matcher::UrlEncoded("tl".into(), "es".into()),
            Matcher::UrlEncoded("q".into(), "Hello. How are you?".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = client_for(&server);
    let translated = client.translate("Hello. How are you?", "en", "es").await.unwrap();

    assert_eq!(translated, "Hola. ¿Cómo estás?");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_detect_language_reads_resolved_source() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sl".into(), "auto".into()),
            Matcher::UrlEncoded("q".into(), "Bonjour tout le monde".into()),
        ]))
        .with_status(200)
        .with_body(r#"[[["Hello everyone","Bonjour tout le monde",null,null,10]],null,"fr"]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let detected = client.detect_language("Bonjour tout le monde").await.unwrap();

    assert_eq!(detected, "fr");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_undetermined_language_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[[["...","...",null,null,10]],null,"und"]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.detect_language("...").await.unwrap_err();

    assert!(matches!(err, RelayError::Provider(ref m) if m == "Could not detect language"));
}

#[tokio::test]
async fn test_upstream_http_error_is_provider_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body("<html>Bad Request</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.translate("Hello", "en", "zz").await.unwrap_err();

    match err {
        RelayError::Provider(msg) => {
            assert!(msg.contains("400"));
            assert!(msg.contains("target=zz"));
        }
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_upstream_body_is_provider_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.translate("Hello", "en", "es").await.unwrap_err();

    assert!(err.to_string().contains("Failed to parse translation response"));
}

#[tokio::test]
async fn test_unreachable_upstream_is_provider_error() {
    let config = ProviderConfig {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        api_base_url: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    let client = GoogleTranslateClient::new(&config).unwrap();
    let err = client.translate("Hello", "en", "es").await.unwrap_err();

    assert!(matches!(
        err,
        RelayError::Provider(ref m) if m.starts_with("Failed to reach translation service")
    ));
}
