use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use structurizr_sdk::api::{
    CanonicalMessage, ClientConfig, HttpMethod, StructurizrClient, authorization_header,
    content_md5_header,
};
use structurizr_sdk::models::Workspace;

const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

fn client() -> StructurizrClient {
    StructurizrClient::new(ClientConfig::new("apikey", "apisecret")).unwrap()
}

#[test]
fn test_get_request_canonical_form() {
    let message = CanonicalMessage::new(HttpMethod::Get, "/workspace/49053", "", "1529225966174");
    assert_eq!(
        message.digest(),
        format!("GET\n/workspace/49053\n{}\n\n1529225966174\n", EMPTY_MD5)
    );
}

#[test]
fn test_put_request_canonical_form_includes_content_type() {
    let body = r#"{"id":49053}"#;
    let message = CanonicalMessage::new(HttpMethod::Put, "/workspace/49053", body, "1");
    let digest = message.digest();
    assert!(digest.starts_with("PUT\n/workspace/49053\n"));
    assert!(digest.contains("\napplication/json; charset=UTF-8\n"));
    assert!(digest.ends_with("\n1\n"));
}

#[test]
fn test_authorization_header_shape() {
    let message = CanonicalMessage::new(HttpMethod::Get, "/workspace/1", "", "1234");
    let header = authorization_header("apikey", "apisecret", &message);

    let (key, encoded) = header.split_once(':').unwrap();
    assert_eq!(key, "apikey");
    // the signature is base64 over the lowercase hex digest string
    let decoded = BASE64.decode(encoded).unwrap();
    assert_eq!(decoded.len(), 64);
    assert!(decoded.iter().all(u8::is_ascii_hexdigit));
}

#[test]
fn test_content_md5_is_base64_of_hex() {
    assert_eq!(
        content_md5_header(""),
        BASE64.encode(EMPTY_MD5.as_bytes())
    );
}

#[test]
fn test_signed_get_has_no_body_headers() {
    let signed = client().sign(HttpMethod::Get, "/workspace/49053", "", Some("42".to_string()));

    assert_eq!(signed.url, "https://api.structurizr.com/workspace/49053");
    assert_eq!(signed.header("Nonce"), Some("42"));
    assert!(signed.header("X-Authorization").is_some());
    assert_eq!(signed.header("Content-Type"), None);
    assert_eq!(signed.header("Content-MD5"), None);
}

#[test]
fn test_signed_put_carries_body_headers() {
    let workspace = Workspace::new(49053, "Maps", "d");
    let body = workspace.to_json().unwrap();
    let signed = client().sign(
        HttpMethod::Put,
        &workspace.uri(),
        &body,
        Some("42".to_string()),
    );

    assert_eq!(signed.url, "https://api.structurizr.com/workspace/49053");
    assert_eq!(
        signed.header("Content-Type"),
        Some("application/json; charset=UTF-8")
    );
    assert_eq!(
        signed.header("Content-MD5").unwrap(),
        content_md5_header(&body)
    );
    assert_eq!(signed.body, body);
}

#[test]
fn test_different_workspaces_sign_differently() {
    let c = client();
    let a = c.sign(HttpMethod::Get, "/workspace/1", "", Some("1".to_string()));
    let b = c.sign(HttpMethod::Get, "/workspace/2", "", Some("1".to_string()));
    assert_ne!(a.header("X-Authorization"), b.header("X-Authorization"));
}

#[test]
fn test_config_builders() {
    let config = ClientConfig::new("k", "s")
        .with_base_url("https://structurizr.example.com")
        .with_verify_tls(false)
        .with_proxy("http://proxy.example.com:3128");

    assert_eq!(config.base_url, "https://structurizr.example.com");
    assert!(!config.verify_tls);
    assert_eq!(config.proxy.as_deref(), Some("http://proxy.example.com:3128"));

    // an invalid proxy URL is rejected at construction time
    let bad = ClientConfig::new("k", "s").with_proxy("::not a url::");
    assert!(StructurizrClient::new(bad).is_err());
}
