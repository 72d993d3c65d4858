use base64::Engine;
use chrono::Duration;
use tunegate::spotify::TokenCache;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_response(token: &str, expires_in: i64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "access_token": token,
        "token_type": "Bearer",
        "expires_in": expires_in
    }))
}

fn cache_for(accounts: &MockServer) -> TokenCache {
    TokenCache::new(
        format!("{}/api/token", accounts.uri()),
        "client-id",
        "client-secret",
    )
}

#[tokio::test]
async fn exchange_sends_basic_auth_and_grant_type() {
    let accounts = MockServer::start().await;

    let basic = base64::engine::general_purpose::STANDARD.encode("client-id:client-secret");

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", format!("Basic {}", basic)))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(token_response("tok-1", 3600))
        .expect(1)
        .mount(&accounts)
        .await;

    let token = cache_for(&accounts).acquire().await.unwrap();

    assert_eq!(token.access_token, "tok-1");
}

#[tokio::test]
async fn token_is_reused_while_valid() {
    let accounts = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("tok-1", 3600))
        .expect(1)
        .mount(&accounts)
        .await;

    let cache = cache_for(&accounts);

    let first = cache.acquire().await.unwrap();
    let second = cache.acquire().await.unwrap();

    assert_eq!(first.access_token, "tok-1");
    assert_eq!(second.access_token, "tok-1");
}

#[tokio::test]
async fn stale_token_is_replaced() {
    let accounts = MockServer::start().await;

    // An `expires_in` of 60 is consumed entirely by the safety margin, so
    // the first token is already stale when the second acquire runs.
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("tok-1", 60))
        .up_to_n_times(1)
        .mount(&accounts)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("tok-2", 3600))
        .expect(1)
        .mount(&accounts)
        .await;

    let cache = cache_for(&accounts);

    assert_eq!(cache.acquire().await.unwrap().access_token, "tok-1");
    assert_eq!(cache.acquire().await.unwrap().access_token, "tok-2");
}

#[tokio::test]
async fn expiry_carries_a_safety_margin() {
    let accounts = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("tok-1", 3600))
        .mount(&accounts)
        .await;

    let before = chrono::Utc::now();
    let token = cache_for(&accounts).acquire().await.unwrap();
    let lifetime = token.expires_at - before;

    // 3600 reported minus the 60 second margin.
    assert!(lifetime >= Duration::seconds(3540));
    assert!(lifetime < Duration::seconds(3560));
}

#[tokio::test]
async fn rejected_exchange_is_not_cached() {
    let accounts = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_client",
            "error_description": "Invalid client secret"
        })))
        .up_to_n_times(1)
        .mount(&accounts)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("tok-after-fix", 3600))
        .expect(1)
        .mount(&accounts)
        .await;

    let cache = cache_for(&accounts);

    let err = cache.acquire().await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid client secret");

    // The failure left the slot empty; the retry exchanges again.
    assert_eq!(cache.acquire().await.unwrap().access_token, "tok-after-fix");
}

#[tokio::test]
async fn error_code_is_used_when_no_description_is_given() {
    let accounts = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_client"
        })))
        .mount(&accounts)
        .await;

    let err = cache_for(&accounts).acquire().await.unwrap_err();

    assert_eq!(err.to_string(), "invalid_client");
}

#[tokio::test]
async fn unusable_token_body_is_an_error() {
    let accounts = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "Bearer"
        })))
        .mount(&accounts)
        .await;

    let err = cache_for(&accounts).acquire().await.unwrap_err();

    assert!(err.to_string().starts_with("malformed token response"));
}

#[tokio::test]
async fn out_of_range_lifetime_is_an_error() {
    // Well-typed but unrepresentable lifetimes must fail the exchange like
    // any other malformed answer.
    for expires_in in [i64::MAX, i64::MIN] {
        let accounts = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(token_response("tok-1", expires_in))
            .mount(&accounts)
            .await;

        let err = cache_for(&accounts).acquire().await.unwrap_err();

        assert!(err.to_string().starts_with("malformed token response"));
    }
}

#[tokio::test]
async fn invalidate_forces_a_fresh_exchange() {
    let accounts = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("tok-1", 3600))
        .up_to_n_times(1)
        .mount(&accounts)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("tok-2", 3600))
        .expect(1)
        .mount(&accounts)
        .await;

    let cache = cache_for(&accounts);

    assert_eq!(cache.acquire().await.unwrap().access_token, "tok-1");
    cache.invalidate().await;
    assert_eq!(cache.acquire().await.unwrap().access_token, "tok-2");
}

#[tokio::test]
async fn concurrent_acquires_all_succeed() {
    let accounts = MockServer::start().await;

    // Both callers may run their own exchange; no expectation on the call
    // count, only that every caller ends up with a usable token.
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("tok-1", 3600))
        .mount(&accounts)
        .await;

    let cache = cache_for(&accounts);
    let (first, second) = tokio::join!(cache.acquire(), cache.acquire());

    assert_eq!(first.unwrap().access_token, "tok-1");
    assert_eq!(second.unwrap().access_token, "tok-1");
}
