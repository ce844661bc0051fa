//! Integration tests for single-resource retrieval and the response cache
//!
//! Every test runs against a local mock server so no network access is needed.

use std::sync::Arc;
use std::time::Duration;

use pokesdk::{
    Config, Error, FetchClient, Generation, MemoryCache, Pokemon, RequestContext, Resolver,
    ResponseCache, TransportError,
};
use reqwest::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PIKACHU: &str = r#"{
    "id": 25,
    "name": "pikachu",
    "base_experience": 112,
    "height": 4,
    "is_default": true,
    "order": 35,
    "weight": 60,
    "abilities": [{"is_hidden": false, "slot": 1, "ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}}],
    "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
    "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"},
    "stats": [{"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}]
}"#;

const GEN_VII: &str = r#"{
    "id": 7,
    "name": "generation-vii",
    "main_region": {"name": "alola", "url": "https://pokeapi.co/api/v2/region/7/"},
    "names": [{"language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}, "name": "Generation VII"}],
    "pokemon_species": [{"name": "rowlet", "url": "https://pokeapi.co/api/v2/pokemon-species/722/"}]
}"#;

fn config(server: &MockServer, cache_enabled: bool) -> Config {
    Config {
        base_url: server.uri(),
        cache_enabled,
        ..Config::default()
    }
}

async fn mount_json(server: &MockServer, route: &str, body: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_cache_enabled_fetches_pokemon_once() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/pikachu", PIKACHU, 1).await;
    let resolver = Resolver::from_config(config(&server, true)).unwrap();

    let from_server = resolver.pokemon("pikachu").get().await.unwrap();
    let from_cache = resolver.pokemon("pikachu").get().await.unwrap();

    assert_eq!(from_server, from_cache);
    let expected: Pokemon = serde_json::from_str(PIKACHU).unwrap();
    assert_eq!(from_server, expected);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_cache_disabled_fetches_pokemon_twice() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/pikachu", PIKACHU, 2).await;
    let resolver = Resolver::from_config(config(&server, false)).unwrap();

    let first = resolver.pokemon("pikachu").get().await.unwrap();
    let second = resolver.pokemon("pikachu").get().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_cache_enabled_fetches_generation_once() {
    let server = MockServer::start().await;
    mount_json(&server, "/generation/7", GEN_VII, 1).await;
    let resolver = Resolver::from_config(config(&server, true)).unwrap();

    let from_server = resolver.generation("7").get().await.unwrap();
    let from_cache = resolver.generation("7").get().await.unwrap();

    assert_eq!(from_server, from_cache);
    let expected: Generation = serde_json::from_str(GEN_VII).unwrap();
    assert_eq!(from_server, expected);
    assert_eq!(from_server.localized_name("en"), Some("Generation VII"));
}

#[tokio::test]
async fn test_not_found_regardless_of_cache() {
    for cache_enabled in [false, true] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;
        let resolver = Resolver::from_config(config(&server, cache_enabled)).unwrap();

        for _ in 0..2 {
            let err = resolver.generation("777").get().await.unwrap_err();
            assert!(err.is_not_found(), "expected NotFound, got {err:?}");
        }

        // 404s are never cached
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }
}

#[tokio::test]
async fn test_server_error_is_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let resolver = Resolver::from_config(config(&server, true)).unwrap();

    let err = resolver.pokemon("1").get().await.unwrap_err();

    match err {
        Error::RequestFailed { status, .. } => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_corrupted_cache_entry_triggers_refetch() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/pikachu", PIKACHU, 2).await;
    let cache = Arc::new(MemoryCache::new(None));
    let resolver = Resolver::from_config(config(&server, true))
        .unwrap()
        .with_cache(cache.clone());
    let url = resolver.resource_url(pokesdk::ResourceKind::Pokemon, "pikachu");

    resolver.pokemon("pikachu").get().await.unwrap();
    assert_eq!(cache.get(&url).as_deref(), Some(PIKACHU.as_bytes()));

    cache.put(&url, b"{\"id\": \"corrupted".to_vec());
    let refetched = resolver.pokemon("pikachu").get().await.unwrap();
    assert_eq!(refetched.name, "pikachu");

    // The refetch repaired the entry, so this one is served from cache
    resolver.pokemon("pikachu").get().await.unwrap();
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_decode_error_is_surfaced_and_not_cached() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/pikachu", "<html>not json</html>", 2).await;
    let cache = Arc::new(MemoryCache::new(None));
    let resolver = Resolver::from_config(config(&server, true))
        .unwrap()
        .with_cache(cache.clone());

    for _ in 0..2 {
        let err = resolver.pokemon("pikachu").get().await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "expected Decode, got {err:?}");
    }

    let url = resolver.resource_url(pokesdk::ResourceKind::Pokemon, "pikachu");
    assert!(cache.get(&url).is_none());
}

#[tokio::test]
async fn test_expired_entry_is_refetched() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/pikachu", PIKACHU, 2).await;
    let resolver = Resolver::from_config(Config {
        cache_ttl: Some(Duration::from_millis(50)),
        ..config(&server, true)
    })
    .unwrap();

    resolver.pokemon("pikachu").get().await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    resolver.pokemon("pikachu").get().await.unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_cache_shared_between_resolvers() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/pikachu", PIKACHU, 1).await;
    let cache: Arc<dyn ResponseCache> = Arc::new(MemoryCache::new(None));
    let first = Resolver::from_config(config(&server, false))
        .unwrap()
        .with_cache(Arc::clone(&cache));
    let second = Resolver::from_config(config(&server, false))
        .unwrap()
        .with_cache(cache);

    first.pokemon("pikachu").get().await.unwrap();
    second.pokemon("pikachu").get().await.unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_cancelled_context_surfaces_transport_error() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/pikachu", PIKACHU, 0).await;
    let resolver = Resolver::from_config(config(&server, true)).unwrap();
    let ctx = RequestContext::background();
    ctx.cancel();

    let err = resolver.pokemon("pikachu").get_with_context(&ctx).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Transport {
            source: TransportError::Cancelled,
            ..
        }
    ));
}

#[tokio::test]
async fn test_cache_hit_ignores_cancelled_context() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/pikachu", PIKACHU, 1).await;
    let resolver = Resolver::from_config(config(&server, true)).unwrap();
    resolver.pokemon("pikachu").get().await.unwrap();

    let ctx = RequestContext::background();
    ctx.cancel();
    let cached = resolver.pokemon("pikachu").get_with_context(&ctx).await.unwrap();

    assert_eq!(cached.id, 25);
}

#[tokio::test]
async fn test_context_deadline_surfaces_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PIKACHU)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    let resolver = Resolver::from_config(config(&server, false)).unwrap();
    let ctx = RequestContext::background().with_timeout(Duration::from_millis(50));

    let err = resolver.pokemon("pikachu").get_with_context(&ctx).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Transport {
            source: TransportError::DeadlineExceeded,
            ..
        }
    ));
}

#[tokio::test]
async fn test_custom_fetch_client_is_used() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/pikachu", PIKACHU, 1).await;
    let http = reqwest::Client::builder()
        .user_agent("pokesdk-tests")
        .build()
        .unwrap();
    let resolver = Resolver::from_config(config(&server, false))
        .unwrap()
        .with_fetch_client(FetchClient::with_client(http));

    resolver.pokemon("pikachu").get().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers.get("user-agent").unwrap(), "pokesdk-tests");
}
