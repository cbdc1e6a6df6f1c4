#![allow(clippy::unwrap_used, clippy::expect_used)]

use anyhow::{anyhow, Result};
use consulta_client::{
    auth::LoginRequest,
    resources::{cms::PageDraft, contact::ContactRequest},
    ApiClient, ChatRole, ChatSession, ClientConfig, Error, MemoryTokenStore, PageRequest,
    TokenPair, TokenStore,
};
use httpmock::prelude::*;
use secrecy::ExposeSecret;
use serde_json::json;
use std::{net::TcpListener, sync::Arc};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer, store: Arc<MemoryTokenStore>) -> Result<ApiClient> {
    let config = ClientConfig::new(server.url("/api/v1"));
    Ok(ApiClient::new(config, store)?)
}

fn access_token(store: &MemoryTokenStore) -> Option<String> {
    store
        .load()
        .map(|tokens| tokens.access_token.expose_secret().to_string())
}

fn page_json(slug: &str) -> serde_json::Value {
    json!({
        "id": format!("id-{slug}"),
        "slug": slug,
        "title": "About us",
        "content": "We are a small team.",
        "is_published": true
    })
}

#[tokio::test]
async fn list_sends_bearer_and_pagination_query() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/cms/pages")
                .header("authorization", "Bearer access-1")
                .query_param("page", "2")
                .query_param("per_page", "5")
                .query_param("search", "about");
            then.status(200).json_body(json!({
                "items": [page_json("about")],
                "total": 6,
                "page": 2,
                "per_page": 5
            }));
        })
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("access-1", "refresh-1")));
    let client = client_for(&server, store)?;

    let request = PageRequest::new(1, 5).with_search("about").next();
    let page = client.pages().list(&request).await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].slug, "about");
    assert!(!page.has_next());
    assert!(page.has_previous());
    list_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn expired_token_is_refreshed_and_request_retried_once() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let stale_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/profile")
                .header("authorization", "Bearer stale");
            then.status(401);
        })
        .await;

    let refresh_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/refresh")
                .json_body(json!({ "refresh_token": "refresh-1" }));
            then.status(200).json_body(json!({
                "access_token": "fresh",
                "refresh_token": "refresh-2"
            }));
        })
        .await;

    let fresh_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/profile")
                .header("authorization", "Bearer fresh");
            then.status(200).json_body(json!({
                "id": "u-1",
                "email": "ana@example.com",
                "full_name": "Ana Ruiz"
            }));
        })
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("stale", "refresh-1")));
    let client = client_for(&server, store.clone())?;

    let profile = client.profile().await?;
    assert_eq!(profile.email, "ana@example.com");
    assert_eq!(access_token(&store), Some("fresh".to_string()));
    assert_eq!(
        store
            .load()
            .map(|t| t.refresh_token.expose_secret().to_string()),
        Some("refresh-2".to_string())
    );
    stale_mock.assert_async().await;
    refresh_mock.assert_async().await;
    fresh_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn refresh_without_rotation_keeps_refresh_token() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let refresh_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/refresh");
            then.status(200).json_body(json!({ "access_token": "fresh" }));
        })
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("stale", "keep-me")));
    let client = client_for(&server, store.clone())?;

    let tokens = client.refresh().await?;
    assert_eq!(tokens.access_token.expose_secret(), "fresh");
    assert_eq!(tokens.refresh_token.expose_secret(), "keep-me");
    refresh_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn failed_refresh_clears_tokens() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let orders_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/orders");
            then.status(401);
        })
        .await;

    let refresh_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/refresh");
            then.status(401).json_body(json!({ "detail": "revoked" }));
        })
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("stale", "revoked")));
    let client = client_for(&server, store.clone())?;

    let result = client.orders(&PageRequest::default()).await;
    assert!(matches!(result, Err(Error::Unauthorized)));
    assert!(store.load().is_none());
    orders_mock.assert_async().await;
    refresh_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn retry_that_is_still_unauthorized_gives_up() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let users_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/users");
            then.status(401);
        })
        .await;

    let refresh_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/refresh");
            then.status(200).json_body(json!({
                "access_token": "fresh",
                "refresh_token": "refresh-2"
            }));
        })
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("stale", "refresh-1")));
    let client = client_for(&server, store.clone())?;

    let result = client.users().list(&PageRequest::default()).await;
    assert!(matches!(result, Err(Error::Unauthorized)));
    assert!(store.load().is_none());
    users_mock.assert_hits_async(2).await;
    refresh_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn anonymous_unauthorized_does_not_refresh() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let orders_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/orders");
            then.status(401);
        })
        .await;

    let refresh_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/refresh");
            then.status(200);
        })
        .await;

    let client = client_for(&server, Arc::new(MemoryTokenStore::new()))?;
    let result = client.orders(&PageRequest::default()).await;
    assert!(matches!(result, Err(Error::Unauthorized)));
    orders_mock.assert_async().await;
    refresh_mock.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn login_posts_credentials_and_stores_tokens() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let login_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/login").json_body(json!({
                "email": "ana@example.com",
                "password": "correct-horse"
            }));
            then.status(200).json_body(json!({
                "access_token": "access-1",
                "refresh_token": "refresh-1",
                "user": {
                    "id": "u-1",
                    "email": "ana@example.com",
                    "role": "admin"
                }
            }));
        })
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server, store.clone())?;

    let user = client
        .login(&LoginRequest {
            email: "ana@example.com".to_string(),
            password: "correct-horse".to_string(),
        })
        .await?;

    assert!(user.is_admin());
    assert_eq!(access_token(&store), Some("access-1".to_string()));
    login_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn logout_clears_tokens_even_when_server_fails() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let logout_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/logout");
            then.status(500);
        })
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("access-1", "refresh-1")));
    let client = client_for(&server, store.clone())?;

    client.logout().await;
    assert!(store.load().is_none());
    logout_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn contact_form_submits_normalized_payload() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let contact_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/contact").json_body(json!({
                "name": "Ana",
                "email": "ana@example.com",
                "service_interest": "seo-audit",
                "message": "We need a growth plan for Q1."
            }));
            then.status(204);
        })
        .await;

    let client = client_for(&server, Arc::new(MemoryTokenStore::new()))?;
    client
        .submit_contact(ContactRequest {
            name: " Ana ".to_string(),
            email: "ana@example.com".to_string(),
            company: Some(String::new()),
            phone: None,
            service_interest: Some("seo-audit".to_string()),
            message: "We need a growth plan for Q1.  ".to_string(),
        })
        .await?;
    contact_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn invalid_draft_is_not_sent() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let create_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/cms/pages");
            then.status(201).json_body(page_json("about"));
        })
        .await;

    let client = client_for(&server, Arc::new(MemoryTokenStore::new()))?;
    let result = client
        .pages()
        .create(&PageDraft {
            slug: "About Us".to_string(),
            title: "About".to_string(),
            content: "Body".to_string(),
            meta_description: None,
            is_published: false,
        })
        .await;

    let Err(Error::Validation(errors)) = result else {
        return Err(anyhow!("expected validation error"));
    };
    assert!(errors.get("slug").is_some());
    create_mock.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn server_validation_errors_are_mapped_to_fields() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/v1/cms/pages/id-about");
            then.status(422).json_body(json!({
                "errors": { "slug": ["already exists"] }
            }));
        })
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("access-1", "refresh-1")));
    let client = client_for(&server, store)?;
    let result = client
        .pages()
        .update(
            "id-about",
            &PageDraft {
                slug: "about".to_string(),
                title: "About".to_string(),
                content: "Body".to_string(),
                meta_description: None,
                is_published: true,
            },
        )
        .await;

    let Err(err) = result else {
        return Err(anyhow!("expected error"));
    };
    assert_eq!(err.field_errors().get("slug"), Some("already exists"));
    Ok(())
}

#[tokio::test]
async fn http_errors_carry_status_and_detail() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/services/missing");
            then.status(404).json_body(json!({ "detail": "Not found" }));
        })
        .await;

    let client = client_for(&server, Arc::new(MemoryTokenStore::new()))?;
    let result = client.services().get("missing").await;

    assert_eq!(
        result.err(),
        Some(Error::Http {
            status: 404,
            message: "Not found".to_string()
        })
    );
    Ok(())
}

#[tokio::test]
async fn unknown_chat_session_has_empty_history() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/chat/history/s-404");
            then.status(404);
        })
        .await;

    let client = client_for(&server, Arc::new(MemoryTokenStore::new()))?;
    let history = client.chat_history("s-404").await?;
    assert!(history.is_empty());
    Ok(())
}

#[tokio::test]
async fn current_user_without_tokens_skips_request() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let me_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/auth/me");
            then.status(200);
        })
        .await;

    let client = client_for(&server, Arc::new(MemoryTokenStore::new()))?;
    assert!(client.current_user().await?.is_none());
    me_mock.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn concurrent_unauthorized_requests_share_one_refresh() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;
    let empty_page = json!({ "items": [], "total": 0, "page": 1, "per_page": 10 });

    for path in ["/api/v1/orders", "/api/v1/services"] {
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(path)
                    .header("authorization", "Bearer stale");
                then.status(401);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(path)
                    .header("authorization", "Bearer fresh");
                then.status(200).json_body(empty_page.clone());
            })
            .await;
    }

    // A second refresh with the rotated-away token would be rejected.
    let refresh_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/refresh")
                .json_body(json!({ "refresh_token": "refresh-1" }));
            then.status(200).json_body(json!({
                "access_token": "fresh",
                "refresh_token": "refresh-2"
            }));
        })
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("stale", "refresh-1")));
    let client = client_for(&server, store.clone())?;
    let page = PageRequest::default();

    let services_api = client.services();
    let (orders, services) = tokio::join!(client.orders(&page), services_api.list(&page));

    assert!(orders.is_ok(), "orders failed: {orders:?}");
    assert!(services.is_ok(), "services failed: {services:?}");
    assert_eq!(access_token(&store), Some("fresh".to_string()));
    refresh_mock.assert_hits_async(1).await;
    Ok(())
}

#[tokio::test]
async fn access_token_only_session_does_not_refresh() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let orders_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/orders")
                .header("authorization", "Bearer cli-token");
            then.status(401);
        })
        .await;

    let refresh_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/refresh");
            then.status(200).json_body(json!({ "access_token": "fresh" }));
        })
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("cli-token", "")));
    let client = client_for(&server, store.clone())?;

    let result = client.orders(&PageRequest::default()).await;
    assert!(matches!(result, Err(Error::Unauthorized)));
    assert!(store.load().is_none());

    store.save(&TokenPair::new("cli-token", ""));
    assert!(matches!(client.refresh().await, Err(Error::Unauthorized)));

    orders_mock.assert_async().await;
    refresh_mock.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn failed_chat_message_is_recorded_after_visitor_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start_async().await;

    let chat_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/chat/message")
                .json_body(json!({ "session_id": "s-1", "message": "Hello there" }));
            then.status(500).json_body(json!({ "detail": "model offline" }));
        })
        .await;

    let client = client_for(&server, Arc::new(MemoryTokenStore::new()))?;
    let mut session = ChatSession::with_id("s-1");

    let result = session.send(&client, "  Hello there ").await;
    assert!(result.is_err());

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, ChatRole::User);
    assert_eq!(messages[0].content, "Hello there");
    assert_eq!(messages[1].role, ChatRole::System);
    assert!(!messages[1].content.is_empty());
    chat_mock.assert_async().await;
    Ok(())
}
