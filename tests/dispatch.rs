//! End-to-end dispatch through a real listener.

use axum::{body::Body, http::Request};
use reqwest::StatusCode;
use route_persist::http::form_value;
use route_persist::{context, ContextPersist, PersistMode, Router};

mod common;

async fn hello(req: Request<Body>) -> String {
    format!("hello, {}!", context::get(&req, "name").unwrap_or("nobody"))
}

async fn user(req: Request<Body>) -> String {
    format!(
        "id={} query={}",
        form_value(&req, "id").unwrap_or_default(),
        req.uri().query().unwrap_or_default()
    )
}

fn demo_router() -> Router {
    let mut router = Router::new();
    router
        .get("/", |_req: Request<Body>| async { "Welcome!" })
        .get("/hello/:name", hello)
        .get("/users/:id", user)
        .post("/users/:id", user);
    router
}

#[tokio::test]
async fn test_context_strategy_over_http() {
    let (addr, shutdown) = common::start_server(demo_router(), PersistMode::Context).await;
    let client = common::client();

    let res = client.get(format!("http://{}/hello/gopher", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "hello, gopher!");

    let res = client.get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "Welcome!");

    shutdown.trigger();
}

#[tokio::test]
async fn test_query_strategy_over_http() {
    let (addr, shutdown) = common::start_server(demo_router(), PersistMode::Query).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/users/99?sort=asc", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "id=99 query=id=99&sort=asc");

    let res = client
        .post(format!("http://{}/users/1?id=old", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "id=1 query=id=1");

    shutdown.trigger();
}

#[tokio::test]
async fn test_discard_strategy_over_http() {
    let (addr, shutdown) = common::start_server(demo_router(), PersistMode::Discard).await;
    let client = common::client();

    let res = client.get(format!("http://{}/hello/gopher", addr)).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "hello, nobody!");

    let res = client.get(format!("http://{}/missing", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(format!("http://{}/users/1", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    shutdown.trigger();
}

#[tokio::test]
async fn test_strategy_swap_while_serving() {
    let router = demo_router();
    let slot = router.persist().clone();
    let (addr, shutdown) = common::start_server(router, PersistMode::Discard).await;
    let client = common::client();
    let url = format!("http://{}/hello/gopher", addr);

    let res = client.get(&url).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "hello, nobody!");

    slot.set(ContextPersist);
    let res = client.get(&url).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "hello, gopher!");

    shutdown.trigger();
}
