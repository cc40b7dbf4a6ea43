#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use cantina_server::{Config, DbService, ServerState, TransitionPolicy, build_router, catalog};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub async fn test_state(policy: TransitionPolicy) -> ServerState {
    let config = Config {
        status_transitions: policy,
        ..Config::default()
    };
    let db = DbService::open_in_memory().await.unwrap();
    ServerState::new(config, db, catalog::builtin())
}

pub async fn test_app() -> Router {
    build_router(test_state(TransitionPolicy::default()).await)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

/// Submit an order and return its id
pub async fn place_order(app: &Router, name: &str, items: &[(&str, i64)]) -> i64 {
    let itens: Vec<Value> = items
        .iter()
        .map(|(nome, qtd)| serde_json::json!({ "nome": nome, "quantidade": qtd }))
        .collect();
    let (status, body) = post_json(
        app,
        "/api/pedido",
        serde_json::json!({ "nome_cliente": name, "itens": itens }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id_pedido"].as_i64().unwrap()
}

pub async fn set_status(app: &Router, id: i64, status: &str) -> (StatusCode, Value) {
    post_json(
        app,
        "/cozinha/update_status",
        serde_json::json!({ "pedido_id": id, "status": status }),
    )
    .await
}
