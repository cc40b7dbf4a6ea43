//! HTTP contract: status codes and body shapes of every route

mod common;

use axum::body::Body;
use cantina_server::TransitionPolicy;
use common::*;
use http::{Request, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_menu_keeps_category_order() {
    let app = test_app().await;
    let request = Request::get("/api/cardapio").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let order: Vec<usize> = ["ALMOÇO", "LANCHES", "TAPIOCA", "CUSCUZ", "OMELETE", "BEBIDAS"]
        .iter()
        .map(|c| body.find(&format!("\"{c}\"")).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));

    let menu: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(menu["LANCHES"][4], json!({ "nome": "Pizza", "preco": 9.0 }));
}

#[tokio::test]
async fn test_submit_order_success_shape() {
    let app = test_app().await;
    let (status, body) = post_json(
        &app,
        "/api/pedido",
        json!({
            "nome_cliente": "Ana",
            "itens": [{ "nome": "Pizza", "preco": 0.01, "quantidade": 2 }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["mensagem"], "Pedido recebido!");
    let id = body["id_pedido"].as_i64().unwrap();

    let (status, order) = get_json(&app, &format!("/api/pedido/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["nome_cliente"], "Ana");
    assert_eq!(order["valor_total"], 18.0);
    assert_eq!(order["status"], "Pendente");
    assert_eq!(order["detalhes"][0]["nome"], "Pizza");
    assert_eq!(order["detalhes"][0]["quantidade"], 2);
    assert_eq!(order["detalhes"][0]["preco_unitario"], 9.0);
}

#[tokio::test]
async fn test_submit_order_validation_errors() {
    let app = test_app().await;

    let cases = [
        json!({ "nome_cliente": "", "itens": [{ "nome": "Pizza", "quantidade": 1 }] }),
        json!({ "itens": [{ "nome": "Pizza", "quantidade": 1 }] }),
        json!({ "nome_cliente": "Ana", "itens": [] }),
        json!({ "nome_cliente": "Bob", "itens": [{ "nome": "Unicorn Steak", "quantidade": 1 }] }),
        json!({ "nome_cliente": "Bob", "itens": [{ "nome": "Pizza", "quantidade": 0 }] }),
        json!({ "nome_cliente": "Bob", "itens": [{ "nome": "Pizza" }] }),
    ];
    for case in cases {
        let (status, body) = post_json(&app, "/api/pedido", case.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        assert_eq!(body["success"], false);
        assert!(body["mensagem"].is_string());
        assert!(body["code"].as_u64().unwrap() > 0);
    }

    let (_, queue) = get_json(&app, "/api/fila").await;
    assert_eq!(queue, json!([]));
}

#[tokio::test]
async fn test_unknown_item_error_body() {
    let app = test_app().await;
    let (status, body) = post_json(
        &app,
        "/api/pedido",
        json!({ "nome_cliente": "Bob", "itens": [{ "nome": "Unicorn Steak", "quantidade": 1 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6001);
    assert_eq!(body["mensagem"], "Item ou quantidade inválida no pedido.");
    assert_eq!(body["details"]["item"], "Unicorn Steak");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = test_app().await;
    let (status, body) = post_raw(&app, "/api/pedido", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 6);

    let (status, _) = post_raw(&app, "/cozinha/update_status", "[1, 2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_status_contract() {
    let app = test_app().await;
    let id = place_order(&app, "Ana", &[("Pizza", 1)]).await;

    let (status, body) = set_status(&app, id, "Em Preparo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["id"], id);
    assert_eq!(body["status"], "Em Preparo");

    let (status, body) = set_status(&app, id, "Voando").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensagem"], "Status inválido.");

    let (status, body) = set_status(&app, 9999, "Pronto").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["mensagem"], "Pedido não encontrado.");

    // Invalid status wins over a missing order
    let (status, _) = set_status(&app, 9999, "Voando").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_status_missing_fields() {
    let app = test_app().await;

    let (status, body) = post_json(&app, "/cozinha/update_status", json!({ "status": "Pronto" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "pedido_id");

    let (status, body) = post_json(&app, "/cozinha/update_status", json!({ "pedido_id": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4009);
}

#[tokio::test]
async fn test_update_status_accepts_string_id() {
    let app = test_app().await;
    let id = place_order(&app, "Ana", &[("Pizza", 1)]).await;

    let (status, body) = post_json(
        &app,
        "/cozinha/update_status",
        json!({ "pedido_id": id.to_string(), "status": "Em Preparo" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["status"], "Em Preparo");

    let (status, body) = post_json(
        &app,
        "/cozinha/update_status",
        json!({ "pedido_id": "tres", "status": "Pronto" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);
}

#[tokio::test]
async fn test_order_lookup_errors() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/api/pedido/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    let (status, body) = get_json(&app, "/api/pedido/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_html_pages_render() {
    let app = test_app().await;
    place_order(&app, "<i>Ana</i>", &[("Pizza", 2)]).await;

    for (uri, marker) in [
        ("/", "LANCHES"),
        ("/cozinha", "2x Pizza"),
        ("/admin/relatorio", "R$ 18,00"),
    ] {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains(marker), "{uri} missing {marker}");
        assert!(!body.contains("<i>Ana</i>"), "{uri} did not escape");
    }
}

#[tokio::test]
async fn test_submit_order_store_failure_is_hidden() {
    let state = test_state(TransitionPolicy::default()).await;
    let pool = state.db.pool.clone();
    let app = cantina_server::build_router(state);

    sqlx::query("DROP TABLE detalhe_pedido")
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = post_json(
        &app,
        "/api/pedido",
        json!({ "nome_cliente": "Ana", "itens": [{ "nome": "Pizza", "quantidade": 2 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 9001);
    assert_eq!(body["mensagem"], "Erro interno do servidor.");
    assert!(body.get("details").is_none());

    // The order row was rolled back with its lines
    let (orders,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pedido")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orders, 0);
}

#[tokio::test]
async fn test_update_status_store_failure_is_hidden() {
    let state = test_state(TransitionPolicy::default()).await;
    let pool = state.db.pool.clone();
    let app = cantina_server::build_router(state);
    let id = place_order(&app, "Ana", &[("Pizza", 1)]).await;

    sqlx::query("ALTER TABLE pedido RENAME TO pedido_antigo")
        .execute(&pool)
        .await
        .unwrap();

    let (status, body) = set_status(&app, id, "Pronto").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["mensagem"], "Erro interno do servidor.");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_unknown_route_uses_error_body() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/api/nada").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 3);
    assert_eq!(body["details"]["path"], "/api/nada");
}
