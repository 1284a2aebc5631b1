// Reservation lifecycle against a real HTTP server, and its effect on
// availability: book, pick up, mark late, return, cancel.

use actix_web::App;
use rentkaro::app::AppState;
use rentkaro::config::PricingConfig;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn pricing_config() -> PricingConfig {
    PricingConfig {
        tax_rate: dec!(0.18),
        deposit_fraction: dec!(0.10),
        default_pricelist: "standard".to_string(),
    }
}

fn spawn_test_server() -> actix_test::TestServer {
    let state = AppState::seeded(pricing_config()).expect("test state builds");
    actix_test::start(move || {
        let state = state.clone();
        App::new().configure(move |cfg| state.configure(cfg))
    })
}

async fn reserve(srv: &actix_test::TestServer, product_id: &str, from: &str, to: &str) -> Value {
    let mut resp = srv
        .post("/reservations")
        .send_json(&json!({
            "product_id": product_id,
            "from": from,
            "to": to
        }))
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

async fn availability_status(srv: &actix_test::TestServer, product_id: &str, window: &str) -> Value {
    let mut resp = srv
        .get(format!("/products/{}/availability{}", product_id, window))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[actix_web::test]
async fn test_single_unit_booking_turns_red_then_green_after_return() {
    let srv = spawn_test_server();
    let window = "?from=2025-09-01T00:00:00Z&to=2025-09-08T00:00:00Z";

    // ELEC-002 has one unit on hand
    let availability = availability_status(&srv, "ELEC-002", window).await;
    assert_eq!(availability["status"], "green");

    let reservation = reserve(
        &srv,
        "ELEC-002",
        "2025-09-01T00:00:00Z",
        "2025-09-08T00:00:00Z",
    )
    .await;
    assert_eq!(reservation["status"], "reserved");

    let availability = availability_status(&srv, "ELEC-002", window).await;
    assert_eq!(availability["status"], "red");

    // overlap is inclusive: a request starting on the return day conflicts
    let boundary = "?from=2025-09-08T00:00:00Z&to=2025-09-15T00:00:00Z";
    let availability = availability_status(&srv, "ELEC-002", boundary).await;
    assert_eq!(availability["status"], "red");

    // pick up, mark late, return: the unit frees only after the return
    let id = reservation["id"].as_str().unwrap();
    let resp = srv
        .post(format!("/reservations/{}/pickup", id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let mut resp = srv
        .post(format!("/reservations/{}/late", id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let late: Value = resp.json().await.unwrap();
    assert_eq!(late["status"], "late");

    // late reservations still hold the unit
    let availability = availability_status(&srv, "ELEC-002", window).await;
    assert_eq!(availability["status"], "red");

    let resp = srv
        .post(format!("/reservations/{}/return", id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let availability = availability_status(&srv, "ELEC-002", window).await;
    assert_eq!(availability["status"], "green");
}

#[actix_web::test]
async fn test_partial_booking_is_yellow() {
    let srv = spawn_test_server();
    let window = "?from=2025-10-01T00:00:00Z&to=2025-10-08T00:00:00Z";

    // FURN-001 has three units
    reserve(
        &srv,
        "FURN-001",
        "2025-10-01T00:00:00Z",
        "2025-10-08T00:00:00Z",
    )
    .await;
    reserve(
        &srv,
        "FURN-001",
        "2025-10-03T00:00:00Z",
        "2025-10-05T00:00:00Z",
    )
    .await;

    let availability = availability_status(&srv, "FURN-001", window).await;
    assert_eq!(availability["status"], "yellow");
    assert_eq!(availability["text"], "Only 1 left for these dates");
}

#[actix_web::test]
async fn test_cancellation_frees_the_unit_and_keeps_the_record() {
    let srv = spawn_test_server();
    let window = "?from=2025-11-01T00:00:00Z&to=2025-11-08T00:00:00Z";

    let reservation = reserve(
        &srv,
        "ELEC-002",
        "2025-11-01T00:00:00Z",
        "2025-11-08T00:00:00Z",
    )
    .await;
    let id = reservation["id"].as_str().unwrap();

    let availability = availability_status(&srv, "ELEC-002", window).await;
    assert_eq!(availability["status"], "red");

    let mut resp = srv
        .post(format!("/reservations/{}/cancel", id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let cancelled: Value = resp.json().await.unwrap();
    assert_eq!(cancelled["status"], "cancelled");

    let availability = availability_status(&srv, "ELEC-002", window).await;
    assert_eq!(availability["status"], "green");

    // the record survives as audit trail
    let mut resp = srv
        .get("/products/ELEC-002/reservations")
        .send()
        .await
        .unwrap();
    let history: Value = resp.json().await.unwrap();
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_illegal_transition_is_rejected() {
    let srv = spawn_test_server();

    let reservation = reserve(
        &srv,
        "FURN-002",
        "2025-09-01T00:00:00Z",
        "2025-09-08T00:00:00Z",
    )
    .await;
    let id = reservation["id"].as_str().unwrap();

    // cannot return an item that was never picked up
    let resp = srv
        .post(format!("/reservations/{}/return", id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_cannot_reserve_display_only_item() {
    let srv = spawn_test_server();

    let resp = srv
        .post("/reservations")
        .send_json(&json!({
            "product_id": "DISP-001",
            "from": "2025-09-01T00:00:00Z",
            "to": "2025-09-08T00:00:00Z"
        }))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_inverted_window_rejected_at_booking() {
    let srv = spawn_test_server();

    let resp = srv
        .post("/reservations")
        .send_json(&json!({
            "product_id": "FURN-001",
            "from": "2025-09-08T00:00:00Z",
            "to": "2025-09-01T00:00:00Z"
        }))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}
