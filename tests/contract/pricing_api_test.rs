// Contract tests for the pricing endpoints.
//
// Validates the JSON shapes the storefront depends on:
// - quote responses carry price/deposit as decimal strings
// - unknown tenure is a 400 with a structured error body
// - unknown pricelist degrades to "standard" instead of failing

use actix_web::{test, App};
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

#[actix_web::test]
async fn test_quote_response_schema() {
    let state = AppState::seeded(pricing_config()).unwrap();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({
            "product_id": "FURN-001",
            "tenure": "week",
            "pricelist": "standard"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("product_id").is_some(), "product_id is required");
    assert!(body.get("tenure").is_some(), "tenure is required");
    assert!(body.get("pricelist").is_some(), "pricelist is required");
    assert!(body.get("price").is_some(), "price is required");
    assert!(body.get("deposit").is_some(), "deposit is required");

    // decimals travel as strings to avoid float drift in the storefront
    assert!(body["price"].is_string(), "price must be a decimal string");
    assert_eq!(body["price"], "3201.46");
    assert_eq!(body["deposit"], "1143.38");
    assert_eq!(body["tenure"], "week");
}

#[actix_web::test]
async fn test_unknown_tenure_is_bad_request() {
    let state = AppState::seeded(pricing_config()).unwrap();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({
            "product_id": "FURN-001",
            "tenure": "fortnight"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid tenure"));
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_unknown_pricelist_degrades_to_standard() {
    let state = AppState::seeded(pricing_config()).unwrap();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({
            "product_id": "FURN-001",
            "tenure": "week",
            "pricelist": "platinum"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pricelist"], "standard");
    assert_eq!(body["price"], "3201.46");
}

#[actix_web::test]
async fn test_configured_default_pricelist_answers_unnamed_quotes() {
    let config = PricingConfig {
        default_pricelist: "corporate".to_string(),
        ..pricing_config()
    };
    let state = AppState::seeded(config).unwrap();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({
            "product_id": "FURN-001",
            "tenure": "week"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pricelist"], "corporate");
    assert_eq!(body["price"], "2499.00");
}

#[actix_web::test]
async fn test_unknown_product_is_not_found() {
    let state = AppState::seeded(pricing_config()).unwrap();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({
            "product_id": "NOPE-000",
            "tenure": "day"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_inverted_range_is_bad_request() {
    let state = AppState::seeded(pricing_config()).unwrap();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/pricing/quote")
        .set_json(json!({
            "product_id": "FURN-001",
            "tenure": "week",
            "from": "2025-09-10T00:00:00Z",
            "to": "2025-09-01T00:00:00Z"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid date range"));
}

#[actix_web::test]
async fn test_pricelist_listing() {
    let state = AppState::seeded(pricing_config()).unwrap();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/pricing/pricelists")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!(["corporate", "standard", "student"]));
}
