//! Integration tests for pricing API handlers
//!
//! These tests drive the actix service in-process with the real pricing engine.

use actix_web::{http::StatusCode, test, web, App};
use rankboost_api::configure_pricing;
use rankboost_core::traits::PricingService;
use rankboost_services::PricingEngine;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::str::FromStr;
use std::sync::Arc;

fn pricing_data() -> web::Data<dyn PricingService> {
    let engine: Arc<dyn PricingService> = Arc::new(PricingEngine::default());
    web::Data::from(engine)
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal serialized as string")).unwrap()
}

#[actix_web::test]
async fn test_calculate_multi_tier_jump() {
    let app = test::init_service(
        App::new()
            .app_data(pricing_data())
            .service(web::scope("/api/v1").configure(configure_pricing)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/pricing/calculate")
        .set_json(json!({ "start_rank": "BRONZE_III", "end_rank": "DIAMOND_III" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["start_rank"], "BRONZE_III");
    assert_eq!(data["end_rank"], "DIAMOND_III");
    assert_eq!(data["ordinal_difference"], 12);
    assert_eq!(decimal(&data["base_price"]), dec!(120));
    assert_eq!(decimal(&data["rank_multiplier"]), dec!(3));
    assert_eq!(decimal(&data["special_rank_fee"]), dec!(0));
    assert_eq!(decimal(&data["final_price"]), dec!(360));
    assert_eq!(data["estimated_hours"], 24);
    assert!(data["calculated_at"].is_string());
}

#[actix_web::test]
async fn test_calculate_accepts_camel_case_body() {
    let app = test::init_service(
        App::new()
            .app_data(pricing_data())
            .service(web::scope("/api/v1").configure(configure_pricing)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/pricing/calculate")
        .set_json(json!({ "startRank": "ETERNITY", "endRank": "ONE_ABOVE_ALL" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(decimal(&body["data"]["special_rank_fee"]), dec!(500));
    assert_eq!(decimal(&body["data"]["final_price"]), dec!(515));
}

#[actix_web::test]
async fn test_reversed_progression_is_unprocessable() {
    let app = test::init_service(
        App::new()
            .app_data(pricing_data())
            .service(web::scope("/api/v1").configure(configure_pricing)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/pricing/calculate")
        .set_json(json!({ "start_rank": "GOLD_I", "end_rank": "BRONZE_I" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_progression");
    assert_eq!(body["status"], 422);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("End rank must be higher than start rank"));
}

#[actix_web::test]
async fn test_equal_ranks_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(pricing_data())
            .service(web::scope("/api/v1").configure(configure_pricing)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/pricing/calculate")
        .set_json(json!({ "start_rank": "ETERNITY", "end_rank": "ETERNITY" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_unknown_rank_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(pricing_data())
            .service(web::scope("/api/v1").configure(configure_pricing)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/pricing/calculate")
        .set_json(json!({ "start_rank": "BRONZE_III", "end_rank": "CHALLENGER" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_rank");
}

#[actix_web::test]
async fn test_empty_rank_fails_validation() {
    let app = test::init_service(
        App::new()
            .app_data(pricing_data())
            .service(web::scope("/api/v1").configure(configure_pricing)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/pricing/calculate")
        .set_json(json!({ "start_rank": "", "end_rank": "GOLD_I" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn test_malformed_body() {
    let app = test::init_service(
        App::new()
            .app_data(pricing_data())
            .service(web::scope("/api/v1").configure(configure_pricing)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/pricing/calculate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"start_rank\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_list_ranks() {
    let app = test::init_service(
        App::new()
            .app_data(pricing_data())
            .service(web::scope("/api/v1").configure(configure_pricing)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/pricing/ranks")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let ranks = body["data"].as_array().unwrap();
    assert_eq!(ranks.len(), 20);
    assert_eq!(ranks[0]["rank"], "BRONZE_III");
    assert_eq!(ranks[0]["ordinal"], 1);
    assert_eq!(ranks[0]["tier"], "BRONZE");
    assert_eq!(ranks[0]["division"], "III");
    assert_eq!(ranks[18]["rank"], "ETERNITY");
    assert_eq!(ranks[18]["tier_index"], 7);
    assert_eq!(ranks[19]["rank"], "ONE_ABOVE_ALL");
    assert_eq!(ranks[19]["special"], true);
}
