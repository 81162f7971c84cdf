//! Pricing handlers
//!
//! HTTP handlers for the price-preview endpoints. The engine itself is
//! shared as `web::Data<dyn PricingService>`.

use crate::dto::{ApiResponse, QuoteRequest, QuoteResponse, RankResponse};
use actix_web::{error::InternalError, web, HttpResponse};
use rankboost_core::models::Rank;
use rankboost_core::traits::PricingService;
use rankboost_core::AppError;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Calculate a price quote for a rank progression
///
/// POST /api/v1/pricing/calculate
#[instrument(skip(pricing, req))]
pub async fn calculate_price(
    pricing: web::Data<dyn PricingService>,
    req: web::Json<QuoteRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()
        .inspect_err(|e| warn!("Quote request validation failed: {}", e))?;

    debug!(start = %req.start_rank, end = %req.end_rank, "Calculating price");

    let start: Rank = req.start_rank.parse()?;
    let end: Rank = req.end_rank.parse()?;

    let quote = pricing.quote(start, end).map_err(|e| {
        warn!(%start, %end, "Quote rejected: {}", e);
        e
    })?;

    info!(
        %start,
        %end,
        final_price = %quote.final_price,
        estimated_hours = quote.estimated_hours,
        "Price calculated"
    );

    let response = QuoteResponse::new(start, end, quote);
    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// List the rank ladder, weakest first
///
/// GET /api/v1/pricing/ranks
#[instrument]
pub async fn list_ranks() -> HttpResponse {
    let ranks: Vec<RankResponse> = Rank::all().map(RankResponse::from).collect();
    HttpResponse::Ok().json(ApiResponse::success(ranks))
}

/// Malformed JSON bodies get the same error envelope as `AppError`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let error_message = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": "invalid_json",
                "message": error_message,
                "status": 400,
            })),
        )
        .into()
    })
}

/// Configure pricing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pricing")
            .app_data(json_config())
            .route("/calculate", web::post().to(calculate_price))
            .route("/ranks", web::get().to(list_ranks)),
    );
}
