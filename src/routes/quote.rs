use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, bson::oid::ObjectId, Client};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::breakdown::{DiscountedTotal, PriceBreakdown};
use crate::models::hotel::Hotel;
use crate::models::rate_override::RateOverride;
use crate::models::stay::StayRequest;
use crate::services::pricing_service::PricingService;
use crate::services::rate_resolver::OverridePrecedence;

#[derive(serde::Deserialize)]
pub struct QuoteInput {
    #[serde(flatten)]
    pub stay: StayRequest,
    /// Manually chosen extra-meal quantity; when absent the required count is
    /// computed from the party size.
    pub extra_meal_count: Option<u32>,
    /// Manual discount applied to the tax-inclusive grand total.
    pub discount: Option<f64>,
}

#[derive(serde::Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_discount: Option<DiscountedTotal>,
}

/*
    /api/hotels/{id}/quote
*/
pub async fn quote(
    path: web::Path<String>,
    input: web::Json<QuoteInput>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };
    let input = input.into_inner();

    let hotels: mongodb::Collection<Hotel> = client.database(DB_NAME).collection("Hotels");
    let hotel = match hotels.find_one(doc! { "_id": id }).await {
        Ok(Some(hotel)) => hotel,
        Ok(None) => return HttpResponse::NotFound().body("Hotel not found"),
        Err(err) => {
            eprintln!("Failed to retrieve hotel: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to retrieve hotel");
        }
    };

    let rates: mongodb::Collection<RateOverride> =
        client.database(DB_NAME).collection("RateOverrides");
    let filter = doc! { "hotel_id": id, "is_available": true };
    let overrides = match rates.find(filter).await {
        Ok(cursor) => match cursor.try_collect::<Vec<RateOverride>>().await {
            Ok(overrides) => overrides,
            Err(err) => {
                eprintln!("Failed to collect rate overrides: {:?}", err);
                return HttpResponse::InternalServerError().body("Failed to collect rate overrides");
            }
        },
        Err(err) => {
            eprintln!("Failed to find rate overrides: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to find rate overrides");
        }
    };

    let profile = hotel.pricing_profile();
    let breakdown = PricingService::price_stay(
        &profile,
        &overrides,
        &input.stay,
        input.extra_meal_count,
        OverridePrecedence::from_env(),
    );
    let after_discount = input
        .discount
        .filter(|discount| *discount > 0.0)
        .map(|discount| {
            PricingService::discounted_total(&breakdown, discount, profile.tax_percentage)
        });

    HttpResponse::Ok().json(QuoteResponse {
        breakdown,
        after_discount,
    })
}
