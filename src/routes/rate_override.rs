use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, bson::oid::ObjectId, Client};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::rate_override::RateOverride;

/*
    /api/hotels/{id}/rates (active seasonal overrides, for the rate editor)
*/
pub async fn get_rate_overrides(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<RateOverride> =
        client.database(DB_NAME).collection("RateOverrides");
    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let filter = doc! { "hotel_id": id, "is_available": true };
    match collection
        .find(filter)
        .sort(doc! { "start_date": 1 })
        .await
    {
        Ok(cursor) => match cursor.try_collect::<Vec<RateOverride>>().await {
            Ok(overrides) => HttpResponse::Ok().json(overrides),
            Err(err) => {
                eprintln!("Failed to collect rate overrides: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect rate overrides")
            }
        },
        Err(err) => {
            eprintln!("Failed to find rate overrides: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find rate overrides")
        }
    }
}
