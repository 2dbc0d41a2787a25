use crate::model::{Coordinate, GeocodeResult};
use crate::service::{geocode, ReverseGeocodeService};
use crate::Result;
use actix_web::{post, web::Data, web::Json};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PostArgs {
    pub lat: String,
    pub lon: String,
}

#[post("/reverse_geocode")]
pub async fn post(
    args: Json<PostArgs>,
    geocoder: Data<dyn ReverseGeocodeService>,
) -> Result<Json<Vec<GeocodeResult>>> {
    let coordinate = Coordinate::parse(&args.lat, &args.lon)?;
    let res = geocode::reverse_geocode(geocoder.get_ref(), &coordinate).await;
    Ok(Json(vec![res]))
}
