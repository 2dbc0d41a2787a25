use crate::model::{Coordinate, GeocodeResult, Venue};
use crate::service::{vibes, ReverseGeocodeService, SpatialQueryService};
use crate::Result;
use actix_web::{post, web::Data, web::Json};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Deserialize)]
pub struct PostArgs {
    pub lat: String,
    pub lon: String,
    pub rad: Option<i64>,
}

/// First item is always the location label, venues follow
#[derive(Serialize)]
#[serde(untagged)]
pub enum VibeEntry {
    Location(GeocodeResult),
    Venue(Venue),
}

#[post("/get_vibes")]
pub async fn post(
    args: Json<PostArgs>,
    geocoder: Data<dyn ReverseGeocodeService>,
    spatial: Data<dyn SpatialQueryService>,
) -> Result<Json<Vec<VibeEntry>>> {
    let coordinate = Coordinate::parse(&args.lat, &args.lon)?;
    let report = vibes::search(
        &coordinate,
        args.rad,
        geocoder.get_ref(),
        spatial.get_ref(),
    )
    .await;
    info!(
        location = report.location.reverse_geocode_result,
        radius = report.radius,
        venues = report.venues.len(),
        warnings = report.warnings.len(),
        "Venue search finished",
    );
    let mut res = Vec::with_capacity(report.venues.len() + 1);
    res.push(VibeEntry::Location(report.location));
    res.extend(report.venues.into_iter().map(VibeEntry::Venue));
    Ok(Json(res))
}
