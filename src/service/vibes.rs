use super::geocode;
use super::nominatim::ReverseGeocodeService;
use super::overpass::{bbox_around, OverpassResult, SpatialQueryService, BBOX_HALF_SIDE_DEG};
use crate::model::{Coordinate, GeocodeResult, OverpassElement, Venue};
use futures_util::future::join;
use std::fmt::{Display, Formatter};
use tracing::warn;

pub const DEFAULT_RADIUS: i64 = 500;
pub const MIN_RADIUS: i64 = 100;
pub const MAX_RADIUS: i64 = 100_000_000;

#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    RadiusOutOfRange { requested: i64 },
    GeocodeFailed(String),
    SpatialQueryFailed(String),
    MissingName { r#type: String, id: i64 },
    MissingPosition { r#type: String, id: i64 },
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::RadiusOutOfRange { requested } => write!(
                f,
                "radius {requested} is outside of [{MIN_RADIUS}, {MAX_RADIUS}], using {DEFAULT_RADIUS}"
            ),
            Warning::GeocodeFailed(err) => write!(f, "reverse geocoding failed: {err}"),
            Warning::SpatialQueryFailed(err) => write!(f, "spatial query failed: {err}"),
            Warning::MissingName { r#type, id } => write!(f, "{}:{} has no name", r#type, id),
            Warning::MissingPosition { r#type, id } => {
                write!(f, "{}:{} has no position", r#type, id)
            }
        }
    }
}

/// Everything a venue search produced, including what went wrong along the way.
/// Callers on the wire only see `location` and `venues`.
#[derive(Debug)]
pub struct VibeReport {
    pub location: GeocodeResult,
    pub radius: i64,
    pub venues: Vec<Venue>,
    pub warnings: Vec<Warning>,
}

pub fn radius(requested: Option<i64>, warnings: &mut Vec<Warning>) -> i64 {
    match requested {
        Some(rad) if (MIN_RADIUS..=MAX_RADIUS).contains(&rad) => rad,
        Some(rad) => {
            warnings.push(Warning::RadiusOutOfRange { requested: rad });
            DEFAULT_RADIUS
        }
        None => DEFAULT_RADIUS,
    }
}

pub fn venue(element: &OverpassElement) -> Result<Venue, Warning> {
    let name = element.tag("name").ok_or_else(|| Warning::MissingName {
        r#type: element.r#type.clone(),
        id: element.id,
    })?;
    let coord = element.coord().ok_or_else(|| Warning::MissingPosition {
        r#type: element.r#type.clone(),
        id: element.id,
    })?;
    Ok(Venue {
        name: name.into(),
        website: element.tag("website").map(Into::into),
        lat: coord.y,
        lon: coord.x,
    })
}

/// Nodes first, then ways, each in the order Overpass returned them
pub fn venues(result: &OverpassResult, warnings: &mut Vec<Warning>) -> Vec<Venue> {
    let mut venues = vec![];
    for element in result.nodes().chain(result.ways()) {
        match venue(element) {
            Ok(venue) => venues.push(venue),
            Err(warning) => warnings.push(warning),
        }
    }
    venues
}

pub async fn search(
    coordinate: &Coordinate,
    requested_radius: Option<i64>,
    geocoder: &dyn ReverseGeocodeService,
    spatial: &dyn SpatialQueryService,
) -> VibeReport {
    let mut warnings = vec![];
    // TODO scale the bbox with the radius once clients send meaningful values
    let radius = radius(requested_radius, &mut warnings);
    let bbox = bbox_around(coordinate.coord(), BBOX_HALF_SIDE_DEG);

    let (location, result) = join(
        geocode::lookup(geocoder, coordinate),
        spatial.query(bbox),
    )
    .await;

    let location = match location {
        Ok(location) => location,
        Err(e) => {
            warnings.push(Warning::GeocodeFailed(e.to_string()));
            GeocodeResult::default()
        }
    };

    let venues = match result {
        Ok(result) => venues(&result, &mut warnings),
        Err(e) => {
            warnings.push(Warning::SpatialQueryFailed(e.to_string()));
            vec![]
        }
    };

    for warning in &warnings {
        warn!(%warning, "Venue search degraded");
    }

    VibeReport {
        location,
        radius,
        venues,
        warnings,
    }
}
