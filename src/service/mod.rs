pub mod geocode;
pub mod nominatim;
pub mod overpass;
pub mod vibes;

pub use nominatim::NominatimClient;
pub use nominatim::ReverseGeocodeService;
pub use overpass::OverpassClient;
pub use overpass::SpatialQueryService;
