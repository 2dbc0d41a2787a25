pub mod overpass_element;
pub use overpass_element::OverpassElement;

pub mod venue;
pub use venue::Venue;

pub mod coordinate;
pub use coordinate::Coordinate;

pub mod geocode;
pub use geocode::Address;
pub use geocode::GeocodeResult;
