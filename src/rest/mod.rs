pub mod reverse_geocode;
pub mod vibes;
