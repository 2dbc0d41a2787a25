use serde::{Deserialize, Serialize};

pub const SERVICE_ONLY_IN_PA: &str = "Service only in PA";
pub const ERROR: &str = "Error";

/// Subset of a Nominatim address we care about, any field may be missing
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub town: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct GeocodeResult {
    #[serde(rename = "reverseGeocodeResult")]
    pub reverse_geocode_result: String,
}

impl GeocodeResult {
    pub fn new(label: impl Into<String>) -> Self {
        GeocodeResult {
            reverse_geocode_result: label.into(),
        }
    }
}
