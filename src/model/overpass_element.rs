use geo::{coord, Coord};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OverpassElement {
    pub r#type: String,
    pub id: i64,
    pub lat: Option<f64>, // for nodes only
    pub lon: Option<f64>, // for nodes only
    pub center: Option<Center>, // for ways, requested with "out center"
    pub tags: Option<HashMap<String, String>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl OverpassElement {
    pub fn is_node(&self) -> bool {
        self.r#type == "node"
    }

    pub fn is_way(&self) -> bool {
        self.r#type == "way"
    }

    /// Direct position for nodes, computed center for ways. Ways never fall
    /// back to their own lat/lon.
    pub fn coord(&self) -> Option<Coord> {
        match self.r#type.as_str() {
            "node" => match (self.lat, self.lon) {
                (Some(lat), Some(lon)) => Some(coord! { x: lon, y: lat }),
                _ => None,
            },
            _ => self
                .center
                .as_ref()
                .map(|center| coord! { x: center.lon, y: center.lat }),
        }
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .as_ref()
            .and_then(|tags| tags.get(name))
            .map(|it| it.as_str())
    }

    #[cfg(test)]
    pub fn mock_node(id: i64, lat: f64, lon: f64) -> OverpassElement {
        OverpassElement {
            r#type: "node".into(),
            id,
            lat: Some(lat),
            lon: Some(lon),
            center: None,
            tags: Some(HashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn mock_way(id: i64, center_lat: f64, center_lon: f64) -> OverpassElement {
        OverpassElement {
            r#type: "way".into(),
            id,
            lat: None,
            lon: None,
            center: Some(Center {
                lat: center_lat,
                lon: center_lon,
            }),
            tags: Some(HashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn with_tags(self, kv_pairs: &[&str]) -> OverpassElement {
        OverpassElement {
            tags: Some(crate::test::mock_osm_tags(kv_pairs)),
            ..self
        }
    }
}
