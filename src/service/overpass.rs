use crate::{model::OverpassElement, Error, Result};
use async_trait::async_trait;
use geo::{coord, Coord, Rect};
use serde::Deserialize;
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{info, warn};
use url::Url;

/// Half of the search square side, in degrees
pub const BBOX_HALF_SIDE_DEG: f64 = 0.1;

const USER_AGENT: &str = concat!("vibecheck-locations-api/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Amenity {
    Bar,
    Nightclub,
    Pub,
    Biergarten,
}

impl Amenity {
    pub fn selector() -> String {
        let alternation = Amenity::iter()
            .map(|it| it.to_string())
            .collect::<Vec<_>>()
            .join("|");
        format!(r#""amenity"~"{alternation}""#)
    }
}

pub fn bbox_around(center: Coord, half_side_deg: f64) -> Rect {
    Rect::new(
        coord! { x: center.x - half_side_deg, y: center.y - half_side_deg },
        coord! { x: center.x + half_side_deg, y: center.y + half_side_deg },
    )
}

/// Overpass QL for every matching node and way inside the box. Ways come back
/// with a computed center instead of their geometry.
pub fn venue_query(bbox: &Rect) -> String {
    let selector = Amenity::selector();
    let bbox = format!(
        "({},{},{},{})",
        bbox.min().y,
        bbox.min().x,
        bbox.max().y,
        bbox.max().x,
    );
    format!(
        r#"[out:json][timeout:25];
(
  node[{selector}]{bbox};
  way[{selector}]{bbox};
);
out center;"#
    )
}

#[derive(Deserialize, Debug, Default)]
pub struct OverpassResult {
    pub remark: Option<String>,
    pub elements: Vec<OverpassElement>,
}

impl OverpassResult {
    pub fn nodes(&self) -> impl Iterator<Item = &OverpassElement> {
        self.elements.iter().filter(|it| it.is_node())
    }

    pub fn ways(&self) -> impl Iterator<Item = &OverpassElement> {
        self.elements.iter().filter(|it| it.is_way())
    }

    pub fn count_nodes(&self) -> usize {
        self.nodes().count()
    }

    pub fn count_ways(&self) -> usize {
        self.ways().count()
    }
}

#[async_trait]
pub trait SpatialQueryService: Send + Sync {
    async fn query(&self, bbox: Rect) -> Result<OverpassResult>;
}

pub struct OverpassClient {
    client: reqwest::Client,
    api_url: Url,
}

impl OverpassClient {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(OverpassClient {
            client,
            api_url: base_url.join("interpreter")?,
        })
    }
}

#[async_trait]
impl SpatialQueryService for OverpassClient {
    async fn query(&self, bbox: Rect) -> Result<OverpassResult> {
        let query = venue_query(&bbox);
        info!(url = self.api_url.as_str(), query, "Querying Overpass API");

        let response = self
            .client
            .post(self.api_url.clone())
            .body(query)
            .send()
            .await?;

        info!(http_status_code = ?response.status(), "Got Overpass API response");

        if !response.status().is_success() {
            Err(Error::OverpassApi(format!(
                "Unexpected response status: {}",
                response.status()
            )))?
        }

        let result = response.json::<OverpassResult>().await?;

        // timeouts and memory exhaustion still come back as 200
        if let Some(remark) = &result.remark {
            if remark.starts_with("runtime error") {
                Err(Error::OverpassApi(remark.clone()))?
            }
            warn!(remark, "Overpass API returned a remark");
        }

        info!(
            nodes = result.count_nodes(),
            ways = result.count_ways(),
            "Fetched elements",
        );

        Ok(result)
    }
}
