use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Venue {
    pub name: String,
    pub website: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
mod test {
    use super::Venue;
    use serde_json::json;

    #[test]
    fn missing_website_is_null() -> serde_json::Result<()> {
        let venue = Venue {
            name: "The Tavern".into(),
            website: None,
            lat: 40.01,
            lon: -75.12,
        };
        assert_eq!(
            json!({"name": "The Tavern", "website": null, "lat": 40.01, "lon": -75.12}),
            serde_json::to_value(&venue)?,
        );
        Ok(())
    }
}
