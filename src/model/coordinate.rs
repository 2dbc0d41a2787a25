use crate::{Error, Result};
use geo::{coord, Coord};

/// A validated point together with the strings it was parsed from. The raw
/// strings are kept because the geocode fallback label echoes them verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
    pub raw_lat: String,
    pub raw_lon: String,
}

impl Coordinate {
    pub fn parse(lat: &str, lon: &str) -> Result<Coordinate> {
        let parsed_lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("Invalid latitude: {lat}")))?;
        let parsed_lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("Invalid longitude: {lon}")))?;
        if !(-90.0..=90.0).contains(&parsed_lat) {
            Err(Error::InvalidInput(format!("Latitude out of range: {lat}")))?
        }
        if !(-180.0..=180.0).contains(&parsed_lon) {
            Err(Error::InvalidInput(format!("Longitude out of range: {lon}")))?
        }
        Ok(Coordinate {
            lat: parsed_lat,
            lon: parsed_lon,
            raw_lat: lat.into(),
            raw_lon: lon.into(),
        })
    }

    pub fn coord(&self) -> Coord {
        coord! { x: self.lon, y: self.lat }
    }
}

#[cfg(test)]
mod test {
    use super::Coordinate;
    use crate::{Error, Result};

    #[test]
    fn parse() -> Result<()> {
        let coordinate = Coordinate::parse("40.0", "-75.13")?;
        assert_eq!(40.0, coordinate.lat);
        assert_eq!(-75.13, coordinate.lon);
        assert_eq!("40.0", coordinate.raw_lat);
        assert_eq!("-75.13", coordinate.raw_lon);
        Ok(())
    }

    #[test]
    fn parse_not_a_number() {
        assert!(matches!(
            Coordinate::parse("forty", "-75.13"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn parse_nan() {
        assert!(Coordinate::parse("NaN", "-75.13").is_err());
    }

    #[test]
    fn parse_out_of_range() {
        assert!(Coordinate::parse("90.5", "0").is_err());
        assert!(Coordinate::parse("0", "-180.1").is_err());
        assert!(Coordinate::parse("-90", "180").is_ok());
    }
}
