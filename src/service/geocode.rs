use super::nominatim::{ReverseGeocodeService, ZOOM};
use crate::model::geocode::{ERROR, SERVICE_ONLY_IN_PA};
use crate::model::{Address, Coordinate, GeocodeResult};
use crate::Result;
use tracing::{error, info};

/// Turns a reverse geocoding answer into a "City, State" style label.
///
/// `None` means the geocoder had no address at all, which only happens outside
/// of the area our Nominatim instance covers.
pub fn resolve_label(coordinate: &Coordinate, address: Option<&Address>) -> String {
    let Some(address) = address else {
        return SERVICE_ONLY_IN_PA.into();
    };

    let town = address.town.as_deref().unwrap_or("");
    let city = address.city.as_deref().unwrap_or("");
    let state = address.state.as_deref().unwrap_or("");

    if town.is_empty() && city.is_empty() && state.is_empty() {
        return ERROR.into();
    }

    // city wins over town when both are set
    let city = if city.is_empty() { town } else { city };

    match (city.is_empty(), state.is_empty()) {
        (true, true) => format!("{}, {}", coordinate.raw_lat, coordinate.raw_lon),
        (true, false) => state.into(),
        (false, true) => city.into(),
        // some areas carry the full "City, State" label in one of the tags
        _ if city.contains(',') => city.into(),
        _ if state.contains(',') => state.into(),
        _ => format!("{city}, {state}"),
    }
}

/// Upstream failures are returned to the caller, each endpoint degrades them
/// differently.
pub async fn lookup(
    geocoder: &dyn ReverseGeocodeService,
    coordinate: &Coordinate,
) -> Result<GeocodeResult> {
    let address = geocoder.reverse(coordinate, ZOOM).await?;
    let label = resolve_label(coordinate, address.as_ref());
    info!(label, "Resolved location label");
    Ok(GeocodeResult::new(label))
}

/// A failed upstream call reads as an address without any known fields, so it
/// resolves to the generic error label rather than the coverage one.
pub async fn reverse_geocode(
    geocoder: &dyn ReverseGeocodeService,
    coordinate: &Coordinate,
) -> GeocodeResult {
    match lookup(geocoder, coordinate).await {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "Reverse geocoding failed");
            GeocodeResult::new(resolve_label(coordinate, Some(&Address::default())))
        }
    }
}

#[cfg(test)]
mod test {
    use super::{resolve_label, reverse_geocode};
    use crate::model::{Address, Coordinate};
    use crate::test::MockGeocoder;
    use crate::Result;

    fn label(town: &str, city: &str, state: &str) -> Result<String> {
        let coordinate = Coordinate::parse("40.0", "-75.13")?;
        let address = Address {
            town: Some(town.into()),
            city: Some(city.into()),
            state: Some(state.into()),
        };
        Ok(resolve_label(&coordinate, Some(&address)))
    }

    #[test]
    fn city_and_state() -> Result<()> {
        assert_eq!("Philadelphia, Pennsylvania", label("", "Philadelphia", "Pennsylvania")?);
        Ok(())
    }

    #[test]
    fn town_and_state() -> Result<()> {
        assert_eq!("Langhorne, Pennsylvania", label("Langhorne", "", "Pennsylvania")?);
        Ok(())
    }

    #[test]
    fn city_preferred_over_town() -> Result<()> {
        assert_eq!(
            "Philadelphia, Pennsylvania",
            label("Langhorne", "Philadelphia", "Pennsylvania")?
        );
        Ok(())
    }

    #[test]
    fn all_empty() -> Result<()> {
        assert_eq!("Error", label("", "", "")?);
        Ok(())
    }

    #[test]
    fn all_missing() -> Result<()> {
        let coordinate = Coordinate::parse("40.0", "-75.13")?;
        assert_eq!("Error", resolve_label(&coordinate, Some(&Address::default())));
        Ok(())
    }

    #[test]
    fn no_address() -> Result<()> {
        let coordinate = Coordinate::parse("40.0", "-75.13")?;
        assert_eq!("Service only in PA", resolve_label(&coordinate, None));
        Ok(())
    }

    #[test]
    fn state_only() -> Result<()> {
        assert_eq!("Pennsylvania", label("", "", "Pennsylvania")?);
        Ok(())
    }

    #[test]
    fn city_only() -> Result<()> {
        assert_eq!("Philadelphia", label("", "Philadelphia", "")?);
        Ok(())
    }

    #[test]
    fn city_with_comma() -> Result<()> {
        assert_eq!("Philadelphia, PA", label("", "Philadelphia, PA", "Pennsylvania")?);
        Ok(())
    }

    #[test]
    fn state_with_comma() -> Result<()> {
        assert_eq!("Philadelphia, PA", label("", "Philadelphia", "Philadelphia, PA")?);
        Ok(())
    }

    #[actix_web::test]
    async fn upstream_failure_is_error_label() -> Result<()> {
        let coordinate = Coordinate::parse("40.0", "-75.13")?;
        let result = reverse_geocode(&MockGeocoder::failing(), &coordinate).await;
        assert_eq!("Error", result.reverse_geocode_result);
        Ok(())
    }

    #[actix_web::test]
    async fn upstream_without_address() -> Result<()> {
        let coordinate = Coordinate::parse("40.0", "-75.13")?;
        let result = reverse_geocode(&MockGeocoder::no_address(), &coordinate).await;
        assert_eq!("Service only in PA", result.reverse_geocode_result);
        Ok(())
    }
}
