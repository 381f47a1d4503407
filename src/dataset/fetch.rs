//! Dataset Fetch Module
//!
//! Fetches the country dataset from the upstream REST service and
//! normalizes its nested shape into the flat [`Country`] model. Missing or
//! null upstream fields become empty defaults so one malformed record
//! never fails the whole dataset.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{FacadeError, Result};
use crate::models::Country;

// == Raw Upstream Shapes ==
/// The nested name object as the upstream serves it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawName {
    common: Option<String>,
    official: Option<String>,
}

/// One country record as the upstream serves it.
///
/// Every field is optional; upstream records are uneven and some omit
/// capital, currencies or codes entirely.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCountry {
    name: Option<RawName>,
    cca2: Option<String>,
    ccn3: Option<String>,
    cca3: Option<String>,
    currencies: Option<Map<String, Value>>,
    population: Option<u64>,
    region: Option<String>,
    capital: Option<Vec<String>>,
    languages: Option<Map<String, Value>>,
    latlng: Option<Vec<f64>>,
    area: Option<f64>,
    flag: Option<String>,
    timezones: Option<Vec<String>>,
    flags: Option<Map<String, Value>>,
    continents: Option<Vec<String>>,
}

// == Normalization ==
impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        let name = raw.name.unwrap_or_default();
        Self {
            name: name.common.unwrap_or_default(),
            name_official: name.official.unwrap_or_default(),
            cca2: raw.cca2.unwrap_or_default(),
            ccn3: raw.ccn3.unwrap_or_default(),
            cca3: raw.cca3.unwrap_or_default(),
            currencies: raw.currencies.unwrap_or_default(),
            population: raw.population.unwrap_or_default(),
            region: raw.region.unwrap_or_default(),
            capital: raw.capital.unwrap_or_default(),
            languages: raw.languages.unwrap_or_default(),
            latlng: raw.latlng.unwrap_or_default(),
            area: raw.area.unwrap_or_default(),
            flag: raw.flag.unwrap_or_default(),
            timezones: raw.timezones.unwrap_or_default(),
            flags: raw.flags.unwrap_or_default(),
            continents: raw.continents.unwrap_or_default(),
        }
    }
}

// == Fetch ==
/// Fetches and normalizes the full country dataset.
///
/// Any transport, status or decode failure surfaces as
/// [`FacadeError::Upstream`]; the caller decides whether to keep serving
/// the previous dataset.
pub async fn fetch_countries(client: &Client, url: &str) -> Result<Vec<Country>> {
    debug!("Fetching country dataset from {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| FacadeError::Upstream(err.to_string()))?
        .error_for_status()
        .map_err(|err| FacadeError::Upstream(err.to_string()))?;

    let raw: Vec<RawCountry> = response
        .json()
        .await
        .map_err(|err| FacadeError::Upstream(err.to_string()))?;

    Ok(raw.into_iter().map(Country::from).collect())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_record() {
        let json = r#"{
            "name": {"common": "France", "official": "French Republic"},
            "cca2": "FR",
            "ccn3": "250",
            "cca3": "FRA",
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "population": 67391582,
            "region": "Europe",
            "capital": ["Paris"],
            "languages": {"fra": "French"},
            "latlng": [46.0, 2.0],
            "area": 551695.0,
            "flag": "F",
            "timezones": ["UTC+01:00"],
            "flags": {"png": "https://example.test/fr.png"},
            "continents": ["Europe"]
        }"#;

        let raw: RawCountry = serde_json::from_str(json).unwrap();
        let country = Country::from(raw);

        assert_eq!(country.name, "France");
        assert_eq!(country.name_official, "French Republic");
        assert_eq!(country.cca3, "FRA");
        assert_eq!(country.population, 67391582);
        assert_eq!(country.capital, vec!["Paris".to_string()]);
        assert_eq!(country.timezones, vec!["UTC+01:00".to_string()]);
        assert!(country.currencies.contains_key("EUR"));
    }

    #[test]
    fn test_normalize_sparse_record() {
        // Upstream records omit fields; everything falls back to defaults
        let json = r#"{"name": {"common": "Atlantis"}}"#;

        let raw: RawCountry = serde_json::from_str(json).unwrap();
        let country = Country::from(raw);

        assert_eq!(country.name, "Atlantis");
        assert_eq!(country.name_official, "");
        assert_eq!(country.cca2, "");
        assert_eq!(country.population, 0);
        assert!(country.capital.is_empty());
        assert!(country.currencies.is_empty());
    }

    #[test]
    fn test_normalize_null_fields() {
        // Explicit nulls are treated the same as missing fields
        let json = r#"{"name": null, "capital": null, "population": null}"#;

        let raw: RawCountry = serde_json::from_str(json).unwrap();
        let country = Country::from(raw);

        assert_eq!(country.name, "");
        assert!(country.capital.is_empty());
        assert_eq!(country.population, 0);
    }

    #[test]
    fn test_normalize_ignores_unknown_fields() {
        let json = r#"{"name": {"common": "Japan"}, "fifa": "JPN", "borders": []}"#;

        let raw: RawCountry = serde_json::from_str(json).unwrap();
        let country = Country::from(raw);

        assert_eq!(country.name, "Japan");
    }
}
