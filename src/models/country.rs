//! Country model
//!
//! The normalized, flat representation of one country served by the facade.
//! The upstream service nests several of these fields; normalization happens
//! in the dataset module, this type is what handlers filter and serialize.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// == Country ==
/// A single country as served by the API.
///
/// Serialized with camelCase field names to keep the wire format stable
/// for existing consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    /// Common name (e.g. "France")
    pub name: String,
    /// Official name (e.g. "French Republic")
    pub name_official: String,
    /// ISO 3166-1 alpha-2 code
    pub cca2: String,
    /// ISO 3166-1 numeric code
    pub ccn3: String,
    /// ISO 3166-1 alpha-3 code
    pub cca3: String,
    /// Currency code to currency descriptor
    pub currencies: Map<String, Value>,
    /// Population count
    pub population: u64,
    /// Geographic region (e.g. "Europe")
    pub region: String,
    /// Capital cities
    pub capital: Vec<String>,
    /// Language code to language name
    pub languages: Map<String, Value>,
    /// Latitude/longitude pair
    pub latlng: Vec<f64>,
    /// Land area in square kilometers
    pub area: f64,
    /// Flag emoji
    pub flag: String,
    /// UTC offsets (e.g. "UTC+01:00")
    pub timezones: Vec<String>,
    /// Flag image descriptors
    pub flags: Map<String, Value>,
    /// Continents the country spans
    pub continents: Vec<String>,
}

impl Country {
    // == Code Match ==
    /// Checks whether an already-uppercased country code matches this
    /// country's alpha-2 or alpha-3 code.
    pub fn matches_code(&self, code: &str) -> bool {
        self.cca2 == code || self.cca3 == code
    }
}
