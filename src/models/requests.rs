//! Request DTOs for the country facade API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query parameters for the search endpoint (GET /countries/search)
///
/// Every field is optional; the filters that are present are applied
/// conjunctively.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring of the common or official name
    pub name: Option<String>,
    /// Case-insensitive substring of any capital city
    pub capital: Option<String>,
    /// Case-insensitive region equality
    pub region: Option<String>,
    /// Exact timezone membership (e.g. "UTC+01:00")
    pub timezone: Option<String>,
}

impl SearchQuery {
    /// Returns true when no filter is present, i.e. the search would
    /// return the whole dataset.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.capital.is_none()
            && self.region.is_none()
            && self.timezone.is_none()
    }
}
