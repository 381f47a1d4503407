//! Dataset Filter Module
//!
//! Predicates over the in-memory country dataset. These borrow from the
//! dataset and return references; handlers serialize the selection
//! straight into a response payload.

use crate::models::{Country, SearchQuery};

// == By Region ==
/// Returns every country whose region matches, case-insensitively.
pub fn by_region<'a>(countries: &'a [Country], region: &str) -> Vec<&'a Country> {
    countries
        .iter()
        .filter(|country| country.region.eq_ignore_ascii_case(region))
        .collect()
}

// == By Code ==
/// Looks up a single country by its alpha-2 or alpha-3 code.
///
/// The code is upcased before matching, so lookups are case-insensitive.
pub fn by_code<'a>(countries: &'a [Country], code: &str) -> Option<&'a Country> {
    let code = code.to_uppercase();
    countries.iter().find(|country| country.matches_code(&code))
}

// == Search ==
/// Applies the present search criteria conjunctively.
///
/// Name and capital match on case-insensitive substrings, region on
/// case-insensitive equality, timezone on exact membership.
pub fn search<'a>(countries: &'a [Country], query: &SearchQuery) -> Vec<&'a Country> {
    let mut matches: Vec<&Country> = countries.iter().collect();

    if let Some(name) = &query.name {
        let needle = name.to_lowercase();
        matches.retain(|country| {
            country.name.to_lowercase().contains(&needle)
                || country.name_official.to_lowercase().contains(&needle)
        });
    }

    if let Some(capital) = &query.capital {
        let needle = capital.to_lowercase();
        matches.retain(|country| {
            country
                .capital
                .iter()
                .any(|city| city.to_lowercase().contains(&needle))
        });
    }

    if let Some(region) = &query.region {
        matches.retain(|country| country.region.eq_ignore_ascii_case(region));
    }

    if let Some(timezone) = &query.timezone {
        matches.retain(|country| country.timezones.iter().any(|tz| tz == timezone));
    }

    matches
}
