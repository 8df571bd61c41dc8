//! State and city reference data
//!
//! States are the ISO 3166-2 subdivisions of a country, keyed by the part of
//! the subdivision code after the country prefix (`US-TX` → `TX`). Cities come
//! from a bundled table keyed by country and subdivision code.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::error;

use crate::features::location::LocationOption;

const CITY_DATA: &str = include_str!("city_data.json");

type CityTable = HashMap<String, HashMap<String, Vec<String>>>;

static CITIES: OnceLock<CityTable> = OnceLock::new();

fn city_table() -> &'static CityTable {
    CITIES.get_or_init(|| {
        serde_json::from_str(CITY_DATA).unwrap_or_else(|e| {
            error!("Bundled city data is malformed: {}", e);
            HashMap::new()
        })
    })
}

/// `FR-IDF` → `IDF`
fn local_code(subdivision_code: &str) -> &str {
    subdivision_code
        .split_once('-')
        .map(|(_, local)| local)
        .unwrap_or(subdivision_code)
}

/// Subdivisions of a country; unknown countries have none
pub fn states(country_code: &str) -> Vec<LocationOption> {
    let Some(country) = rust_iso3166::from_alpha2(&country_code.to_ascii_uppercase()) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    country
        .subdivisions()
        .unwrap_or_default()
        .iter()
        .filter(|s| seen.insert(s.code))
        .map(|s| LocationOption::new(s.name, local_code(s.code)))
        .collect()
}

pub fn cities(country_code: &str, state_code: &str) -> Vec<LocationOption> {
    city_table()
        .get(country_code)
        .and_then(|states| states.get(state_code))
        .map(|cities| cities.iter().map(|c| LocationOption::city(c.clone())).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(options: &[LocationOption]) -> Vec<&str> {
        options.iter().map(LocationOption::key).collect()
    }

    #[test]
    fn test_states_cover_countries_beyond_the_city_table() {
        for country in ["FR", "BR", "JP", "MX", "NG", "IT"] {
            let states = states(country);
            assert!(!states.is_empty(), "{} has no states", country);
            assert!(
                keys(&states).iter().all(|k| !k.contains('-')),
                "{} codes keep the country prefix",
                country
            );
        }
    }

    #[test]
    fn test_state_codes_line_up_with_city_table() {
        assert!(keys(&states("US")).contains(&"TX"));
        assert!(keys(&states("GB")).contains(&"ENG"));
        assert!(keys(&states("in")).contains(&"MH"));
        assert!(cities("US", "TX").contains(&LocationOption::city("Austin")));
        assert!(cities("GB", "ENG").contains(&LocationOption::city("London")));
    }

    #[test]
    fn test_unknown_lookups_are_empty() {
        assert!(states("ZZ").is_empty());
        assert!(states("").is_empty());
        assert!(cities("US", "ZZ").is_empty());
        assert!(cities("FR", "IDF").is_empty());
    }

    #[test]
    fn test_local_code() {
        assert_eq!(local_code("FR-IDF"), "IDF");
        assert_eq!(local_code("GB-ENG"), "ENG");
        assert_eq!(local_code("ENG"), "ENG");
    }
}
