//! Static tables used when the live sources come back empty or fail

use crate::features::location::LocationOption;

const COUNTRIES: &[(&str, &str)] = &[
    ("United States", "US"),
    ("India", "IN"),
    ("United Kingdom", "GB"),
];

const STATES: &[(&str, &[(&str, &str)])] = &[
    ("US", &[("California", "CA"), ("Texas", "TX")]),
    ("IN", &[("Maharashtra", "MH"), ("Delhi", "DL")]),
    ("GB", &[("England", "ENG"), ("Scotland", "SCT")]),
];

const CITIES: &[(&str, &str, &[&str])] = &[
    ("US", "CA", &["Los Angeles", "San Francisco"]),
    ("US", "TX", &["Houston", "Austin"]),
    ("IN", "MH", &["Mumbai", "Pune"]),
    ("IN", "DL", &["New Delhi"]),
    ("GB", "ENG", &["London", "Manchester"]),
    ("GB", "SCT", &["Edinburgh", "Glasgow"]),
];

/// Fixed country list, in display order
pub fn countries() -> Vec<LocationOption> {
    COUNTRIES
        .iter()
        .map(|(name, code)| LocationOption::new(*name, *code))
        .collect()
}

/// Expects a normalized country code
pub fn states(country_code: &str) -> Vec<LocationOption> {
    STATES
        .iter()
        .find(|(country, _)| *country == country_code)
        .map(|(_, states)| {
            states
                .iter()
                .map(|(name, code)| LocationOption::new(*name, *code))
                .collect()
        })
        .unwrap_or_default()
}

/// Expects normalized country and state codes
pub fn cities(country_code: &str, state_code: &str) -> Vec<LocationOption> {
    CITIES
        .iter()
        .find(|(country, state, _)| *country == country_code && *state == state_code)
        .map(|(_, _, cities)| cities.iter().map(|c| LocationOption::city(*c)).collect())
        .unwrap_or_default()
}
