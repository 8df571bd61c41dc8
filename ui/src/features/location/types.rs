// Location data model - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Selectable country, state or city; cities carry no code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationOption {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl LocationOption {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: Some(code.into()),
        }
    }

    pub fn city(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
        }
    }

    /// Identity within the parent scope: the code, or the name for cities
    pub fn key(&self) -> &str {
        self.code.as_deref().unwrap_or(&self.name)
    }
}

/// Alphabetical by name, case-insensitive first
pub fn sort_by_name(options: &mut [LocationOption]) {
    options.sort_by(|a, b| compare_names(&a.name, &b.name));
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn find_option(options: &[LocationOption], key: &str) -> Option<LocationOption> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    options.iter().find(|o| o.key() == key).cloned()
}

/// Level of the cascade a fetch or selection belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationLevel {
    Country,
    State,
    City,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub country: Option<LocationOption>,
    pub state: Option<LocationOption>,
    pub city: Option<LocationOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    NoCountry,
    CountryOnly,
    CountryAndState,
    FullySelected,
}

impl SelectionState {
    /// `state` implies `country`, `city` implies `state`
    pub fn is_consistent(&self) -> bool {
        (self.state.is_none() || self.country.is_some())
            && (self.city.is_none() || self.state.is_some())
    }

    pub fn phase(&self) -> SelectionPhase {
        match (&self.country, &self.state, &self.city) {
            (None, _, _) => SelectionPhase::NoCountry,
            (Some(_), None, _) => SelectionPhase::CountryOnly,
            (Some(_), Some(_), None) => SelectionPhase::CountryAndState,
            (Some(_), Some(_), Some(_)) => SelectionPhase::FullySelected,
        }
    }
}

/// True exactly while the corresponding fetch is in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub countries: bool,
    pub states: bool,
    pub cities: bool,
}

/// Country options plus whether they came from the static fallback table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryList {
    pub options: Vec<LocationOption>,
    pub fallback: bool,
}

/// Which location fields a form submission must insist on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequirements {
    pub state: bool,
    pub city: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut options = vec![
            LocationOption::city("edinburgh"),
            LocationOption::city("Glasgow"),
            LocationOption::city("Aberdeen"),
        ];
        sort_by_name(&mut options);
        let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Aberdeen", "edinburgh", "Glasgow"]);
    }

    #[test]
    fn test_key_falls_back_to_name() {
        assert_eq!(LocationOption::new("India", "IN").key(), "IN");
        assert_eq!(LocationOption::city("Pune").key(), "Pune");
    }

    #[test]
    fn test_city_serializes_without_code() {
        let json = serde_json::to_value(LocationOption::city("Pune")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Pune" }));
    }

    #[test]
    fn test_phase_and_consistency() {
        let mut selection = SelectionState::default();
        assert_eq!(selection.phase(), SelectionPhase::NoCountry);

        selection.country = Some(LocationOption::new("India", "IN"));
        selection.state = Some(LocationOption::new("Delhi", "DL"));
        assert_eq!(selection.phase(), SelectionPhase::CountryAndState);
        assert!(selection.is_consistent());

        selection.country = None;
        assert!(!selection.is_consistent());
    }
}
