//! Cascading country → state → city selection
//!
//! Every selection bumps the generation counter of its own level and of every
//! level below it. Fetches carry the generation they were started under, and a
//! response is applied only if that generation is still current, so a slow
//! response for an earlier selection can never overwrite a newer one.

use super::types::*;
use crate::features::notice::Notice;

pub const COUNTRY_FALLBACK_NOTICE: &str =
    "Could not load the full country list. Showing a limited selection.";

/// Ticket for an outstanding country-list fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountriesFetch {
    pub generation: u64,
}

/// Ticket for an outstanding state fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFetch {
    pub generation: u64,
    pub country: LocationOption,
}

impl StateFetch {
    pub fn country_code(&self) -> &str {
        self.country.key()
    }
}

/// Ticket for an outstanding city fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityFetch {
    pub generation: u64,
    pub country: LocationOption,
    pub state: LocationOption,
}

impl CityFetch {
    pub fn country_code(&self) -> &str {
        self.country.key()
    }

    pub fn state_code(&self) -> &str {
        self.state.key()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationCascade {
    pub selection: SelectionState,
    pub countries: Vec<LocationOption>,
    pub states: Vec<LocationOption>,
    pub cities: Vec<LocationOption>,
    pub loading: LoadingFlags,
    /// Shown when the country list came from the fallback table
    pub country_notice: Option<Notice>,
    /// "No states/cities available" notice for the current selection
    pub subdivision_notice: Option<Notice>,
    countries_generation: u64,
    state_generation: u64,
    city_generation: u64,
}

impl LocationCascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_countries_load(&mut self) -> CountriesFetch {
        self.countries_generation += 1;
        self.loading.countries = true;
        CountriesFetch {
            generation: self.countries_generation,
        }
    }

    /// Returns false when the response was superseded and discarded
    pub fn apply_countries(&mut self, fetch: &CountriesFetch, list: CountryList) -> bool {
        if fetch.generation != self.countries_generation {
            return false;
        }
        self.countries = list.options;
        self.loading.countries = false;
        self.country_notice = list.fallback.then(|| Notice::info(COUNTRY_FALLBACK_NOTICE));
        true
    }

    /// Select a country by code; an empty or unknown code clears the selection.
    /// Returns the state fetch to run, if any.
    pub fn select_country(&mut self, code: &str) -> Option<StateFetch> {
        self.state_generation += 1;
        self.city_generation += 1;

        self.selection.state = None;
        self.selection.city = None;
        self.states.clear();
        self.cities.clear();
        self.loading.states = false;
        self.loading.cities = false;
        self.subdivision_notice = None;

        self.selection.country = find_option(&self.countries, code);
        let country = self.selection.country.clone()?;

        self.loading.states = true;
        Some(StateFetch {
            generation: self.state_generation,
            country,
        })
    }

    /// Returns false when the response was superseded and discarded
    pub fn apply_states(&mut self, fetch: &StateFetch, options: Vec<LocationOption>) -> bool {
        if fetch.generation != self.state_generation
            || self.selection.country.as_ref() != Some(&fetch.country)
        {
            return false;
        }

        self.states = options;
        self.loading.states = false;
        if self.states.is_empty() {
            self.subdivision_notice = Some(Notice::info(format!(
                "No states available for {}",
                fetch.country.name
            )));
        }
        true
    }

    /// Select a state by code; an empty or unknown code clears it.
    /// Returns the city fetch to run, if any.
    pub fn select_state(&mut self, code: &str) -> Option<CityFetch> {
        self.city_generation += 1;

        self.selection.city = None;
        self.cities.clear();
        self.loading.cities = false;
        self.subdivision_notice = None;

        let Some(country) = self.selection.country.clone() else {
            self.selection.state = None;
            return None;
        };

        self.selection.state = find_option(&self.states, code);
        let state = self.selection.state.clone()?;

        self.loading.cities = true;
        Some(CityFetch {
            generation: self.city_generation,
            country,
            state,
        })
    }

    /// Returns false when the response was superseded and discarded
    pub fn apply_cities(&mut self, fetch: &CityFetch, options: Vec<LocationOption>) -> bool {
        if fetch.generation != self.city_generation
            || self.selection.state.as_ref() != Some(&fetch.state)
        {
            return false;
        }

        self.cities = options;
        self.loading.cities = false;
        if self.cities.is_empty() {
            self.subdivision_notice = Some(Notice::info(format!(
                "No cities available for {}",
                fetch.state.name
            )));
        }
        true
    }

    pub fn select_city(&mut self, name: &str) {
        self.selection.city = if self.selection.state.is_some() {
            find_option(&self.cities, name)
        } else {
            None
        };
    }

    pub fn state_selector_disabled(&self) -> bool {
        self.selection.country.is_none() || self.loading.states
    }

    pub fn city_selector_disabled(&self) -> bool {
        self.selection.state.is_none() || self.loading.cities
    }

    /// State is required once the country has states, city once the state has
    /// cities; an outstanding fetch counts as "has" until it resolves
    pub fn requirements(&self) -> LocationRequirements {
        LocationRequirements {
            state: self.selection.country.is_some()
                && (self.loading.states || !self.states.is_empty()),
            city: self.selection.state.is_some()
                && (self.loading.cities || !self.cities.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cascade_with_countries() -> LocationCascade {
        let mut cascade = LocationCascade::new();
        let fetch = cascade.begin_countries_load();
        cascade.apply_countries(
            &fetch,
            CountryList {
                options: vec![
                    LocationOption::new("India", "IN"),
                    LocationOption::new("United Kingdom", "GB"),
                    LocationOption::new("United States", "US"),
                    LocationOption::new("Vatican City", "VA"),
                ],
                fallback: false,
            },
        );
        cascade
    }

    fn us_states() -> Vec<LocationOption> {
        vec![
            LocationOption::new("California", "CA"),
            LocationOption::new("Texas", "TX"),
        ]
    }

    fn fully_selected() -> LocationCascade {
        let mut cascade = cascade_with_countries();
        let states = cascade.select_country("US").unwrap();
        assert!(cascade.apply_states(&states, us_states()));
        let cities = cascade.select_state("CA").unwrap();
        assert!(cascade.apply_cities(
            &cities,
            vec![
                LocationOption::city("Los Angeles"),
                LocationOption::city("San Francisco")
            ]
        ));
        cascade.select_city("San Francisco");
        cascade
    }

    #[test]
    fn test_full_selection_path() {
        let cascade = fully_selected();
        assert_eq!(cascade.selection.phase(), SelectionPhase::FullySelected);
        assert_eq!(
            cascade.selection.city,
            Some(LocationOption::city("San Francisco"))
        );
        assert_eq!(cascade.loading, LoadingFlags::default());
        assert!(cascade.selection.is_consistent());
    }

    #[test]
    fn test_changing_country_resets_downstream() {
        let mut cascade = fully_selected();

        let fetch = cascade.select_country("GB");

        assert!(fetch.is_some());
        assert_eq!(cascade.selection.state, None);
        assert_eq!(cascade.selection.city, None);
        assert!(cascade.states.is_empty());
        assert!(cascade.cities.is_empty());
        assert!(cascade.loading.states);
        assert!(!cascade.loading.cities);
        assert!(cascade.state_selector_disabled());
        assert!(cascade.city_selector_disabled());
    }

    #[test]
    fn test_changing_state_resets_city() {
        let mut cascade = fully_selected();

        let fetch = cascade.select_state("TX").unwrap();

        assert_eq!(cascade.selection.city, None);
        assert!(cascade.cities.is_empty());
        assert!(cascade.loading.cities);
        assert_eq!(fetch.state_code(), "TX");
        assert_eq!(fetch.country_code(), "US");
    }

    #[test]
    fn test_clearing_country_returns_to_no_country() {
        let mut cascade = fully_selected();

        assert!(cascade.select_country("").is_none());

        assert_eq!(cascade.selection, SelectionState::default());
        assert_eq!(cascade.selection.phase(), SelectionPhase::NoCountry);
        assert!(cascade.states.is_empty());
        assert!(cascade.cities.is_empty());
        assert_eq!(cascade.loading, LoadingFlags::default());
    }

    #[test]
    fn test_stale_state_response_is_discarded() {
        let mut cascade = cascade_with_countries();
        let first = cascade.select_country("US").unwrap();
        let second = cascade.select_country("GB").unwrap();

        // Response for the earlier selection arrives late
        assert!(!cascade.apply_states(&first, us_states()));
        assert!(cascade.states.is_empty());
        assert!(cascade.loading.states);

        assert!(cascade.apply_states(
            &second,
            vec![LocationOption::new("England", "ENG")]
        ));
        assert_eq!(cascade.states.len(), 1);
        assert!(!cascade.loading.states);
    }

    #[test]
    fn test_stale_city_response_after_country_change_is_discarded() {
        let mut cascade = cascade_with_countries();
        let states = cascade.select_country("US").unwrap();
        cascade.apply_states(&states, us_states());
        let cities = cascade.select_state("CA").unwrap();

        // Country changes before the city fetch resolves
        let _ = cascade.select_country("IN");

        assert!(!cascade.apply_cities(&cities, vec![LocationOption::city("Los Angeles")]));
        assert!(cascade.cities.is_empty());
        assert_eq!(cascade.selection.state, None);
        assert!(cascade.selection.is_consistent());
    }

    #[test]
    fn test_reselecting_same_country_supersedes_previous_fetch() {
        let mut cascade = cascade_with_countries();
        let first = cascade.select_country("US").unwrap();
        let second = cascade.select_country("US").unwrap();

        assert!(!cascade.apply_states(&first, us_states()));
        assert!(cascade.apply_states(&second, us_states()));
    }

    #[test]
    fn test_empty_states_surface_notice_and_relax_requirements() {
        let mut cascade = cascade_with_countries();
        let fetch = cascade.select_country("VA").unwrap();

        // Still loading: state stays required
        assert!(cascade.requirements().state);

        assert!(cascade.apply_states(&fetch, Vec::new()));
        assert_eq!(
            cascade.subdivision_notice,
            Some(Notice::info("No states available for Vatican City"))
        );
        assert_eq!(
            cascade.requirements(),
            LocationRequirements {
                state: false,
                city: false
            }
        );
    }

    #[test]
    fn test_empty_cities_surface_notice() {
        let mut cascade = cascade_with_countries();
        let states = cascade.select_country("US").unwrap();
        cascade.apply_states(&states, us_states());
        let cities = cascade.select_state("TX").unwrap();
        cascade.apply_cities(&cities, Vec::new());

        assert_eq!(
            cascade.subdivision_notice,
            Some(Notice::info("No cities available for Texas"))
        );
        assert!(cascade.requirements().state);
        assert!(!cascade.requirements().city);
    }

    #[test]
    fn test_state_selection_without_country_is_ignored() {
        let mut cascade = cascade_with_countries();
        assert!(cascade.select_state("CA").is_none());
        assert_eq!(cascade.selection.state, None);
        cascade.select_city("Los Angeles");
        assert_eq!(cascade.selection.city, None);
    }

    #[test]
    fn test_invariants_hold_across_interleavings() {
        let mut cascade = cascade_with_countries();
        let mut pending_states = Vec::new();
        let mut pending_cities = Vec::new();

        for (step, code) in ["US", "GB", "", "US", "IN", "US"].iter().enumerate() {
            if let Some(fetch) = cascade.select_country(code) {
                pending_states.push(fetch);
            }
            // Resolve fetches out of order
            if step % 2 == 1 {
                while let Some(fetch) = pending_states.pop() {
                    cascade.apply_states(&fetch, us_states());
                    assert!(cascade.selection.is_consistent());
                }
            }
            if let Some(fetch) = cascade.select_state("CA") {
                pending_cities.push(fetch);
            }
            for fetch in pending_cities.drain(..).rev() {
                cascade.apply_cities(&fetch, vec![LocationOption::city("Los Angeles")]);
                cascade.select_city("Los Angeles");
                assert!(cascade.selection.is_consistent());
            }
            assert!(cascade.selection.is_consistent());
        }
    }

    #[test]
    fn test_countries_fallback_notice() {
        let mut cascade = LocationCascade::new();
        let stale = cascade.begin_countries_load();
        let fetch = cascade.begin_countries_load();

        assert!(!cascade.apply_countries(
            &stale,
            CountryList {
                options: Vec::new(),
                fallback: false
            }
        ));
        assert!(cascade.loading.countries);

        assert!(cascade.apply_countries(
            &fetch,
            CountryList {
                options: vec![LocationOption::new("India", "IN")],
                fallback: true
            }
        ));
        assert!(!cascade.loading.countries);
        assert_eq!(
            cascade.country_notice,
            Some(Notice::info(COUNTRY_FALLBACK_NOTICE))
        );
    }
}
