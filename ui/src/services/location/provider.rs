//! Location data provider
//!
//! Wraps a [`LocationSource`] with the behaviour callers rely on: country
//! lists never fail (the static fallback stands in), subdivision lookups
//! resolve alias codes and come back sorted, and a failed subdivision lookup
//! is an empty list rather than an error.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use super::alias::{normalize_country_code, normalize_state_code};
use super::fallback;
use super::source::LocationSource;
use crate::features::location::{sort_by_name, CountryList, LocationOption};
use crate::services::events::{AuthEvent, SharedEventHandler};

const CACHE_CAPACITY: usize = 128;

pub struct LocationProvider<S: LocationSource> {
    source: S,
    events: SharedEventHandler,
    cache: Arc<Mutex<LruCache<String, Vec<LocationOption>>>>,
}

impl<S: LocationSource> LocationProvider<S> {
    pub fn new(source: S, events: SharedEventHandler) -> Self {
        let capacity = NonZeroUsize::new(CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            source,
            events,
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Country options plus whether the fallback table was used
    pub async fn load_countries(&self) -> CountryList {
        match self.source.countries().await {
            Ok(mut options) if !options.is_empty() => {
                sort_by_name(&mut options);
                self.events.handle_event(AuthEvent::CountriesLoaded {
                    count: options.len(),
                    fallback: false,
                });
                CountryList {
                    options,
                    fallback: false,
                }
            }
            Ok(_) => {
                warn!("Country list came back empty, using fallback");
                self.fallback_countries()
            }
            Err(e) => {
                warn!("Country list fetch failed, using fallback: {}", e);
                self.events.handle_event(AuthEvent::LocationFetchFailed {
                    scope: "countries".to_string(),
                    error: e.to_string(),
                });
                self.fallback_countries()
            }
        }
    }

    pub async fn fetch_countries(&self) -> Vec<LocationOption> {
        self.load_countries().await.options
    }

    pub async fn fetch_states(&self, country_code: &str) -> Vec<LocationOption> {
        let country = normalize_country_code(country_code);
        if country.is_empty() {
            return Vec::new();
        }
        if let Some(hit) = self.cached(&country) {
            return hit;
        }

        match self.source.states(&country).await {
            Ok(states) => {
                let states = self.with_fallback(&country, states, || fallback::states(&country));
                self.remember(country, states.clone());
                states
            }
            Err(e) => {
                self.report_failure(&country, &e.to_string());
                Vec::new()
            }
        }
    }

    pub async fn fetch_cities(&self, country_code: &str, state_code: &str) -> Vec<LocationOption> {
        let country = normalize_country_code(country_code);
        let state = normalize_state_code(state_code);
        if country.is_empty() || state.is_empty() {
            return Vec::new();
        }
        let scope = format!("{}/{}", country, state);
        if let Some(hit) = self.cached(&scope) {
            return hit;
        }

        match self.source.cities(&country, &state).await {
            Ok(cities) => {
                let cities =
                    self.with_fallback(&scope, cities, || fallback::cities(&country, &state));
                self.remember(scope, cities.clone());
                cities
            }
            Err(e) => {
                self.report_failure(&scope, &e.to_string());
                Vec::new()
            }
        }
    }

    fn fallback_countries(&self) -> CountryList {
        let options = fallback::countries();
        self.events.handle_event(AuthEvent::CountriesLoaded {
            count: options.len(),
            fallback: true,
        });
        CountryList {
            options,
            fallback: true,
        }
    }

    fn with_fallback(
        &self,
        scope: &str,
        mut options: Vec<LocationOption>,
        fallback: impl FnOnce() -> Vec<LocationOption>,
    ) -> Vec<LocationOption> {
        if options.is_empty() {
            options = fallback();
            if !options.is_empty() {
                info!("Using {} fallback entries for {}", options.len(), scope);
                self.events.handle_event(AuthEvent::FallbackLocationsUsed {
                    scope: scope.to_string(),
                    count: options.len(),
                });
            }
        }
        sort_by_name(&mut options);
        options
    }

    fn report_failure(&self, scope: &str, error: &str) {
        warn!("Location lookup for {} failed: {}", scope, error);
        self.events.handle_event(AuthEvent::LocationFetchFailed {
            scope: scope.to_string(),
            error: error.to_string(),
        });
    }

    fn cached(&self, key: &str) -> Option<Vec<LocationOption>> {
        let mut cache = self.cache.lock().ok()?;
        cache.get(key).cloned()
    }

    fn remember(&self, key: String, options: Vec<LocationOption>) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(key, options);
        }
    }
}
