use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::reference;
use crate::features::location::LocationOption;
use crate::services::client::{
    build_http_client, get_json, with_timeout, ClientResult, RemoteCountry,
};
use crate::services::config::AuthConfig;

/// Raw location lookups; callers apply normalization, sorting and fallbacks
#[async_trait(?Send)]
pub trait LocationSource {
    async fn countries(&self) -> ClientResult<Vec<LocationOption>>;

    async fn states(&self, country_code: &str) -> ClientResult<Vec<LocationOption>>;

    async fn cities(
        &self,
        country_code: &str,
        state_code: &str,
    ) -> ClientResult<Vec<LocationOption>>;
}

/// Countries from the public country-list endpoint, states from ISO 3166-2, cities from bundled data
#[derive(Clone)]
pub struct HttpLocationSource {
    http_client: Client,
    config: AuthConfig,
}

impl HttpLocationSource {
    pub fn new(config: AuthConfig) -> ClientResult<Self> {
        Ok(Self {
            http_client: build_http_client()?,
            config,
        })
    }
}

#[async_trait(?Send)]
impl LocationSource for HttpLocationSource {
    #[instrument(skip(self), err)]
    async fn countries(&self) -> ClientResult<Vec<LocationOption>> {
        let remote: Vec<RemoteCountry> = with_timeout(
            "country list",
            self.config.request_timeout(),
            get_json(&self.http_client, &self.config.countries_endpoint),
        )
        .await?;

        debug!("Country endpoint returned {} entries", remote.len());
        Ok(remote
            .into_iter()
            .filter(|c| !c.cca2.trim().is_empty())
            .map(|c| LocationOption::new(c.name.common, c.cca2))
            .collect())
    }

    async fn states(&self, country_code: &str) -> ClientResult<Vec<LocationOption>> {
        Ok(reference::states(country_code))
    }

    async fn cities(
        &self,
        country_code: &str,
        state_code: &str,
    ) -> ClientResult<Vec<LocationOption>> {
        Ok(reference::cities(country_code, state_code))
    }
}
