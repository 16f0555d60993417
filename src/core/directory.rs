use crate::domain::model::{City, Region};
use crate::domain::ports::RegionDirectory;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub const IBGE_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Directory client over the IBGE localities API. The region list is fetched
/// once per process; city lists are fetched lazily per region short code and
/// kept for the session. Only successful responses are cached.
pub struct IbgeDirectory {
    client: Client,
    base_url: String,
    regions: Mutex<Option<Vec<Region>>>,
    cities: Mutex<HashMap<String, Vec<City>>>,
}

impl IbgeDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            regions: Mutex::new(None),
            cities: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for IbgeDirectory {
    fn default() -> Self {
        Self::new(IBGE_BASE_URL)
    }
}

#[async_trait]
impl RegionDirectory for IbgeDirectory {
    async fn list_regions(&self) -> Result<Vec<Region>> {
        let mut cached = self.regions.lock().await;
        if let Some(regions) = cached.as_ref() {
            return Ok(regions.clone());
        }

        let url = format!("{}/estados?orderBy=nome", self.base_url);
        tracing::debug!("Fetching region list from {}", url);
        let response = self.client.get(&url).send().await?;
        tracing::debug!("Region list response status: {}", response.status());

        let mut regions: Vec<Region> = response.error_for_status()?.json().await?;
        // the service honors orderBy, but the display order is our contract
        regions.sort_by(|a, b| a.name.cmp(&b.name));

        *cached = Some(regions.clone());
        Ok(regions)
    }

    async fn list_cities(&self, region_short_code: &str) -> Result<Vec<City>> {
        {
            let cached = self.cities.lock().await;
            if let Some(cities) = cached.get(region_short_code) {
                return Ok(cities.clone());
            }
        }

        // lock released above: concurrent fetches for different region codes
        // (origin vs destination) must not serialize on the cache
        let url = format!("{}/estados/{}/municipios", self.base_url, region_short_code);
        tracing::debug!("Fetching city list from {}", url);
        let cities: Vec<City> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        self.cities
            .lock()
            .await
            .insert(region_short_code.to_string(), cities.clone());
        Ok(cities)
    }
}
