use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::{ClientError, check_response};

pub const DEFAULT_CATFACT_API: &str = "https://catfact.ninja/facts";

/// Longest fact the public listing asks for unless told otherwise.
pub const DEFAULT_MAX_LENGTH: u32 = 70;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternetFact {
    pub fact: String,
    pub length: u32,
}

/// One page of the public cat-fact listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternetFactsPage {
    pub current_page: u32,

    pub data: Vec<InternetFact>,

    #[serde(default)]
    pub last_page: Option<u32>,

    #[serde(default)]
    pub next_page_url: Option<String>,

    #[serde(default)]
    pub prev_page_url: Option<String>,

    #[serde(default)]
    pub per_page: Option<u32>,

    #[serde(default)]
    pub total: Option<u32>,
}

impl InternetFactsPage {
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_page_url.is_some()
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.prev_page_url.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct CatFactClient {
    client: Client,
    base_url: Url,
}

impl CatFactClient {
    pub fn new(client: Client, api_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client,
            base_url: Url::parse(api_url)?,
        })
    }

    #[must_use]
    pub fn page_url(&self, page: u32, max_length: Option<u32>) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &page.max(1).to_string());
            if let Some(max) = max_length {
                query.append_pair("max_length", &max.to_string());
            }
        }
        url
    }

    pub async fn fetch_page(
        &self,
        page: u32,
        max_length: Option<u32>,
    ) -> Result<InternetFactsPage, ClientError> {
        let url = self.page_url(page, max_length);
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let page = check_response(response).await?.json().await?;
        Ok(page)
    }
}
