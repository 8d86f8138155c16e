use crate::domain::entities::catalog_document::SearchHit;
use crate::domain::error::DomainError;
use crate::domain::ports::searcher::Searcher;
use crate::domain::values::credential::SearchCredential;
use crate::domain::values::hybrid_query::HybridQuery;
use crate::infrastructure::search::{authorize, API_VERSION};
use reqwest::Client;
use serde::Deserialize;

/// REST client for the query surface of one search index.
pub struct RestSearcher {
    client: Client,
    endpoint: String,
    index_name: String,
    credential: SearchCredential,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    value: Vec<RawHit>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHit {
    #[serde(rename = "@search.score")]
    score: f64,
    #[serde(default)]
    id: String,
    #[serde(default)]
    caption: String,
    #[serde(default)]
    image_url: String,
}

impl From<RawHit> for SearchHit {
    fn from(raw: RawHit) -> Self {
        Self {
            id: raw.id,
            caption: raw.caption,
            image_url: raw.image_url,
            score: raw.score,
        }
    }
}

impl RestSearcher {
    pub fn new(endpoint: String, index_name: String, credential: SearchCredential) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            index_name,
            credential,
        }
    }
}

#[async_trait::async_trait]
impl Searcher for RestSearcher {
    async fn search(&self, query: &HybridQuery) -> Result<Vec<SearchHit>, DomainError> {
        let url = format!(
            "{}/indexes('{}')/docs/search?api-version={}",
            self.endpoint, self.index_name, API_VERSION
        );

        let response = authorize(self.client.post(url), &self.credential)
            .json(query)
            .send()
            .await
            .map_err(|e| DomainError::Query(format!("search call failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Query(format!("search {status}: {body}")));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("search response: {e}")))?;
        Ok(body.value.into_iter().map(SearchHit::from).collect())
    }
}
