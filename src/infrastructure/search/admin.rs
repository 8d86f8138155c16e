use crate::domain::entities::data_source::DataSourceDefinition;
use crate::domain::entities::indexer::{IndexerJob, IndexerStatus};
use crate::domain::entities::search_index::IndexSchema;
use crate::domain::entities::skillset::SkillsetDefinition;
use crate::domain::error::DomainError;
use crate::domain::ports::search_admin::SearchAdmin;
use crate::domain::values::credential::SearchCredential;
use crate::infrastructure::search::{authorize, API_VERSION};
use reqwest::{Client, StatusCode};
use serde::Serialize;

/// REST client for the administration surface of the search service.
pub struct RestSearchAdmin {
    client: Client,
    endpoint: String,
    credential: SearchCredential,
}

impl RestSearchAdmin {
    pub fn new(endpoint: String, credential: SearchCredential) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credential,
        }
    }

    fn resource_url(&self, collection: &str, name: &str) -> String {
        format!(
            "{}/{}('{}')?api-version={}",
            self.endpoint, collection, name, API_VERSION
        )
    }

    async fn upsert<T: Serialize>(
        &self,
        collection: &str,
        name: &str,
        body: &T,
    ) -> Result<(), DomainError> {
        let response = authorize(
            self.client.put(self.resource_url(collection, name)),
            &self.credential,
        )
        .json(body)
        .send()
        .await
        .map_err(|e| DomainError::Provisioning(format!("{collection} upsert failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Provisioning(format!(
                "{collection} upsert {status}: {body}"
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SearchAdmin for RestSearchAdmin {
    async fn upsert_data_source(&self, definition: &DataSourceDefinition) -> Result<(), DomainError> {
        self.upsert("datasources", &definition.name, definition).await
    }

    async fn upsert_index(&self, schema: &IndexSchema) -> Result<(), DomainError> {
        self.upsert("indexes", &schema.name, schema).await
    }

    async fn upsert_skillset(&self, skillset: &SkillsetDefinition) -> Result<(), DomainError> {
        self.upsert("skillsets", &skillset.name, skillset).await
    }

    async fn upsert_indexer(&self, job: &IndexerJob) -> Result<(), DomainError> {
        self.upsert("indexers", &job.name, job).await
    }

    async fn run_indexer(&self, name: &str) -> Result<(), DomainError> {
        let url = format!(
            "{}/indexers('{}')/search.run?api-version={}",
            self.endpoint, name, API_VERSION
        );
        let response = authorize(self.client.post(url), &self.credential)
            .send()
            .await
            .map_err(|e| DomainError::RunTrigger(format!("run trigger failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::RunTrigger(format!(
                "a previous run of '{name}' is still active: {body}"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::RunTrigger(format!("run trigger {status}: {body}")));
        }
        Ok(())
    }

    async fn indexer_status(&self, name: &str) -> Result<IndexerStatus, DomainError> {
        let url = format!(
            "{}/indexers('{}')/search.status?api-version={}",
            self.endpoint, name, API_VERSION
        );
        let response = authorize(self.client.get(url), &self.credential)
            .send()
            .await
            .map_err(|e| DomainError::Provisioning(format!("status query failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Provisioning(format!("status query {status}: {body}")));
        }

        response
            .json::<IndexerStatus>()
            .await
            .map_err(|e| DomainError::Parse(format!("status response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_shape() {
        let admin = RestSearchAdmin::new(
            "https://search.example.net/".into(),
            SearchCredential::ApiKey("k".into()),
        );
        assert_eq!(
            admin.resource_url("indexes", "fashion-catalog"),
            format!("https://search.example.net/indexes('fashion-catalog')?api-version={API_VERSION}")
        );
    }
}
