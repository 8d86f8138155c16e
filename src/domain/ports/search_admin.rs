use crate::domain::entities::data_source::DataSourceDefinition;
use crate::domain::entities::indexer::{IndexerJob, IndexerStatus};
use crate::domain::entities::search_index::IndexSchema;
use crate::domain::entities::skillset::SkillsetDefinition;
use crate::domain::error::DomainError;

/// Administration surface of the search service. Every upsert is
/// create-or-update by name, so retries after transient failures are safe.
#[async_trait::async_trait]
pub trait SearchAdmin: Send + Sync {
    async fn upsert_data_source(&self, definition: &DataSourceDefinition) -> Result<(), DomainError>;
    async fn upsert_index(&self, schema: &IndexSchema) -> Result<(), DomainError>;
    async fn upsert_skillset(&self, skillset: &SkillsetDefinition) -> Result<(), DomainError>;
    async fn upsert_indexer(&self, job: &IndexerJob) -> Result<(), DomainError>;

    /// Fire-and-forget: the run proceeds asynchronously on the service side.
    /// Completion is only observable through `indexer_status`.
    async fn run_indexer(&self, name: &str) -> Result<(), DomainError>;
    async fn indexer_status(&self, name: &str) -> Result<IndexerStatus, DomainError>;
}
