use crate::domain::entities::data_source::DataSourceDefinition;
use crate::domain::entities::indexer::{IndexerJob, IndexerStatus};
use crate::domain::entities::search_index::{
    CompressionTuning, HnswTuning, IndexSchema, VectorSearchConfig, VisionModelParameters,
};
use crate::domain::entities::skillset::SkillsetDefinition;
use crate::domain::error::DomainError;
use crate::domain::ports::search_admin::SearchAdmin;
use serde::Serialize;
use std::sync::Arc;

/// Everything needed to stand up the catalog pipeline on the search service.
#[derive(Debug, Clone)]
pub struct CatalogPlan {
    pub index_name: String,
    pub container_name: String,
    pub storage_connection_string: String,
    pub vision_endpoint: String,
    pub vision_api_key: String,
    pub vision_model_version: String,
    pub hnsw: HnswTuning,
    pub compression: Option<CompressionTuning>,
}

impl CatalogPlan {
    pub fn data_source_name(&self) -> String {
        format!("{}-blob", self.index_name)
    }

    pub fn skillset_name(&self) -> String {
        format!("{}-skillset", self.index_name)
    }

    pub fn indexer_name(&self) -> String {
        format!("{}-indexer", self.index_name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    pub data_source: String,
    pub index: String,
    pub skillset: String,
    pub indexer: String,
}

/// Runs the linear setup pipeline: data source, index, skillset, indexer,
/// then a run trigger. Every step is an upsert by name, so the whole pipeline
/// is safe to re-run.
pub struct ProvisionUseCase {
    admin: Arc<dyn SearchAdmin>,
}

impl ProvisionUseCase {
    pub fn new(admin: Arc<dyn SearchAdmin>) -> Self {
        Self { admin }
    }

    pub async fn execute(&self, plan: &CatalogPlan) -> Result<ProvisionReport, DomainError> {
        let data_source = DataSourceDefinition::blob(
            &plan.data_source_name(),
            &plan.container_name,
            &plan.storage_connection_string,
        );

        let vector_search = VectorSearchConfig::build(
            plan.hnsw,
            plan.compression,
            VisionModelParameters {
                model_version: plan.vision_model_version.clone(),
                resource_uri: plan.vision_endpoint.clone(),
                api_key: Some(plan.vision_api_key.clone()),
            },
        );
        let index = IndexSchema::fashion_catalog(&plan.index_name, vector_search);
        index.validate()?;

        let skillset = SkillsetDefinition::embedding(
            &plan.skillset_name(),
            &plan.vision_model_version,
            &plan.vision_api_key,
        );
        skillset.validate_against(&index)?;

        let indexer = IndexerJob::catalog(
            &plan.indexer_name(),
            &data_source.name,
            &skillset.name,
            &index.name,
        );

        self.admin.upsert_data_source(&data_source).await?;
        self.admin.upsert_index(&index).await?;
        self.admin.upsert_skillset(&skillset).await?;
        self.admin.upsert_indexer(&indexer).await?;
        self.admin.run_indexer(&indexer.name).await?;

        Ok(ProvisionReport {
            data_source: data_source.name,
            index: index.name,
            skillset: skillset.name,
            indexer: indexer.name,
        })
    }

    /// The only way to observe run completion; triggering never blocks.
    pub async fn status(&self, indexer_name: &str) -> Result<IndexerStatus, DomainError> {
        self.admin.indexer_status(indexer_name).await
    }
}
