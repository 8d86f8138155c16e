pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analyze::AnalyzeLookUseCase;
use crate::application::caption::{CaptionCatalogUseCase, CaptionReport};
use crate::application::provision::{CatalogPlan, ProvisionReport, ProvisionUseCase};
use crate::application::search::{LookQuery, SearchLookUseCase};
use crate::config::Settings;
use crate::domain::entities::catalog_document::SearchHit;
use crate::domain::entities::garment::GarmentItem;
use crate::domain::entities::indexer::IndexerStatus;
use crate::domain::error::DomainError;
use crate::domain::ports::captioner::Captioner;
use crate::domain::ports::garment_analyzer::GarmentAnalyzer;
use crate::domain::ports::search_admin::SearchAdmin;
use crate::domain::ports::searcher::Searcher;
use crate::infrastructure::openai::garment_analyzer::ChatGarmentAnalyzer;
use crate::infrastructure::search::admin::RestSearchAdmin;
use crate::infrastructure::search::query::RestSearcher;
use crate::infrastructure::vision::captioner::VisionCaptioner;
use std::sync::Arc;

pub struct Lookbook {
    plan: CatalogPlan,
    provision_uc: ProvisionUseCase,
    search_uc: SearchLookUseCase,
    caption_uc: CaptionCatalogUseCase,
    analyze_uc: Option<AnalyzeLookUseCase>,
}

impl Lookbook {
    pub fn from_env() -> Result<Self, DomainError> {
        let settings = Settings::from_env()?;
        let credential = settings.credential()?;

        let admin: Arc<dyn SearchAdmin> = Arc::new(RestSearchAdmin::new(
            settings.search_endpoint.clone(),
            credential.clone(),
        ));
        let searcher: Arc<dyn Searcher> = Arc::new(RestSearcher::new(
            settings.search_endpoint.clone(),
            settings.index_name.clone(),
            credential,
        ));
        let captioner: Arc<dyn Captioner> = Arc::new(VisionCaptioner::new(
            settings.vision_endpoint.clone(),
            settings.vision_api_key.clone(),
        ));
        let analyzer: Option<Arc<dyn GarmentAnalyzer>> = match (
            &settings.openai_endpoint,
            &settings.openai_api_key,
            &settings.openai_deployment,
        ) {
            (Some(endpoint), Some(key), Some(deployment)) => Some(Arc::new(
                ChatGarmentAnalyzer::new(endpoint.clone(), key.clone(), deployment.clone()),
            )),
            _ => None,
        };

        Ok(Self::with_ports(
            settings.catalog_plan(),
            admin,
            searcher,
            captioner,
            analyzer,
        ))
    }

    pub fn with_ports(
        plan: CatalogPlan,
        admin: Arc<dyn SearchAdmin>,
        searcher: Arc<dyn Searcher>,
        captioner: Arc<dyn Captioner>,
        analyzer: Option<Arc<dyn GarmentAnalyzer>>,
    ) -> Self {
        Self {
            plan,
            provision_uc: ProvisionUseCase::new(admin),
            search_uc: SearchLookUseCase::new(searcher),
            caption_uc: CaptionCatalogUseCase::new(captioner),
            analyze_uc: analyzer.map(AnalyzeLookUseCase::new),
        }
    }

    // Delegating methods
    pub async fn provision(&self) -> Result<ProvisionReport, DomainError> {
        self.provision_uc.execute(&self.plan).await
    }

    pub async fn indexer_status(&self) -> Result<IndexerStatus, DomainError> {
        self.provision_uc.status(&self.plan.indexer_name()).await
    }

    pub async fn search(&self, look: LookQuery) -> Result<Vec<SearchHit>, DomainError> {
        self.search_uc.execute(look).await
    }

    pub async fn caption_catalog(&self, image_urls: &[String]) -> Result<CaptionReport, DomainError> {
        self.caption_uc.execute(image_urls).await
    }

    pub async fn analyze(&self, image: &[u8]) -> Result<Vec<GarmentItem>, DomainError> {
        match &self.analyze_uc {
            Some(uc) => uc.execute(image).await,
            None => Err(DomainError::Configuration(
                "garment analysis requires LOOKBOOK_OPENAI_ENDPOINT, LOOKBOOK_OPENAI_API_KEY and LOOKBOOK_OPENAI_DEPLOYMENT"
                    .to_string(),
            )),
        }
    }
}
