use crate::domain::entities::catalog_document::CatalogDocument;
use crate::domain::error::DomainError;
use crate::domain::ports::captioner::Captioner;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct CaptionFailure {
    pub image_url: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaptionReport {
    pub documents: Vec<CatalogDocument>,
    pub failures: Vec<CaptionFailure>,
}

/// Captions catalog images one by one and assembles the documents the
/// indexer's `jsonArray` parsing mode expects. A failed image is reported and
/// skipped rather than aborting the whole batch.
pub struct CaptionCatalogUseCase {
    captioner: Arc<dyn Captioner>,
}

impl CaptionCatalogUseCase {
    pub fn new(captioner: Arc<dyn Captioner>) -> Self {
        Self { captioner }
    }

    pub async fn execute(&self, image_urls: &[String]) -> Result<CaptionReport, DomainError> {
        let mut documents = Vec::with_capacity(image_urls.len());
        let mut failures = Vec::new();

        for url in image_urls {
            match self.captioner.caption(url).await {
                Ok(caption) => documents.push(CatalogDocument::new(url.clone(), caption)),
                Err(e) => failures.push(CaptionFailure {
                    image_url: url.clone(),
                    error: e.to_string(),
                }),
            }
        }

        Ok(CaptionReport {
            documents,
            failures,
        })
    }
}
