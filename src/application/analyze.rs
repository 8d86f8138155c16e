use crate::domain::entities::garment::GarmentItem;
use crate::domain::error::DomainError;
use crate::domain::ports::garment_analyzer::GarmentAnalyzer;
use std::sync::Arc;

/// Sends an uploaded photo to the analysis model and parses the response into
/// structured garment records.
pub struct AnalyzeLookUseCase {
    analyzer: Arc<dyn GarmentAnalyzer>,
}

impl AnalyzeLookUseCase {
    pub fn new(analyzer: Arc<dyn GarmentAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub async fn execute(&self, image: &[u8]) -> Result<Vec<GarmentItem>, DomainError> {
        let content = self.analyzer.analyze(image).await?;
        Ok(GarmentItem::parse_report(&content))
    }
}
