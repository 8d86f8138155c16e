use crate::domain::error::DomainError;

/// Identifies fashion items and attributes in a photo via a vision-capable
/// chat completion model. Returns the raw line-per-item response text.
#[async_trait::async_trait]
pub trait GarmentAnalyzer: Send + Sync {
    async fn analyze(&self, image: &[u8]) -> Result<String, DomainError>;
}
