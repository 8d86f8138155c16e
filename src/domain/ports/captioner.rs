use crate::domain::error::DomainError;

/// Generates a natural-language caption for one image.
#[async_trait::async_trait]
pub trait Captioner: Send + Sync {
    async fn caption(&self, image_url: &str) -> Result<String, DomainError>;
}
