use crate::domain::entities::catalog_document::SearchHit;
use crate::domain::entities::search_index::{FIELD_CAPTION_VECTOR, FIELD_IMAGE_VECTOR};
use crate::domain::error::DomainError;
use crate::domain::ports::searcher::Searcher;
use crate::domain::values::hybrid_query::{HybridQuery, ImageInput};
use std::sync::Arc;

/// Caller-level description of a "shop the look" query.
#[derive(Debug, Clone)]
pub struct LookQuery {
    pub text: Option<String>,
    pub image: Option<ImageInput>,
    pub search_text: Option<String>,
    pub k: usize,
    pub top: usize,
    pub text_weight: Option<f64>,
    pub image_weight: Option<f64>,
}

impl LookQuery {
    pub fn text(text: &str, k: usize, top: usize) -> Self {
        Self {
            text: Some(text.to_string()),
            image: None,
            search_text: None,
            k,
            top,
            text_weight: None,
            image_weight: None,
        }
    }
}

pub struct SearchLookUseCase {
    searcher: Arc<dyn Searcher>,
}

impl SearchLookUseCase {
    pub fn new(searcher: Arc<dyn Searcher>) -> Self {
        Self { searcher }
    }

    pub async fn execute(&self, look: LookQuery) -> Result<Vec<SearchHit>, DomainError> {
        let mut query = HybridQuery::vector_only(look.top);
        if let Some(text) = &look.text {
            query = query.with_text_query(text, look.k, FIELD_CAPTION_VECTOR, look.text_weight);
        }
        if let Some(image) = look.image {
            query = query.with_image_query(image, look.k, FIELD_IMAGE_VECTOR, look.image_weight);
        }
        if let Some(search_text) = &look.search_text {
            query = query.with_search_text(search_text);
        }
        query.validate()?;
        self.searcher.search(&query).await
    }
}
