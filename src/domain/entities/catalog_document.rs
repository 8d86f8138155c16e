use serde::{Deserialize, Serialize};

/// One catalog record in the shape the indexer's `jsonArray` parsing mode
/// consumes. The vector fields are populated by the enrichment pipeline on the
/// service side, never authored locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub id: String,
    pub image_url: String,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_vector: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_vector: Option<Vec<f32>>,
}

impl CatalogDocument {
    pub fn new(image_url: String, caption: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            image_url,
            caption,
            caption_vector: None,
            image_vector: None,
        }
    }
}

/// A search result with the relevance score reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub caption: String,
    pub image_url: String,
    pub score: f64,
}
