use crate::domain::error::DomainError;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Reference to a query image, either by URL or as inline bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageInput {
    Url(String),
    Binary(Vec<u8>),
}

/// One vector sub-query. The literal input is vectorized on the service side
/// by the index's configured vectorizer; the caller never precomputes
/// embeddings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VectorQuery {
    #[serde(rename_all = "camelCase")]
    Text {
        text: String,
        k: usize,
        fields: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    ImageUrl {
        url: String,
        k: usize,
        fields: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    ImageBinary {
        base64_image: String,
        k: usize,
        fields: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<f64>,
    },
}

impl VectorQuery {
    pub fn k(&self) -> usize {
        match self {
            VectorQuery::Text { k, .. }
            | VectorQuery::ImageUrl { k, .. }
            | VectorQuery::ImageBinary { k, .. } => *k,
        }
    }

    pub fn fields(&self) -> &str {
        match self {
            VectorQuery::Text { fields, .. }
            | VectorQuery::ImageUrl { fields, .. }
            | VectorQuery::ImageBinary { fields, .. } => fields,
        }
    }

    /// Relative weight; sub-queries without an explicit weight count equally.
    pub fn weight(&self) -> f64 {
        match self {
            VectorQuery::Text { weight, .. }
            | VectorQuery::ImageUrl { weight, .. }
            | VectorQuery::ImageBinary { weight, .. } => weight.unwrap_or(1.0),
        }
    }
}

/// A hybrid query: up to one text-vector sub-query, up to one image-vector
/// sub-query, and optional plain search text blended into the ranking.
/// Vector-only is the default path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub vector_queries: Vec<VectorQuery>,
    pub top: usize,
}

impl HybridQuery {
    pub fn vector_only(top: usize) -> Self {
        Self {
            search: None,
            vector_queries: Vec::new(),
            top,
        }
    }

    pub fn with_search_text(mut self, text: &str) -> Self {
        self.search = Some(text.to_string());
        self
    }

    pub fn with_text_query(mut self, text: &str, k: usize, field: &str, weight: Option<f64>) -> Self {
        self.vector_queries.push(VectorQuery::Text {
            text: text.to_string(),
            k,
            fields: field.to_string(),
            weight,
        });
        self
    }

    pub fn with_image_query(
        mut self,
        image: ImageInput,
        k: usize,
        field: &str,
        weight: Option<f64>,
    ) -> Self {
        let query = match image {
            ImageInput::Url(url) => VectorQuery::ImageUrl {
                url,
                k,
                fields: field.to_string(),
                weight,
            },
            ImageInput::Binary(bytes) => VectorQuery::ImageBinary {
                base64_image: base64::engine::general_purpose::STANDARD.encode(bytes),
                k,
                fields: field.to_string(),
                weight,
            },
        };
        self.vector_queries.push(query);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.vector_queries.is_empty() && self.search.is_none() {
            return Err(DomainError::Query(
                "a hybrid query needs at least one vector sub-query or search text".to_string(),
            ));
        }
        if self.top == 0 {
            return Err(DomainError::Query("top must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_only_wire_shape() {
        let query = HybridQuery::vector_only(3)
            .with_text_query("shoes for running", 5, "captionVector", None)
            .with_image_query(
                ImageInput::Url("https://example.com/shoe.jpg".into()),
                5,
                "imageVector",
                Some(100.0),
            );
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("search").is_none());
        assert_eq!(json["top"], 3);
        let queries = json["vectorQueries"].as_array().unwrap();
        assert_eq!(queries[0]["kind"], "text");
        assert_eq!(queries[0]["k"], 5);
        assert_eq!(queries[0]["fields"], "captionVector");
        assert!(queries[0].get("weight").is_none());
        assert_eq!(queries[1]["kind"], "imageUrl");
        assert_eq!(queries[1]["weight"], 100.0);
    }

    #[test]
    fn test_binary_image_is_base64_encoded() {
        let query = HybridQuery::vector_only(3).with_image_query(
            ImageInput::Binary(vec![0xff, 0xd8, 0xff]),
            5,
            "imageVector",
            None,
        );
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["vectorQueries"][0]["kind"], "imageBinary");
        assert_eq!(json["vectorQueries"][0]["base64Image"], "/9j/");
    }

    #[test]
    fn test_search_text_blending_is_additive() {
        let query = HybridQuery::vector_only(3)
            .with_text_query("sneaker", 5, "captionVector", None)
            .with_search_text("red sneaker");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["search"], "red sneaker");
    }

    #[test]
    fn test_empty_query_is_invalid() {
        let err = HybridQuery::vector_only(3).validate().unwrap_err();
        assert!(matches!(err, DomainError::Query(_)));
    }

    #[test]
    fn test_default_weight_is_equal() {
        let query = HybridQuery::vector_only(3).with_text_query("x", 5, "captionVector", None);
        assert_eq!(query.vector_queries[0].weight(), 1.0);
    }
}
