use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const FIELD_ID: &str = "id";
pub const FIELD_CAPTION: &str = "caption";
pub const FIELD_IMAGE_URL: &str = "imageUrl";
pub const FIELD_CAPTION_VECTOR: &str = "captionVector";
pub const FIELD_IMAGE_VECTOR: &str = "imageVector";

/// Dimensionality fixed by the vision embedding model.
pub const VECTOR_DIMENSIONS: usize = 1024;

pub const HNSW_ALGORITHM: &str = "catalog-hnsw";
pub const HNSW_PROFILE: &str = "catalog-hnsw-profile";
pub const SCALAR_QUANTIZATION: &str = "catalog-scalar-quantization";
pub const VISION_VECTORIZER: &str = "catalog-vision-vectorizer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceMetric {
    Cosine,
    Euclidean,
    DotProduct,
}

/// Tunable ANN parameters, serialized verbatim into the algorithm section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HnswTuning {
    pub m: u32,
    pub ef_construction: u32,
    pub ef_search: u32,
    pub metric: DistanceMetric,
}

impl Default for HnswTuning {
    fn default() -> Self {
        Self {
            m: 4,
            ef_construction: 400,
            ef_search: 500,
            metric: DistanceMetric::Cosine,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HnswAlgorithm {
    pub name: String,
    pub kind: String,
    pub hnsw_parameters: HnswTuning,
}

/// Reduced-precision encoding of stored vectors. Final ranking can rerank the
/// oversampled candidate set with the full-precision originals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionTuning {
    pub rerank_with_original_vectors: bool,
    pub default_oversampling: u32,
}

impl Default for CompressionTuning {
    fn default() -> Self {
        Self {
            rerank_with_original_vectors: true,
            default_oversampling: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarQuantization {
    pub name: String,
    pub kind: String,
    pub rerank_with_original_vectors: bool,
    pub default_oversampling: u32,
    pub scalar_quantization_parameters: QuantizationParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantizationParameters {
    pub quantized_data_type: String,
}

/// External embedding model used at query time to vectorize raw text or image
/// input, so callers never precompute vectors themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionModelParameters {
    pub model_version: String,
    pub resource_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionVectorizer {
    pub name: String,
    pub kind: String,
    pub ai_services_vision_parameters: VisionModelParameters,
}

/// Named binding of algorithm + compression + vectorizer. Vector fields refer
/// to profiles by name; every name must resolve inside the same index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorSearchProfile {
    pub name: String,
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vectorizer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorSearchConfig {
    pub algorithms: Vec<HnswAlgorithm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compressions: Vec<ScalarQuantization>,
    pub vectorizers: Vec<VisionVectorizer>,
    pub profiles: Vec<VectorSearchProfile>,
}

impl VectorSearchConfig {
    /// One HNSW algorithm, optional int8 scalar quantization, one vision
    /// vectorizer, all bound into a single profile.
    pub fn build(
        tuning: HnswTuning,
        compression: Option<CompressionTuning>,
        vectorizer: VisionModelParameters,
    ) -> Self {
        let compressions: Vec<ScalarQuantization> = compression
            .into_iter()
            .map(|c| ScalarQuantization {
                name: SCALAR_QUANTIZATION.to_string(),
                kind: "scalarQuantization".to_string(),
                rerank_with_original_vectors: c.rerank_with_original_vectors,
                default_oversampling: c.default_oversampling,
                scalar_quantization_parameters: QuantizationParameters {
                    quantized_data_type: "int8".to_string(),
                },
            })
            .collect();

        Self {
            algorithms: vec![HnswAlgorithm {
                name: HNSW_ALGORITHM.to_string(),
                kind: "hnsw".to_string(),
                hnsw_parameters: tuning,
            }],
            profiles: vec![VectorSearchProfile {
                name: HNSW_PROFILE.to_string(),
                algorithm: HNSW_ALGORITHM.to_string(),
                compression: compressions.first().map(|c| c.name.clone()),
                vectorizer: Some(VISION_VECTORIZER.to_string()),
            }],
            compressions,
            vectorizers: vec![VisionVectorizer {
                name: VISION_VECTORIZER.to_string(),
                kind: "aiServicesVision".to_string(),
                ai_services_vision_parameters: vectorizer,
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub key: bool,
    pub searchable: bool,
    pub filterable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_search_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "Edm.String")]
    String,
    #[serde(rename = "Collection(Edm.Single)")]
    SingleCollection,
}

impl SearchField {
    pub fn key(name: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: FieldType::String,
            key: true,
            searchable: false,
            filterable: true,
            dimensions: None,
            vector_search_profile: None,
            stored: None,
        }
    }

    pub fn searchable(name: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: FieldType::String,
            key: false,
            searchable: true,
            filterable: false,
            dimensions: None,
            vector_search_profile: None,
            stored: None,
        }
    }

    /// Vector fields are searchable but not stored: the service keeps only the
    /// ANN structures, so documents come back without their embeddings.
    pub fn vector(name: &str, dimensions: usize, profile: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: FieldType::SingleCollection,
            key: false,
            searchable: true,
            filterable: false,
            dimensions: Some(dimensions),
            vector_search_profile: Some(profile.to_string()),
            stored: Some(false),
        }
    }

    fn is_vector(&self) -> bool {
        self.field_type == FieldType::SingleCollection
    }
}

/// Full index definition: field schema plus vector-search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSchema {
    pub name: String,
    pub fields: Vec<SearchField>,
    pub vector_search: VectorSearchConfig,
}

impl IndexSchema {
    /// The fixed catalog schema: id, caption, imageUrl, plus one vector field
    /// per enrichment output, all bound to the default profile.
    pub fn fashion_catalog(name: &str, vector_search: VectorSearchConfig) -> Self {
        Self {
            name: name.to_string(),
            fields: vec![
                SearchField::key(FIELD_ID),
                SearchField::searchable(FIELD_CAPTION),
                SearchField::searchable(FIELD_IMAGE_URL),
                SearchField::vector(FIELD_CAPTION_VECTOR, VECTOR_DIMENSIONS, HNSW_PROFILE),
                SearchField::vector(FIELD_IMAGE_VECTOR, VECTOR_DIMENSIONS, HNSW_PROFILE),
            ],
            vector_search,
        }
    }

    pub fn vector_field_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.is_vector())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Checks that every name reference resolves inside this definition.
    /// A dangling reference would only fail on the service side, so catch it
    /// before any network call.
    pub fn validate(&self) -> Result<(), DomainError> {
        let algorithms: HashSet<&str> = self
            .vector_search
            .algorithms
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        let compressions: HashSet<&str> = self
            .vector_search
            .compressions
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        let vectorizers: HashSet<&str> = self
            .vector_search
            .vectorizers
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        let profiles: HashSet<&str> = self
            .vector_search
            .profiles
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        for profile in &self.vector_search.profiles {
            if !algorithms.contains(profile.algorithm.as_str()) {
                return Err(DomainError::Configuration(format!(
                    "profile '{}' references unknown algorithm '{}'",
                    profile.name, profile.algorithm
                )));
            }
            if let Some(compression) = &profile.compression {
                if !compressions.contains(compression.as_str()) {
                    return Err(DomainError::Configuration(format!(
                        "profile '{}' references unknown compression '{}'",
                        profile.name, compression
                    )));
                }
            }
            if let Some(vectorizer) = &profile.vectorizer {
                if !vectorizers.contains(vectorizer.as_str()) {
                    return Err(DomainError::Configuration(format!(
                        "profile '{}' references unknown vectorizer '{}'",
                        profile.name, vectorizer
                    )));
                }
            }
        }

        for field in self.fields.iter().filter(|f| f.is_vector()) {
            match &field.vector_search_profile {
                Some(profile) if profiles.contains(profile.as_str()) => {}
                Some(profile) => {
                    return Err(DomainError::Configuration(format!(
                        "vector field '{}' references unknown profile '{}'",
                        field.name, profile
                    )))
                }
                None => {
                    return Err(DomainError::Configuration(format!(
                        "vector field '{}' has no vector search profile",
                        field.name
                    )))
                }
            }
            if field.dimensions.unwrap_or(0) == 0 {
                return Err(DomainError::Configuration(format!(
                    "vector field '{}' has no dimensions",
                    field.name
                )));
            }
        }

        Ok(())
    }
}
