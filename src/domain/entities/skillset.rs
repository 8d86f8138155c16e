use crate::domain::entities::search_index::{
    IndexSchema, FIELD_CAPTION, FIELD_CAPTION_VECTOR, FIELD_IMAGE_URL, FIELD_IMAGE_VECTOR,
};
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

const VECTORIZE_SKILL_TYPE: &str = "#Microsoft.Skills.Vision.VectorizeSkill";
const COGNITIVE_KEY_TYPE: &str = "#Microsoft.Azure.Search.CognitiveServicesByKey";

/// One enrichment step: embed a source field into a target vector field at
/// indexing time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionVectorizeSkill {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    pub name: String,
    pub description: String,
    pub context: String,
    pub model_version: String,
    pub inputs: Vec<InputMapping>,
    pub outputs: Vec<OutputMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputMapping {
    pub name: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputMapping {
    pub name: String,
    pub target_name: String,
}

impl VisionVectorizeSkill {
    /// caption text -> captionVector
    pub fn text(model_version: &str) -> Self {
        Self::new(
            "text-embedding-skill",
            "Generates embeddings for caption text",
            model_version,
            "text",
            &format!("/document/{FIELD_CAPTION}"),
            FIELD_CAPTION_VECTOR,
        )
    }

    /// image URL -> imageVector
    pub fn image(model_version: &str) -> Self {
        Self::new(
            "image-embedding-skill",
            "Generates embeddings for catalog images",
            model_version,
            "url",
            &format!("/document/{FIELD_IMAGE_URL}"),
            FIELD_IMAGE_VECTOR,
        )
    }

    fn new(
        name: &str,
        description: &str,
        model_version: &str,
        input_name: &str,
        source: &str,
        target: &str,
    ) -> Self {
        Self {
            odata_type: VECTORIZE_SKILL_TYPE.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            context: "/document".to_string(),
            model_version: model_version.to_string(),
            inputs: vec![InputMapping {
                name: input_name.to_string(),
                source: source.to_string(),
            }],
            outputs: vec![OutputMapping {
                name: "vector".to_string(),
                target_name: target.to_string(),
            }],
        }
    }
}

/// Credential for the account that authorizes enrichment calls. The definition
/// upsert only validates shape; a bad key surfaces when the indexer runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveServicesKey {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    pub description: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsetDefinition {
    pub name: String,
    pub description: String,
    pub skills: Vec<VisionVectorizeSkill>,
    pub cognitive_services: CognitiveServicesKey,
}

impl SkillsetDefinition {
    pub fn embedding(name: &str, model_version: &str, cognitive_key: &str) -> Self {
        Self {
            name: name.to_string(),
            description: "Skillset for generating catalog embeddings".to_string(),
            skills: vec![
                VisionVectorizeSkill::text(model_version),
                VisionVectorizeSkill::image(model_version),
            ],
            cognitive_services: CognitiveServicesKey {
                odata_type: COGNITIVE_KEY_TYPE.to_string(),
                description: "Vision multi-service account".to_string(),
                key: cognitive_key.to_string(),
            },
        }
    }

    /// Every output target must be a vector field of the paired index, or the
    /// enrichment silently populates nothing.
    pub fn validate_against(&self, index: &IndexSchema) -> Result<(), DomainError> {
        let vector_fields = index.vector_field_names();
        for skill in &self.skills {
            for output in &skill.outputs {
                if !vector_fields.contains(&output.target_name.as_str()) {
                    return Err(DomainError::Configuration(format!(
                        "skill '{}' targets '{}', which is not a vector field of index '{}'",
                        skill.name, output.target_name, index.name
                    )));
                }
            }
        }
        Ok(())
    }
}
