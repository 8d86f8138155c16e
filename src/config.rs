use crate::application::provision::CatalogPlan;
use crate::domain::entities::search_index::{CompressionTuning, HnswTuning};
use crate::domain::error::DomainError;
use crate::domain::values::credential::SearchCredential;

/// Process configuration, resolved from the environment once at startup.
/// Missing required values fail here, before any network call.
#[derive(Debug, Clone)]
pub struct Settings {
    pub search_endpoint: String,
    pub use_identity: bool,
    pub search_api_key: Option<String>,
    pub search_access_token: Option<String>,
    pub index_name: String,
    pub storage_connection_string: String,
    pub container_name: String,
    pub vision_endpoint: String,
    pub vision_api_key: String,
    pub vision_model_version: String,
    pub openai_endpoint: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_deployment: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, DomainError> {
        let use_identity = match optional("LOOKBOOK_SEARCH_AUTH").as_deref() {
            None | Some("key") => false,
            Some("identity") => true,
            Some(other) => {
                return Err(DomainError::Configuration(format!(
                    "LOOKBOOK_SEARCH_AUTH must be 'key' or 'identity', got '{other}'"
                )))
            }
        };

        Ok(Self {
            search_endpoint: require("LOOKBOOK_SEARCH_ENDPOINT")?,
            use_identity,
            search_api_key: optional("LOOKBOOK_SEARCH_API_KEY"),
            search_access_token: optional("LOOKBOOK_SEARCH_ACCESS_TOKEN"),
            index_name: optional("LOOKBOOK_INDEX_NAME").unwrap_or_else(|| "fashion-catalog".into()),
            storage_connection_string: require("LOOKBOOK_BLOB_CONNECTION_STRING")?,
            container_name: require("LOOKBOOK_BLOB_CONTAINER")?,
            vision_endpoint: require("LOOKBOOK_VISION_ENDPOINT")?,
            vision_api_key: require("LOOKBOOK_VISION_API_KEY")?,
            vision_model_version: optional("LOOKBOOK_VISION_MODEL_VERSION")
                .unwrap_or_else(|| "2023-04-15".into()),
            openai_endpoint: optional("LOOKBOOK_OPENAI_ENDPOINT"),
            openai_api_key: optional("LOOKBOOK_OPENAI_API_KEY"),
            openai_deployment: optional("LOOKBOOK_OPENAI_DEPLOYMENT"),
        })
    }

    pub fn credential(&self) -> Result<SearchCredential, DomainError> {
        SearchCredential::resolve(
            self.use_identity,
            self.search_api_key.clone(),
            self.search_access_token.clone(),
        )
    }

    pub fn catalog_plan(&self) -> CatalogPlan {
        CatalogPlan {
            index_name: self.index_name.clone(),
            container_name: self.container_name.clone(),
            storage_connection_string: self.storage_connection_string.clone(),
            vision_endpoint: self.vision_endpoint.clone(),
            vision_api_key: self.vision_api_key.clone(),
            vision_model_version: self.vision_model_version.clone(),
            hnsw: HnswTuning::default(),
            compression: Some(CompressionTuning::default()),
        }
    }
}

fn require(name: &str) -> Result<String, DomainError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            DomainError::Configuration(format!("missing required environment variable {name}"))
        })
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
