use serde::{Deserialize, Serialize};

/// Named connection from the search service to a storage container.
/// Upserted by name; a repeat upsert replaces the prior definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub credentials: DataSourceCredentials,
    pub container: DataContainer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceCredentials {
    pub connection_string: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataContainer {
    pub name: String,
}

impl DataSourceDefinition {
    pub fn blob(name: &str, container: &str, connection_string: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: "azureblob".to_string(),
            credentials: DataSourceCredentials {
                connection_string: connection_string.to_string(),
            },
            container: DataContainer {
                name: container.to_string(),
            },
        }
    }
}
