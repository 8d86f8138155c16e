use crate::domain::entities::search_index::{FIELD_CAPTION_VECTOR, FIELD_ID, FIELD_IMAGE_VECTOR};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the indexer interprets blob content. Must match the actual content
/// shape, or every document in the run fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParsingMode {
    Default,
    Json,
    JsonArray,
    JsonLines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexingParameters {
    pub configuration: IndexingConfiguration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexingConfiguration {
    pub parsing_mode: ParsingMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub source_field_name: String,
    pub target_field_name: String,
}

impl FieldMapping {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source_field_name: source.to_string(),
            target_field_name: target.to_string(),
        }
    }
}

/// Binds data source + skillset + index into a runnable job. Upserted by
/// name; execution is triggered separately and runs asynchronously on the
/// service side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerJob {
    pub name: String,
    pub description: String,
    pub data_source_name: String,
    pub skillset_name: String,
    pub target_index_name: String,
    pub parameters: IndexingParameters,
    pub field_mappings: Vec<FieldMapping>,
    pub output_field_mappings: Vec<FieldMapping>,
}

impl IndexerJob {
    pub fn catalog(name: &str, data_source: &str, skillset: &str, index: &str) -> Self {
        Self {
            name: name.to_string(),
            description: "Indexes catalog documents and generates embeddings".to_string(),
            data_source_name: data_source.to_string(),
            skillset_name: skillset.to_string(),
            target_index_name: index.to_string(),
            parameters: IndexingParameters {
                configuration: IndexingConfiguration {
                    parsing_mode: ParsingMode::JsonArray,
                },
            },
            field_mappings: vec![FieldMapping::new(FIELD_ID, FIELD_ID)],
            output_field_mappings: vec![
                FieldMapping::new(
                    &format!("/document/{FIELD_CAPTION_VECTOR}"),
                    FIELD_CAPTION_VECTOR,
                ),
                FieldMapping::new(
                    &format!("/document/{FIELD_IMAGE_VECTOR}"),
                    FIELD_IMAGE_VECTOR,
                ),
            ],
        }
    }
}

/// Overall indexer state as reported by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndexerState {
    Running,
    Error,
    #[serde(other)]
    Unknown,
}

/// Outcome of a single execution, as reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunOutcome {
    InProgress,
    Success,
    TransientFailure,
    PersistentFailure,
    Reset,
    #[serde(other)]
    Unknown,
}

/// Caller-facing run state, including "no run has happened yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    Success,
    TransientFailure,
    PersistentFailure,
    Reset,
    Unknown,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::NotStarted => write!(f, "not-started"),
            RunState::Running => write!(f, "running"),
            RunState::Success => write!(f, "success"),
            RunState::TransientFailure => write!(f, "transientFailure"),
            RunState::PersistentFailure => write!(f, "persistentFailure"),
            RunState::Reset => write!(f, "reset"),
            RunState::Unknown => write!(f, "unknown"),
        }
    }
}

/// Per-document failure during an asynchronous run. These are reported as
/// counts/lists via status polling, not as a fatal error for the job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunItemError {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerRunResult {
    pub status: RunOutcome,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub item_count: i64,
    #[serde(default)]
    pub failed_item_count: i64,
    #[serde(default)]
    pub errors: Vec<RunItemError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerStatus {
    pub status: IndexerState,
    #[serde(default)]
    pub last_result: Option<IndexerRunResult>,
}

impl IndexerStatus {
    pub fn run_state(&self) -> RunState {
        match &self.last_result {
            None => RunState::NotStarted,
            Some(result) => match result.status {
                RunOutcome::InProgress => RunState::Running,
                RunOutcome::Success => RunState::Success,
                RunOutcome::TransientFailure => RunState::TransientFailure,
                RunOutcome::PersistentFailure => RunState::PersistentFailure,
                RunOutcome::Reset => RunState::Reset,
                RunOutcome::Unknown => RunState::Unknown,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_job_wire_shape() {
        let job = IndexerJob::catalog("catalog-indexer", "catalog-blob", "catalog-skillset", "catalog");
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["dataSourceName"], "catalog-blob");
        assert_eq!(json["targetIndexName"], "catalog");
        assert_eq!(json["parameters"]["configuration"]["parsingMode"], "jsonArray");
        assert_eq!(json["fieldMappings"][0]["sourceFieldName"], "id");
        assert_eq!(
            json["outputFieldMappings"][0]["sourceFieldName"],
            "/document/captionVector"
        );
        assert_eq!(json["outputFieldMappings"][1]["targetFieldName"], "imageVector");
    }

    #[test]
    fn test_status_parses_with_per_document_errors() {
        let body = r#"{
            "status": "running",
            "lastResult": {
                "status": "transientFailure",
                "errorMessage": null,
                "startTime": "2024-05-01T10:00:00Z",
                "endTime": "2024-05-01T10:01:30Z",
                "itemCount": 12,
                "failedItemCount": 3,
                "errors": [
                    {"key": "doc-7", "errorMessage": "could not parse document", "statusCode": 400}
                ]
            }
        }"#;
        let status: IndexerStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.status, IndexerState::Running);
        assert_eq!(status.run_state(), RunState::TransientFailure);
        let result = status.last_result.unwrap();
        assert_eq!(result.item_count, 12);
        assert_eq!(result.failed_item_count, 3);
        assert_eq!(result.errors[0].key.as_deref(), Some("doc-7"));
    }

    #[test]
    fn test_no_last_result_means_not_started() {
        let status: IndexerStatus = serde_json::from_str(r#"{"status": "unknown"}"#).unwrap();
        assert_eq!(status.run_state(), RunState::NotStarted);
    }

    #[test]
    fn test_unrecognized_outcome_maps_to_unknown() {
        let body = r#"{"status": "running", "lastResult": {"status": "somethingNew"}}"#;
        let status: IndexerStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.run_state(), RunState::Unknown);
    }
}
