//! Shared test helpers: fake ports and a canned catalog plan.

use lookbook::application::provision::CatalogPlan;
use lookbook::domain::entities::catalog_document::{CatalogDocument, SearchHit};
use lookbook::domain::entities::data_source::DataSourceDefinition;
use lookbook::domain::entities::indexer::{IndexerJob, IndexerState, IndexerStatus};
use lookbook::domain::entities::search_index::{
    CompressionTuning, HnswTuning, IndexSchema, FIELD_CAPTION_VECTOR,
};
use lookbook::domain::entities::skillset::SkillsetDefinition;
use lookbook::domain::error::DomainError;
use lookbook::domain::ports::captioner::Captioner;
use lookbook::domain::ports::garment_analyzer::GarmentAnalyzer;
use lookbook::domain::ports::search_admin::SearchAdmin;
use lookbook::domain::ports::searcher::Searcher;
use lookbook::domain::values::hybrid_query::{HybridQuery, VectorQuery};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub fn test_plan() -> CatalogPlan {
    CatalogPlan {
        index_name: "fashion-catalog".into(),
        container_name: "catalog-images".into(),
        storage_connection_string: "UseDevelopmentStorage=true".into(),
        vision_endpoint: "https://vision.example.net".into(),
        vision_api_key: "vision-key".into(),
        vision_model_version: "2023-04-15".into(),
        hnsw: HnswTuning::default(),
        compression: Some(CompressionTuning::default()),
    }
}

/// Records every admin call and the exact payload it would put on the wire.
#[derive(Default)]
pub struct RecordingAdmin {
    pub calls: Mutex<Vec<String>>,
    pub payloads: Mutex<Vec<(String, serde_json::Value)>>,
    pub run_active: AtomicBool,
    pub status: Mutex<Option<IndexerStatus>>,
}

impl RecordingAdmin {
    fn record<T: serde::Serialize>(&self, key: String, body: &T) {
        self.calls.lock().unwrap().push(key.clone());
        self.payloads
            .lock()
            .unwrap()
            .push((key, serde_json::to_value(body).unwrap()));
    }

    pub fn payload(&self, key: &str) -> Vec<serde_json::Value> {
        self.payloads
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl SearchAdmin for RecordingAdmin {
    async fn upsert_data_source(&self, definition: &DataSourceDefinition) -> Result<(), DomainError> {
        self.record(format!("datasources/{}", definition.name), definition);
        Ok(())
    }

    async fn upsert_index(&self, schema: &IndexSchema) -> Result<(), DomainError> {
        self.record(format!("indexes/{}", schema.name), schema);
        Ok(())
    }

    async fn upsert_skillset(&self, skillset: &SkillsetDefinition) -> Result<(), DomainError> {
        self.record(format!("skillsets/{}", skillset.name), skillset);
        Ok(())
    }

    async fn upsert_indexer(&self, job: &IndexerJob) -> Result<(), DomainError> {
        self.record(format!("indexers/{}", job.name), job);
        Ok(())
    }

    async fn run_indexer(&self, name: &str) -> Result<(), DomainError> {
        if self.run_active.load(Ordering::SeqCst) {
            return Err(DomainError::RunTrigger(format!(
                "a previous run of '{name}' is still active"
            )));
        }
        self.calls.lock().unwrap().push(format!("run/{name}"));
        Ok(())
    }

    async fn indexer_status(&self, _name: &str) -> Result<IndexerStatus, DomainError> {
        Ok(self.status.lock().unwrap().clone().unwrap_or(IndexerStatus {
            status: IndexerState::Unknown,
            last_result: None,
        }))
    }
}

/// In-memory searcher over a synthetic catalog. Query inputs are mapped to
/// canned embeddings, sub-queries contribute weighted cosine similarity over
/// their k nearest documents, and results come back in descending score order.
#[derive(Default)]
pub struct TableSearcher {
    pub embeddings: HashMap<String, Vec<f32>>,
    pub docs: Vec<CatalogDocument>,
}

impl TableSearcher {
    fn doc_vector<'a>(&self, doc: &'a CatalogDocument, field: &str) -> Option<&'a Vec<f32>> {
        if field == FIELD_CAPTION_VECTOR {
            doc.caption_vector.as_ref()
        } else {
            doc.image_vector.as_ref()
        }
    }

    fn query_embedding(&self, query: &VectorQuery) -> Option<&Vec<f32>> {
        let key = match query {
            VectorQuery::Text { text, .. } => text,
            VectorQuery::ImageUrl { url, .. } => url,
            VectorQuery::ImageBinary { base64_image, .. } => base64_image,
        };
        self.embeddings.get(key)
    }
}

#[async_trait::async_trait]
impl Searcher for TableSearcher {
    async fn search(&self, query: &HybridQuery) -> Result<Vec<SearchHit>, DomainError> {
        let mut scores: HashMap<String, f64> = HashMap::new();

        for sub_query in &query.vector_queries {
            let embedding = self
                .query_embedding(sub_query)
                .ok_or_else(|| DomainError::Query("unknown query input".into()))?;

            let mut ranked: Vec<(usize, f64)> = self
                .docs
                .iter()
                .enumerate()
                .filter_map(|(i, doc)| {
                    self.doc_vector(doc, sub_query.fields())
                        .map(|v| (i, cosine(embedding, v)))
                })
                .collect();
            ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

            for (index, similarity) in ranked.into_iter().take(sub_query.k()) {
                *scores.entry(self.docs[index].id.clone()).or_default() +=
                    sub_query.weight() * similarity;
            }
        }

        let mut ranked: Vec<(String, f64)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

        Ok(ranked
            .into_iter()
            .take(query.top)
            .map(|(id, score)| {
                let doc = self.docs.iter().find(|d| d.id == id).unwrap();
                SearchHit {
                    id,
                    caption: doc.caption.clone(),
                    image_url: doc.image_url.clone(),
                    score,
                }
            })
            .collect())
    }
}

pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 {
        0.0
    } else {
        (dot / (na * nb)) as f64
    }
}

/// Captioner backed by a fixed url -> caption table.
#[derive(Default)]
pub struct TableCaptioner {
    pub captions: HashMap<String, String>,
}

#[async_trait::async_trait]
impl Captioner for TableCaptioner {
    async fn caption(&self, image_url: &str) -> Result<String, DomainError> {
        self.captions
            .get(image_url)
            .cloned()
            .ok_or_else(|| DomainError::Vision(format!("no caption for {image_url}")))
    }
}

/// Analyzer that always returns the same canned report text.
pub struct ScriptedAnalyzer {
    pub response: String,
}

#[async_trait::async_trait]
impl GarmentAnalyzer for ScriptedAnalyzer {
    async fn analyze(&self, _image: &[u8]) -> Result<String, DomainError> {
        Ok(self.response.clone())
    }
}
