use crate::domain::entities::catalog_document::SearchHit;
use crate::domain::error::DomainError;
use crate::domain::values::hybrid_query::HybridQuery;

/// Query surface of one search index. Results come back ordered by the
/// service's relevance score, descending.
#[async_trait::async_trait]
pub trait Searcher: Send + Sync {
    async fn search(&self, query: &HybridQuery) -> Result<Vec<SearchHit>, DomainError>;
}
