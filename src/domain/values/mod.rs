pub mod credential;
pub mod hybrid_query;
