pub mod catalog_document;
pub mod data_source;
pub mod garment;
pub mod indexer;
pub mod search_index;
pub mod skillset;
