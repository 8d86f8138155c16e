pub mod captioner;
pub mod garment_analyzer;
pub mod search_admin;
pub mod searcher;
