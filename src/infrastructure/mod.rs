pub mod openai;
pub mod search;
pub mod vision;
