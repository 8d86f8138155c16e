pub mod garment_analyzer;
