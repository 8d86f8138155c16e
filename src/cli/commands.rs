use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lookbook", about = "Multimodal fashion catalog indexing and shop-the-look search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Provision the data source, index, skillset and indexer, then start a run
    Provision,
    /// Show the latest indexer run status
    Status,
    /// Hybrid search against the catalog index
    Search {
        /// Text to embed and match against caption vectors
        #[arg(long)]
        text: Option<String>,
        /// Image URL to embed and match against image vectors
        #[arg(long)]
        image_url: Option<String>,
        /// Local image file, sent inline instead of a URL
        #[arg(long, conflicts_with = "image_url")]
        image_file: Option<String>,
        /// Plain search terms blended into the ranking
        #[arg(long)]
        search_text: Option<String>,
        /// Nearest neighbors per vector sub-query
        #[arg(long, default_value = "5")]
        k: usize,
        /// Results to return
        #[arg(long, default_value = "3")]
        top: usize,
        /// Relative weight of the text sub-query
        #[arg(long)]
        text_weight: Option<f64>,
        /// Relative weight of the image sub-query
        #[arg(long)]
        image_weight: Option<f64>,
    },
    /// Caption catalog images and write a JSON-array catalog file
    Caption {
        /// File with one image URL per line
        urls_file: String,
        /// Output path for the catalog JSON
        #[arg(long, default_value = "catalog.json")]
        output: String,
    },
    /// Identify garments and attributes in a photo
    Analyze {
        /// Path to the image file
        image: String,
    },
}
