use clap::Parser;
use lookbook::application::search::LookQuery;
use lookbook::cli::commands::{Cli, Commands};
use lookbook::domain::values::hybrid_query::ImageInput;
use lookbook::Lookbook;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let lb = match Lookbook::from_env() {
        Ok(lb) => lb,
        Err(e) => {
            eprintln!("Error initializing lookbook: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(lb, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(lb: Lookbook, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Provision => {
            let report = lb.provision().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            println!("Indexer is running; poll `lookbook status` for completion.");
        }
        Commands::Status => {
            let status = lb.indexer_status().await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
            println!("run state: {}", status.run_state());
        }
        Commands::Search {
            text,
            image_url,
            image_file,
            search_text,
            k,
            top,
            text_weight,
            image_weight,
        } => {
            let image = match (image_url, image_file) {
                (Some(url), _) => Some(ImageInput::Url(url)),
                (None, Some(path)) => Some(ImageInput::Binary(std::fs::read(path)?)),
                (None, None) => None,
            };
            let hits = lb
                .search(LookQuery {
                    text,
                    image,
                    search_text,
                    k,
                    top,
                    text_weight,
                    image_weight,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        Commands::Caption { urls_file, output } => {
            let urls: Vec<String> = std::fs::read_to_string(&urls_file)?
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect();
            let report = lb.caption_catalog(&urls).await?;
            std::fs::write(&output, serde_json::to_string_pretty(&report.documents)?)?;
            println!("Wrote {} documents to {output}", report.documents.len());
            for failure in &report.failures {
                eprintln!("Failed to caption {}: {}", failure.image_url, failure.error);
            }
        }
        Commands::Analyze { image } => {
            let bytes = std::fs::read(&image)?;
            let items = lb.analyze(&bytes).await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }
    Ok(())
}
