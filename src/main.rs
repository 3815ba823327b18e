use anyhow::Result;
use clap::{Parser, Subcommand};
use nidmstore::pipeline::{classify_data_elements, push_graphs};
use nidmstore::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nidmstore")]
#[command(about = "Push NIDM graphs to a triple store and classify their data elements")]
struct Args {
    /// Config file (defaults to $NIDMSTORE_CONFIG, then ./config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload every Turtle file matching upload.pattern into the store
    Push,
    /// Query data elements and write one TSV file per category
    Classify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    // RUST_LOG wins over log_level from config.toml
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", config.log_level.as_str()),
    )
    .init();

    log::info!("Starting nidmstore v{}", env!("CARGO_PKG_VERSION"));
    log::info!(
        "Store: {}:{}/{}",
        config.store.root,
        config.store.port,
        config.store.database
    );

    let mut stdout = std::io::stdout();
    match args.command {
        Command::Push => {
            log::info!("Graph root: {}", config.graph_root().display());
            let report = push_graphs(&config, &mut stdout).await?;
            if !report.failed.is_empty() {
                log::warn!(
                    "{} graph files were rejected by the store. Check the BAD lines above.",
                    report.failed.len()
                );
            }
        }
        Command::Classify => {
            log::info!("Output directory: {}", config.output_dir().display());
            let summary = classify_data_elements(&config, &mut stdout).await?;
            log::info!(
                "Classified {} data elements into {} files",
                summary.records,
                summary.files.len()
            );
        }
    }

    Ok(())
}
