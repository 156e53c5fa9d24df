use std::path::PathBuf;

use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use trilex_config::Config;
use trilex_core::{Resolver, wordlist};
use trilex_dictionary::CambridgeCollector;
use trilex_io::Exporter;

mod card;
mod logging;
mod runner;

#[cfg(test)]
mod tests;

use self::runner::Runner;

/// Build English/French/Russian flashcards from a word list
#[derive(Parser)]
#[command(name = "trilex", version)]
struct Args {
    /// Word list, one `<word> <part-of-speech> <direction>` per line
    #[arg(long, default_value = "words.txt")]
    input: PathBuf,

    /// Write CSV and JSON files for every complete record
    #[arg(long)]
    export: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let config = Config::new();

    let words = wordlist::load(&args.input)?;

    let collector = CambridgeCollector::new(&config.dictionary)?;
    let resolver = Resolver::new(collector, config.dictionary.clone());
    let cards = card::connect(&config.anki).await;
    let exporter = args.export.then(|| Exporter::new(config.export.dir.clone()));
    if let Some(exporter) = &exporter {
        tracing::info!("Exporting complete records to {}", exporter.dir().display());
    }

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown requested, finishing current word");
                cancel.cancel();
            }
        }
    });

    let summary = Runner::new(resolver, cards, exporter)
        .run(&words, &cancel)
        .await;

    tracing::info!(
        "Done: {} complete, {} need work, {} exported, {} cards added",
        summary.complete,
        summary.needs_work,
        summary.exported,
        summary.cards_added
    );

    Ok(())
}
