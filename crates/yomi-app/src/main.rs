use anyhow::Context;
use clap::Parser;
use yomi_core::language::LanguageProcessor;
use yomi_core::sync::{next_start_after, sentence_at};
use yomi_lang_japanese::JapaneseProcessor;

mod cli;
mod import;
mod logging;
mod profile;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::import::Importer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = profile::load_config(cli.config.as_deref())?;
    logging::init(&config.log, cli.verbose);

    match cli.command {
        Command::Parse {
            file,
            format,
            glossary,
        } => {
            let importer = Importer::from_config(&config, &glossary);
            let sentences = importer
                .import_file(&file, format.to_format())
                .await
                .with_context(|| format!("Failed to import {}", file.display()))?;

            tracing::info!("{} sentences from {}", sentences.len(), file.display());
            println!("{}", serde_json::to_string_pretty(&sentences)?);
        }
        Command::Tokenize { text, segment_id } => {
            let processor = JapaneseProcessor::from_config(&config.tokenizer);
            let words = processor.tokenize(&text, &segment_id);
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        Command::At {
            file,
            seconds,
            format,
        } => {
            let importer = Importer::from_config(&config, &[]);
            let sentences = importer
                .import_file(&file, format.to_format())
                .await
                .with_context(|| format!("Failed to import {}", file.display()))?;

            match sentence_at(&sentences, seconds) {
                Some(sentence) => println!("{}", serde_json::to_string_pretty(sentence)?),
                None => match next_start_after(&sentences, seconds) {
                    Some(next) => eprintln!("No sentence at {seconds}s, next starts at {next}s"),
                    None => eprintln!("No sentence at {seconds}s"),
                },
            }
        }
    }

    Ok(())
}
