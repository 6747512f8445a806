use std::path::{Path, PathBuf};

use yomi_config::Config;
use yomi_core::dictionary::WordLookup;
use yomi_core::error::ImportError;
use yomi_core::sentence::{build_sentences, enrich_sentence, require_cues};
use yomi_lang_japanese::{Glossary, GlossaryLoader, JapaneseProcessor};
use yomi_subtitle::{PlainTextOptions, SubtitleFormat, parse_subtitle_file, parse_with_format};
use yomi_types::Sentence;

/// File import pipeline: read, parse, tokenize, enrich
pub struct Importer {
    processor: JapaneseProcessor,
    glossary: Option<Glossary>,
    plain: PlainTextOptions,
}

impl Importer {
    pub fn new(processor: JapaneseProcessor) -> Self {
        Self {
            processor,
            glossary: None,
            plain: PlainTextOptions::default(),
        }
    }

    /// Build from config. `extra_glossaries` are merged after the configured ones.
    pub fn from_config(config: &Config, extra_glossaries: &[PathBuf]) -> Self {
        let mut importer = Self::new(JapaneseProcessor::from_config(&config.tokenizer));
        importer.plain = PlainTextOptions {
            line_duration: config.subtitle.plain_line_duration,
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        if config.dictionary.enabled {
            paths.extend(config.dictionary.paths.iter().map(PathBuf::from));
        } else if !config.dictionary.paths.is_empty() {
            tracing::warn!("Dictionary disabled, ignoring configured glossaries");
        }
        paths.extend(extra_glossaries.iter().cloned());

        if !paths.is_empty() {
            importer = importer.with_glossary(GlossaryLoader::load_all(&paths));
        }
        importer
    }

    pub fn with_glossary(mut self, glossary: Glossary) -> Self {
        if glossary.entry_count() == 0 {
            tracing::warn!("Glossary is empty, words will not be enriched");
            self.glossary = None;
        } else {
            self.glossary = Some(glossary);
        }
        self
    }

    pub async fn import_file(
        &self,
        path: &Path,
        format: Option<SubtitleFormat>,
    ) -> Result<Vec<Sentence>, ImportError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        tracing::info!("Importing {}", path.display());
        let bytes = tokio::fs::read(path).await?;
        let content = String::from_utf8(bytes).map_err(|source| ImportError::NotText {
            file_name: file_name.clone(),
            source,
        })?;

        self.import_text(&content, &file_name, format)
    }

    /// Parse already-decoded content. `format` overrides extension dispatch.
    pub fn import_text(
        &self,
        content: &str,
        file_name: &str,
        format: Option<SubtitleFormat>,
    ) -> Result<Vec<Sentence>, ImportError> {
        let segments = match format {
            Some(format) => parse_with_format(content, format, &self.plain),
            None => parse_subtitle_file(content, file_name),
        };
        let segments = require_cues(segments, file_name)?;
        let sentences = build_sentences(&self.processor, segments);

        Ok(match &self.glossary {
            Some(glossary) => self.enrich(&sentences, glossary),
            None => sentences,
        })
    }

    fn enrich(&self, sentences: &[Sentence], lookup: &dyn WordLookup) -> Vec<Sentence> {
        let enriched: Vec<Sentence> = sentences
            .iter()
            .map(|sentence| enrich_sentence(sentence, lookup))
            .collect();

        let hits = enriched
            .iter()
            .flat_map(|s| &s.words)
            .filter(|w| w.is_enriched())
            .count();
        tracing::debug!("Enriched {} words from glossary", hits);

        enriched
    }
}
