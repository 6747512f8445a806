//! End-to-end import: file on disk to tokenized, enriched sentences

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use yomi_config::Config;
use yomi_core::error::ImportError;
use yomi_core::sync::sentence_at;
use yomi_lang_japanese::{Glossary, JapaneseProcessor};
use yomi_subtitle::SubtitleFormat;

use crate::import::Importer;

const SRT: &str = "1
00:00:01,000 --> 00:00:02,500
猫は可愛い

2
00:00:02,500 --> 00:00:04,000
コーヒーを飲みます

3
00:00:04,000 --> 00:00:05,000
……！
";

const VTT: &str = "WEBVTT

00:00:00.000 --> 00:00:01.000
こんにちは
";

fn fixture(suffix: &str, bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file
}

fn texts(words: &[yomi_types::Word]) -> Vec<&str> {
    words.iter().map(|w| w.text.as_str()).collect()
}

#[tokio::test]
async fn test_import_srt_file() {
    let file = fixture(".srt", SRT.as_bytes());
    let importer = Importer::new(JapaneseProcessor::new());

    let sentences = importer.import_file(file.path(), None).await.unwrap();
    assert_eq!(sentences.len(), 3);

    assert_eq!(texts(&sentences[0].words), vec!["猫", "は", "可愛い"]);
    assert_eq!(sentences[0].words[2].id, "seg-1-w2");
    assert_eq!(texts(&sentences[1].words), vec!["コーヒー", "を", "飲みます"]);

    // Punctuation-only cue still gets one click target
    assert_eq!(sentences[2].words.len(), 1);
    assert_eq!(sentences[2].words[0].text, "……！");

    assert_eq!(sentence_at(&sentences, 2.5).map(|s| s.segment.index), Some(2));
}

#[tokio::test]
async fn test_import_dispatches_on_extension() {
    let vtt = fixture(".vtt", VTT.as_bytes());
    let importer = Importer::new(JapaneseProcessor::new());

    let sentences = importer.import_file(vtt.path(), None).await.unwrap();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].text(), "こんにちは");

    // Same content under .txt goes to the SRT parser and finds nothing
    let txt = fixture(".txt", VTT.as_bytes());
    let err = importer.import_file(txt.path(), None).await.unwrap_err();
    assert!(matches!(err, ImportError::NoCues { .. }));
}

#[tokio::test]
async fn test_import_format_override() {
    let txt = fixture(".txt", "猫は可愛い\nこんにちは\n".as_bytes());
    let importer = Importer::new(JapaneseProcessor::new());

    let sentences = importer
        .import_file(txt.path(), Some(SubtitleFormat::Plain))
        .await
        .unwrap();
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[1].segment.start_time, 3.0);
}

#[tokio::test]
async fn test_import_binary_file() {
    let file = fixture(".srt", &[0xff, 0xfe, 0x00, 0x80, 0x81]);
    let importer = Importer::new(JapaneseProcessor::new());

    let err = importer.import_file(file.path(), None).await.unwrap_err();
    assert!(matches!(err, ImportError::NotText { .. }));
}

#[tokio::test]
async fn test_import_missing_file() {
    let importer = Importer::new(JapaneseProcessor::new());
    let err = importer
        .import_file(&PathBuf::from("/nonexistent/ep01.srt"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ImportError::Io(_)));
}

#[tokio::test]
async fn test_import_with_glossary() {
    let glossary = Glossary::from_json(
        r#"{ "entries": [
            { "term": "猫", "reading": "ねこ", "meaning": "cat", "partOfSpeech": "noun" },
            { "term": "コーヒー", "meaning": "coffee" }
        ] }"#,
    )
    .unwrap();
    let importer = Importer::new(JapaneseProcessor::new()).with_glossary(glossary);

    let sentences = importer.import_text(SRT, "ep01.srt", None).unwrap();
    assert_eq!(sentences[0].words[0].reading, "ねこ");
    assert_eq!(sentences[0].words[0].part_of_speech, "noun");
    assert!(!sentences[0].words[1].is_enriched());
    assert_eq!(sentences[1].words[0].meaning, "coffee");
}

#[tokio::test]
async fn test_importer_from_config() {
    let glossary = fixture(
        ".json",
        r#"{ "entries": [ { "term": "猫", "meaning": "cat" } ] }"#.as_bytes(),
    );
    let srt = fixture(".srt", SRT.as_bytes());

    let mut config = Config::default();
    config.dictionary.paths = vec![glossary.path().display().to_string()];
    config.tokenizer.particles = Some(vec!["を".to_string()]);

    let importer = Importer::from_config(&config, &[]);
    let sentences = importer.import_file(srt.path(), None).await.unwrap();

    // は is no longer a particle, so it stays on the kanji stem
    assert_eq!(texts(&sentences[0].words), vec!["猫は", "可愛い"]);
    assert_eq!(sentences[1].words[1].text, "を");
    assert!(!sentences[0].words[0].is_enriched());

    config.tokenizer.particles = None;
    let importer = Importer::from_config(&config, &[]);
    let sentences = importer.import_file(srt.path(), None).await.unwrap();
    assert_eq!(sentences[0].words[0].meaning, "cat");
}
