//! End-to-end runs of the English pipeline against stub dictionaries

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use calamine::{Data, Reader, Xlsx, open_workbook};
use rand::Rng;
use tokio_util::sync::CancellationToken;
use wordsheet_config::Config;
use wordsheet_core::dictionary::{DictionaryEntry, DictionaryLookup, LookupError, ProviderMetadata};
use wordsheet_core::{EnrichmentScheduler, LanguageProcessor, Pipeline, PipelineError, Vocabulary};
use wordsheet_lang_english::EnglishProcessor;
use wordsheet_types::PipelineEvent;

fn entry(word: &str) -> DictionaryEntry {
    DictionaryEntry {
        british_pronunciation: format!("uk:{word}"),
        american_pronunciation: format!("us:{word}"),
        paraphrase: format!("def:{word}"),
    }
}

/// Knows a fixed set of words, answers after a random pause
struct JitteryDictionary {
    known: Vec<String>,
    max_delay_ms: u64,
}

impl JitteryDictionary {
    fn new(known: &[&str], max_delay_ms: u64) -> Self {
        Self {
            known: known.iter().map(|w| w.to_string()).collect(),
            max_delay_ms,
        }
    }
}

#[async_trait::async_trait]
impl DictionaryLookup for JitteryDictionary {
    async fn lookup(&self, word: &str) -> Result<DictionaryEntry, LookupError> {
        let delay = rand::thread_rng().gen_range(0..=self.max_delay_ms);
        tokio::time::sleep(Duration::from_millis(delay)).await;

        if self.known.iter().any(|k| k == word) {
            Ok(entry(word))
        } else {
            Err(LookupError::MissingField("british pronunciation"))
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "jittery".to_string(),
            online: false,
        }
    }
}

fn pipeline_with(dictionary: Option<Arc<dyn DictionaryLookup>>) -> Pipeline {
    let config = Config::default();
    Pipeline::new(
        Arc::new(EnglishProcessor::new(config.text.clone())),
        dictionary,
        &config,
    )
}

/// Cells of the report's first sheet as text
fn read_report(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    assert_eq!(range.start(), Some((0, 0)));

    range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    Data::String(s) => s.clone(),
                    Data::Float(f) => f.to_string(),
                    other => format!("{other:?}"),
                })
                .collect()
        })
        .collect()
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

const HEADER: [&str; 5] = [
    "Words",
    "British Pronunciation",
    "American Pronunciation",
    "Paraphrase",
    "Word Count",
];

fn drain(rx: kanal::AsyncReceiver<PipelineEvent>) -> Vec<PipelineEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        match event {
            Some(event) => events.push(event),
            None => break,
        }
    }
    events
}

#[tokio::test]
async fn test_order_is_independent_of_completion_timing() {
    let words: Vec<String> = (0..200).map(|i| format!("word{:03}", i)).collect();
    let known: Vec<&str> = words.iter().step_by(3).map(String::as_str).collect();
    let dictionary = Arc::new(JitteryDictionary::new(&known, 15));
    let processor = EnglishProcessor::default();

    for _ in 0..3 {
        let results = EnrichmentScheduler::new(32, Duration::from_secs(5))
            .enrich(
                &words,
                dictionary.clone(),
                processor.stemmer(),
                &CancellationToken::new(),
                |_, _| {},
            )
            .await
            .unwrap();

        assert_eq!(results.len(), words.len());
        for (i, (word, result)) in words.iter().zip(&results).enumerate() {
            if i % 3 == 0 {
                assert_eq!(result.as_ref(), Some(&entry(word)), "row {i} misattributed");
            } else {
                assert_eq!(result, &None, "row {i} should be blank");
            }
        }
    }
}

#[tokio::test]
async fn test_sample_sentence_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("story.txt");
    std::fs::write(&input, "The cats ran. The cat ran fast!").unwrap();

    // "cats" misses directly and falls back to "cat"
    let dictionary = Arc::new(JitteryDictionary::new(&["cat", "ran", "the"], 10));
    let pipeline = pipeline_with(Some(dictionary));
    let (tx, rx) = kanal::bounded_async(64);

    let report = pipeline
        .process_file(0, &input, &CancellationToken::new(), &tx)
        .await
        .unwrap();

    assert_eq!(report.output, dir.path().join("story.xlsx"));
    assert!(report.output.exists());
    assert_eq!(report.words, 5);
    // "fast" is unknown
    assert_eq!(report.missing, 1);

    assert_eq!(
        read_report(&report.output),
        vec![
            row(&HEADER),
            row(&["cat", "uk:cat", "us:cat", "def:cat", "1"]),
            row(&["cats", "uk:cat", "us:cat", "def:cat", "1"]),
            row(&["fast", "", "", "", "1"]),
            row(&["ran", "uk:ran", "us:ran", "def:ran", "2"]),
            row(&["the", "uk:the", "us:the", "def:the", "2"]),
        ]
    );

    let events = drain(rx);
    let progress: Vec<(usize, usize)> = events
        .iter()
        .filter_map(|e| match e {
            PipelineEvent::LookupProgress { completed, total, .. } => Some((*completed, *total)),
            _ => None,
        })
        .collect();
    assert_eq!(progress.last(), Some(&(5, 5)));
}

#[tokio::test]
async fn test_sample_sentence_vocabulary_and_counts() {
    let vocab = Vocabulary::build(&EnglishProcessor::default(), "The cats ran. The cat ran fast!");

    let counts: HashMap<&str, u32> = vocab
        .words
        .iter()
        .map(|w| (w.as_str(), vocab.frequencies.count(w)))
        .collect();

    assert_eq!(vocab.words, vec!["cat", "cats", "fast", "ran", "the"]);
    assert_eq!(counts["cat"], 1);
    assert_eq!(counts["cats"], 1);
    assert_eq!(counts["fast"], 1);
    assert_eq!(counts["ran"], 2);
    assert_eq!(counts["the"], 2);
}

#[tokio::test]
async fn test_empty_file_writes_header_only_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    std::fs::write(&input, "").unwrap();

    let pipeline = pipeline_with(Some(Arc::new(JitteryDictionary::new(&[], 1))));
    let (tx, _rx) = kanal::bounded_async(8);

    let report = pipeline
        .process_file(0, &input, &CancellationToken::new(), &tx)
        .await
        .unwrap();

    assert_eq!(report.words, 0);
    assert_eq!(read_report(&report.output), vec![row(&HEADER)]);
}

#[tokio::test]
async fn test_unsupported_extension_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("slides.pdf");
    std::fs::write(&input, "The cats ran.").unwrap();

    let pipeline = pipeline_with(None);
    let (tx, _rx) = kanal::bounded_async(8);

    let result = pipeline
        .process_file(0, &input, &CancellationToken::new(), &tx)
        .await;

    assert!(matches!(result, Err(PipelineError::UnsupportedFormat(_))));
    assert!(!dir.path().join("slides.xlsx").exists());
}

#[tokio::test]
async fn test_run_continues_after_failed_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    let bad = dir.path().join("bad.rtf");
    let missing = dir.path().join("missing.txt");
    std::fs::write(&good, "Alpha beta gamma").unwrap();
    std::fs::write(&bad, "whatever").unwrap();

    let pipeline = pipeline_with(None);
    let (tx, rx) = kanal::bounded_async(64);
    let paths: Vec<PathBuf> = vec![bad.clone(), missing.clone(), good.clone()];

    let summary = pipeline
        .run(&paths, &CancellationToken::new(), &tx)
        .await
        .unwrap();

    assert_eq!(summary.completed.len(), 1);
    assert_eq!(summary.completed[0].input, good);
    assert_eq!(summary.completed[0].missing, 3);
    assert_eq!(summary.failed.len(), 2);
    assert_eq!(summary.failed[0].path, bad);
    assert_eq!(summary.failed[1].path, missing);
    assert!(!summary.is_success());

    let events = drain(rx);
    assert!(matches!(events.first(), Some(PipelineEvent::RunStarted { total_files: 3 })));
    assert!(matches!(events.last(), Some(PipelineEvent::RunFinished(_))));
}

#[tokio::test]
async fn test_no_input_selected() {
    let pipeline = pipeline_with(None);
    let (tx, rx) = kanal::bounded_async(8);

    let result = pipeline.run(&[], &CancellationToken::new(), &tx).await;

    assert!(matches!(result, Err(PipelineError::NoInputSelected)));
    assert!(drain(rx).is_empty());
}

#[tokio::test]
async fn test_cancelled_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("long.txt");
    std::fs::write(&input, "Several words needing slow lookups").unwrap();

    let dictionary = Arc::new(JitteryDictionary::new(&[], 0));
    let slow: Arc<dyn DictionaryLookup> = Arc::new(SlowDictionary(dictionary));
    let pipeline = pipeline_with(Some(slow));
    let (tx, _rx) = kanal::bounded_async(64);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let summary = pipeline
        .run(&[input.clone(), input.clone()], &cancel, &tx)
        .await
        .unwrap();

    assert!(summary.cancelled);
    assert!(summary.completed.is_empty());
    assert_eq!(summary.failed.len(), 1);
    assert!(!dir.path().join("long.xlsx").exists());
}

/// Never answers within the test's lifetime
struct SlowDictionary(Arc<JitteryDictionary>);

#[async_trait::async_trait]
impl DictionaryLookup for SlowDictionary {
    async fn lookup(&self, word: &str) -> Result<DictionaryEntry, LookupError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        self.0.lookup(word).await
    }

    fn metadata(&self) -> ProviderMetadata {
        self.0.metadata()
    }
}
