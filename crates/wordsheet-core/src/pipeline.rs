use std::path::{Path, PathBuf};
use std::sync::Arc;

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;
use wordsheet_config::Config;
use wordsheet_types::{FailedFile, FileReport, PipelineEvent, RunSummary};

use crate::dictionary::DictionaryLookup;
use crate::document::RawDocument;
use crate::enrich::EnrichmentScheduler;
use crate::error::PipelineError;
use crate::language::LanguageProcessor;
use crate::report::{self, ReportWriter};
use crate::vocabulary::Vocabulary;

/// Document -> vocabulary -> dictionary enrichment -> spreadsheet
pub struct Pipeline {
    processor: Arc<dyn LanguageProcessor>,
    /// `None` runs offline and leaves every entry blank
    dictionary: Option<Arc<dyn DictionaryLookup>>,
    scheduler: EnrichmentScheduler,
    writer: ReportWriter,
}

impl Pipeline {
    pub fn new(
        processor: Arc<dyn LanguageProcessor>,
        dictionary: Option<Arc<dyn DictionaryLookup>>,
        config: &Config,
    ) -> Self {
        let scheduler = EnrichmentScheduler::from_config(&config.dictionary);

        if let Some(dictionary) = &dictionary {
            let meta = dictionary.metadata();
            tracing::info!(
                "Using {} dictionary '{}' for '{}' ({} concurrent lookups)",
                if meta.online { "online" } else { "local" },
                meta.name,
                processor.language_code(),
                scheduler.max_concurrent()
            );
        } else {
            tracing::warn!("Dictionary disabled, reports will have no pronunciations");
        }

        Self {
            processor,
            dictionary,
            scheduler,
            writer: ReportWriter::new(config.report.clone()),
        }
    }

    /// Process one document and write its spreadsheet next to it.
    ///
    /// The output file is only written once every lookup has settled.
    pub async fn process_file(
        &self,
        index: usize,
        path: &Path,
        cancel: &CancellationToken,
        events: &AsyncSender<PipelineEvent>,
    ) -> Result<FileReport, PipelineError> {
        let document = RawDocument::load(path)?;
        let vocabulary = Vocabulary::build(self.processor.as_ref(), &document.text);

        tracing::info!(
            "{}: {} tokens, {} words to look up",
            path.display(),
            vocabulary.frequencies.total(),
            vocabulary.len()
        );

        if vocabulary.is_empty() {
            tracing::debug!("{}: no candidate words, header only", path.display());
        }

        let Vocabulary { words, frequencies } = vocabulary;

        let outcomes = match &self.dictionary {
            Some(dictionary) => {
                self.scheduler
                    .enrich(
                        &words,
                        Arc::clone(dictionary),
                        self.processor.stemmer(),
                        cancel,
                        |completed, total| {
                            // Progress is best effort, a full channel drops it
                            let _ = events.try_send(PipelineEvent::LookupProgress {
                                index,
                                completed,
                                total,
                            });
                        },
                    )
                    .await?
            }
            None => vec![None; words.len()],
        };

        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }

        let records = report::assemble(words, outcomes, &frequencies)?;
        let missing = records.iter().filter(|r| r.entry.is_none()).count();

        let output = report::output_path(path);
        self.writer.write(&records, &output)?;

        Ok(FileReport {
            index,
            input: path.to_path_buf(),
            output,
            words: records.len(),
            missing,
        })
    }

    /// Process every path in order. A failing file is recorded and skipped;
    /// only an empty selection fails the whole run.
    pub async fn run(
        &self,
        paths: &[PathBuf],
        cancel: &CancellationToken,
        events: &AsyncSender<PipelineEvent>,
    ) -> Result<RunSummary, PipelineError> {
        if paths.is_empty() {
            return Err(PipelineError::NoInputSelected);
        }

        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("run", %run_id, files = paths.len());

        async move {
            notify(events, PipelineEvent::RunStarted {
                total_files: paths.len(),
            })
            .await;

            let mut summary = RunSummary::default();

            for (index, path) in paths.iter().enumerate() {
                if cancel.is_cancelled() {
                    summary.cancelled = true;
                    break;
                }

                notify(events, PipelineEvent::FileStarted {
                    index,
                    path: path.clone(),
                })
                .await;

                match self.process_file(index, path, cancel, events).await {
                    Ok(report) => {
                        notify(events, PipelineEvent::FileCompleted(report.clone())).await;
                        summary.completed.push(report);
                    }
                    Err(e) => {
                        tracing::warn!("Skipping {}: {}", path.display(), e);

                        let reason = e.to_string();
                        notify(events, PipelineEvent::FileFailed {
                            index,
                            path: path.clone(),
                            reason: reason.clone(),
                        })
                        .await;
                        summary.failed.push(FailedFile {
                            path: path.clone(),
                            reason,
                        });

                        if matches!(e, PipelineError::Cancelled) {
                            summary.cancelled = true;
                            break;
                        }
                    }
                }
            }

            tracing::info!(
                "Run finished: {} completed, {} failed{}",
                summary.completed.len(),
                summary.failed.len(),
                if summary.cancelled { ", cancelled" } else { "" }
            );

            notify(events, PipelineEvent::RunFinished(summary.clone())).await;
            Ok(summary)
        }
        .instrument(span)
        .await
    }
}

async fn notify(events: &AsyncSender<PipelineEvent>, event: PipelineEvent) {
    if let Err(e) = events.send(event).await {
        tracing::debug!("Event receiver gone: {e}");
    }
}
