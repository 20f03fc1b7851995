use std::sync::Arc;

use kanal::AsyncReceiver;
use wordsheet_types::PipelineEvent;

use crate::state::AppState;
use crate::status::RunStatus;

/// Consume pipeline events until the run finishes or the pipeline goes away
pub async fn event_loop(
    state: Arc<AppState>,
    events_rx: AsyncReceiver<PipelineEvent>,
) -> anyhow::Result<()> {
    loop {
        let event = match events_rx.recv().await {
            Ok(event) => event,
            Err(_) => {
                tracing::debug!("Event channel closed");
                break;
            }
        };

        let mut status = state.status.write().await;
        status.apply(&event);
        handle_event(&event, &status);

        if status.is_finished() {
            break;
        }
    }

    Ok(())
}

/// Log an event against the status it has just been applied to
fn handle_event(event: &PipelineEvent, status: &RunStatus) {
    match event {
        PipelineEvent::RunStarted { total_files } => {
            tracing::info!("Processing {total_files} file(s)");
        }
        PipelineEvent::FileStarted { index, path } => {
            tracing::info!("[{}/{}] {}", index + 1, status.total_files, path.display());
        }
        PipelineEvent::LookupProgress { index, .. } => {
            let current = status
                .current_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            tracing::debug!(
                "[{}] {current}: looked up {}/{}",
                index + 1,
                status.lookups_done,
                status.lookups_total
            );
        }
        PipelineEvent::FileCompleted(report) => {
            tracing::info!(
                "[{}/{}] wrote {} ({} words, {} without entry)",
                report.index + 1,
                status.total_files,
                report.output.display(),
                report.words,
                report.missing
            );
        }
        PipelineEvent::FileFailed {
            index,
            path,
            reason,
        } => {
            tracing::error!(
                "[{}/{}] {}: {reason} ({} failed so far)",
                index + 1,
                status.total_files,
                path.display(),
                status.files_failed
            );
        }
        PipelineEvent::RunFinished(summary) => {
            if summary.cancelled {
                tracing::warn!(
                    "Run cancelled after {} of {} file(s)",
                    summary.attempted(),
                    status.total_files
                );
            } else {
                tracing::info!(
                    "Run finished: {} written, {} failed of {} file(s)",
                    status.files_done,
                    status.files_failed,
                    status.total_files
                );
            }
        }
    }
}
