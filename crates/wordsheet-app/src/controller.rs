use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordsheet_core::Pipeline;

use crate::events::event_loop;
use crate::state::AppState;

/// Application controller for task spawning and lifecycle
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Spawn the pipeline and the event loop draining it.
    ///
    /// The pipeline task owns the only sender, so the event loop also
    /// stops when the run errors out before `RunFinished`.
    pub async fn spawn_tasks(
        &self,
        pipeline: Arc<Pipeline>,
        paths: Vec<PathBuf>,
    ) -> JoinSet<anyhow::Result<()>> {
        let capacity = self.state.config.read().await.event_buffer.max(1);
        let (events_tx, events_rx) = kanal::bounded_async(capacity);

        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(self.state.clone(), events_rx));

        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            pipeline.run(&paths, &cancel, &events_tx).await?;
            Ok(())
        });

        tasks
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
