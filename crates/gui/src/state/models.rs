//! Models loaded next to the document, with loads in flight

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::warn;

use crate::loader::{LoaderError, ModelGroup, ModelLoader};

pub struct LoadedModel {
    pub url: String,
    pub group: ModelGroup,
}

struct PendingLoad {
    url: String,
    rx: oneshot::Receiver<Result<ModelGroup, LoaderError>>,
}

/// Model list state
#[derive(Default)]
pub struct ModelsState {
    pub models: Vec<LoadedModel>,
    pub errors: Vec<String>,
    pending: Vec<PendingLoad>,
}

impl ModelsState {
    /// Start loading `url` on `runtime`. Unsupported files are rejected up front.
    pub fn request(&mut self, runtime: &Handle, loader: &ModelLoader, url: &str) -> bool {
        if !loader.can_load(url) {
            warn!(url, "unsupported model format");
            self.errors.push(format!("unsupported model format: {url}"));
            return false;
        }

        let (tx, rx) = oneshot::channel();
        let loader = loader.clone();
        let task_url = url.to_string();
        runtime.spawn(async move {
            let result = loader.load(&task_url).await;
            // Receiver gone means the caller discarded the load
            let _ = tx.send(result);
        });

        self.pending.push(PendingLoad {
            url: url.to_string(),
            rx,
        });
        true
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Move finished loads into `models` or `errors`. Returns the number of
    /// loads that completed.
    pub fn poll(&mut self) -> usize {
        let mut finished = 0;
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for mut load in self.pending.drain(..) {
            match load.rx.try_recv() {
                Ok(Ok(group)) => {
                    finished += 1;
                    self.models.push(LoadedModel {
                        url: load.url,
                        group,
                    });
                }
                Ok(Err(e)) => {
                    finished += 1;
                    self.errors.push(e.to_string());
                }
                Err(oneshot::error::TryRecvError::Empty) => still_pending.push(load),
                Err(oneshot::error::TryRecvError::Closed) => {
                    finished += 1;
                    self.errors.push(format!("load of '{}' was dropped", load.url));
                }
            }
        }

        self.pending = still_pending;
        finished
    }
}
