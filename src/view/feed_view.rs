//! The feed view: one load per activation, observable state transitions.
//!
//! [`FeedView`] owns the [`ViewState`] inside a `watch` channel. Activation
//! resets the state to `Loading` and spawns a task that runs the loader once
//! and publishes `Ready` or `Error`. Deactivation cancels that task through a
//! [`CancellationToken`]; a load that resolves afterwards is discarded.

use super::state::ViewState;
use crate::loader::FeedLoader;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

/// Owner of the view state and its single in-flight load.
#[derive(Debug)]
pub struct FeedView {
    state: Arc<watch::Sender<ViewState>>,
    activation: Option<CancellationToken>,
}

impl Default for FeedView {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedView {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            state: Arc::new(state),
            activation: None,
        }
    }

    /// Observe state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Start a load cycle.
    ///
    /// Any previous activation is torn down first. The state becomes
    /// `Loading` and `loader` is invoked exactly once on a spawned task;
    /// this call does not wait for it. Must be called within a tokio runtime.
    #[instrument(level = "debug", skip_all)]
    pub fn activate<L>(&mut self, loader: Arc<L>)
    where
        L: FeedLoader + 'static,
    {
        self.deactivate();

        self.state.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = ViewState::Loading;
                true
            }
        });

        let cancel = CancellationToken::new();
        tokio::spawn(run_load(loader, Arc::clone(&self.state), cancel.clone()));
        self.activation = Some(cancel);
        info!("Feed view activated");
    }

    /// Stop the current load cycle, if any. The state is left as it is.
    pub fn deactivate(&mut self) {
        if let Some(cancel) = self.activation.take() {
            // Cancel while holding the state lock so a resolving load either
            // published before this point or never will.
            self.state.send_if_modified(|_| {
                cancel.cancel();
                false
            });
            debug!("Feed view deactivated");
        }
    }

    /// Wait for the current activation to reach `Ready` or `Error`.
    ///
    /// Returns `None` when the view is not active or is deactivated while
    /// waiting.
    pub async fn settled(&self) -> Option<ViewState> {
        let cancel = self.activation.clone()?;
        let mut rx = self.state.subscribe();
        tokio::select! {
            _ = cancel.cancelled() => None,
            state = rx.wait_for(|state| !state.is_loading()) => state.ok().map(|s| s.clone()),
        }
    }
}

impl Drop for FeedView {
    fn drop(&mut self) {
        self.deactivate();
    }
}

async fn run_load<L>(
    loader: Arc<L>,
    state: Arc<watch::Sender<ViewState>>,
    cancel: CancellationToken,
) where
    L: FeedLoader,
{
    let outcome = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!("Load abandoned: view deactivated");
            return;
        }
        outcome = loader.load() => outcome,
    };

    state.send_if_modified(|current| {
        if cancel.is_cancelled() {
            debug!("Discarding late load result");
            return false;
        }
        *current = ViewState::resolve(outcome);
        true
    });
}
