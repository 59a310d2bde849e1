//! Async driver that runs a coordinator on its own tokio task.
//!
//! Actions arrive over an unbounded channel. Between actions the task
//! sleeps until the pending filter edit is due, so a burst of edits costs
//! one timer and at most one request. After every step the latest
//! [`QueryState`] is published on a `watch` channel for the renderer.
//!
//! The task stops once every [`CoordinatorHandle`] is dropped; a filter
//! edit still pending at that point is discarded.

use std::time::Instant;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::debounce::TokioClock;

use super::{ChallengeLoader, ListAction, QueryCoordinator, QueryState};

/// Sending half of a running coordinator.
#[derive(Clone)]
pub struct CoordinatorHandle {
    tx: mpsc::UnboundedSender<ListAction>,
    state: watch::Receiver<QueryState>,
}

impl CoordinatorHandle {
    pub fn send(&self, action: ListAction) -> Result<(), mpsc::error::SendError<ListAction>> {
        self.tx.send(action)
    }

    /// Latest published state.
    pub fn state(&self) -> QueryState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.clone()
    }
}

/// Move `coordinator` onto a background task.
pub fn spawn<L>(coordinator: QueryCoordinator<L, TokioClock>) -> (CoordinatorHandle, JoinHandle<()>)
where
    L: ChallengeLoader + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(coordinator.state());

    let task = tokio::spawn(run_event_loop(coordinator, rx, state_tx));

    (
        CoordinatorHandle {
            tx,
            state: state_rx,
        },
        task,
    )
}

async fn run_event_loop<L>(
    mut coordinator: QueryCoordinator<L, TokioClock>,
    mut rx: mpsc::UnboundedReceiver<ListAction>,
    state_tx: watch::Sender<QueryState>,
) where
    L: ChallengeLoader,
{
    tracing::debug!("coordinator task started");
    loop {
        let deadline = coordinator.next_deadline();

        tokio::select! {
            action = rx.recv() => match action {
                Some(action) => {
                    coordinator.dispatch(action);
                }
                None => {
                    if coordinator.next_deadline().is_some() {
                        tracing::debug!("coordinator closed with a pending filter edit");
                    }
                    break;
                }
            },
            _ = sleep_until(deadline) => {
                coordinator.tick();
            }
        }

        state_tx.send_replace(coordinator.state());
    }
    tracing::debug!("coordinator task stopped");
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
