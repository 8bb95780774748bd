//! State owned by a running repeating task.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tracing::info;

use crate::task::{RepeatingTask, TaskError};

/// Animation state paired with the task that advances it.
///
/// The UI thread reads and writes the state through [`Mounted::read`] and
/// [`Mounted::write`] while the task mutates it on its own cadence.
/// Unmounting stops the task first, so the returned state is final.
#[derive(Debug)]
pub struct Mounted<S> {
    state: Arc<RwLock<S>>,
    task: RepeatingTask,
}

impl<S> Mounted<S>
where
    S: Send + Sync + 'static,
{
    /// Move `state` behind a lock and start calling `on_tick` on it every `period`.
    pub fn mount<F>(
        name: &'static str,
        period: Duration,
        state: S,
        mut on_tick: F,
    ) -> Result<Self, TaskError>
    where
        F: FnMut(&mut S, Duration) + Send + 'static,
    {
        let state = Arc::new(RwLock::new(state));
        let shared = state.clone();
        let task = RepeatingTask::spawn(name, period, move |dt| {
            let mut guard = shared.write().unwrap_or_else(PoisonError::into_inner);
            on_tick(&mut guard, dt);
        })?;
        info!(task = name, "mounted");
        Ok(Self { state, task })
    }

    /// Run `f` with shared access to the state.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access to the state.
    pub fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn is_mounted(&self) -> bool {
        self.task.is_running()
    }

    /// A second handle to the state that outlives the task.
    ///
    /// While it is alive [`Mounted::unmount`] cannot hand the state back.
    pub fn observer(&self) -> Arc<RwLock<S>> {
        self.state.clone()
    }

    /// Stop the task and hand back the state.
    ///
    /// Returns `None` only if another handle to the state is still alive.
    pub fn unmount(self) -> Option<S> {
        let Self { state, mut task } = self;
        task.cancel();
        info!(task = task.name(), "unmounted");
        Arc::into_inner(state)
            .map(|lock| lock.into_inner().unwrap_or_else(PoisonError::into_inner))
    }
}
