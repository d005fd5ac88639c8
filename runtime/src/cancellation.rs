//! Registry of abortable effect tasks, keyed by [`EffectId`].

use registro_core::effect::EffectId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::AbortHandle;

/// Tracks the tasks spawned for `Effect::Cancellable` so they can be aborted
///
/// Cloning is cheap and every clone shares the same registry.
#[derive(Clone, Default)]
pub struct CancellationRegistry {
    tasks: Arc<Mutex<HashMap<EffectId, Vec<AbortHandle>>>>,
}

impl CancellationRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spawned task under `id`
    ///
    /// Finished tasks registered under the same id are pruned on the way.
    pub fn register(&self, id: EffectId, handle: AbortHandle) {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = tasks.entry(id).or_default();
        entry.retain(|h| !h.is_finished());
        entry.push(handle);
    }

    /// Abort every unfinished task registered under `id`
    ///
    /// Returns how many tasks were still running.
    pub fn cancel(&self, id: EffectId) -> usize {
        let handles = self
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .unwrap_or_default();

        abort_all(handles)
    }

    /// Abort every registered task regardless of id
    pub fn cancel_all(&self) -> usize {
        let drained: Vec<AbortHandle> = self
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .flat_map(|(_, handles)| handles)
            .collect();

        abort_all(drained)
    }

    /// Number of unfinished tasks registered under `id`
    #[must_use]
    pub fn in_flight(&self, id: EffectId) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .map_or(0, |handles| handles.iter().filter(|h| !h.is_finished()).count())
    }
}

impl std::fmt::Debug for CancellationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("CancellationRegistry")
            .field("ids", &tasks.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn abort_all(handles: impl IntoIterator<Item = AbortHandle>) -> usize {
    let mut aborted = 0;
    for handle in handles {
        if !handle.is_finished() {
            handle.abort();
            aborted += 1;
        }
    }
    aborted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const SLOW: EffectId = EffectId::new("slow");
    const OTHER: EffectId = EffectId::new("other");

    fn spawn_sleeper() -> tokio::task::JoinHandle<()> {
        tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        })
    }

    #[tokio::test]
    async fn test_cancel_aborts_only_matching_id() {
        let registry = CancellationRegistry::new();
        let slow = spawn_sleeper();
        let other = spawn_sleeper();
        registry.register(SLOW, slow.abort_handle());
        registry.register(OTHER, other.abort_handle());

        assert_eq!(registry.cancel(SLOW), 1);
        assert!(slow.await.is_err_and(|e| e.is_cancelled()));
        assert_eq!(registry.in_flight(OTHER), 1);
        assert_eq!(registry.in_flight(SLOW), 0);

        assert_eq!(registry.cancel_all(), 1);
        assert!(other.await.is_err_and(|e| e.is_cancelled()));
    }

    #[tokio::test]
    async fn test_finished_tasks_are_not_counted() {
        let registry = CancellationRegistry::new();
        let done = tokio::spawn(async {});
        let handle = done.abort_handle();
        let _ = done.await;
        registry.register(SLOW, handle);

        assert_eq!(registry.in_flight(SLOW), 0);
        assert_eq!(registry.cancel(SLOW), 0);
    }

    #[tokio::test]
    async fn test_cancel_unknown_id_is_noop() {
        let registry = CancellationRegistry::new();
        assert_eq!(registry.cancel(SLOW), 0);
        assert_eq!(registry.cancel_all(), 0);
    }
}
