//! Search-term debounce.
//!
//! Coalesces rapid keystrokes into a single pipeline invocation. This is a
//! caller-side optimization: the pipeline itself stays synchronous and pure.
//! Supersession uses a generation counter, so a stale waiter can tell it
//! lost without any channel plumbing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Coalesces bursts of edits into one trailing invocation.
///
/// Each edit calls [`SearchDebouncer::debounce`] and awaits it. The call
/// resolves `true` only for the newest edit once the quiet period elapses;
/// superseded waiters resolve `false` and should simply drop their work.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    generation: Arc<AtomicU64>,
    delay: Duration,
}

impl SearchDebouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            delay,
        }
    }

    /// The configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register an edit and wait out the quiet period.
    ///
    /// Returns `true` iff no newer edit arrived while waiting.
    pub async fn debounce(&self) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        generation == self.generation.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_single_edit_fires() {
        let debouncer = SearchDebouncer::new(Duration::from_millis(5));
        assert!(debouncer.debounce().await);
    }

    #[tokio::test]
    async fn test_superseded_edit_is_dropped() {
        let debouncer = SearchDebouncer::new(Duration::from_millis(40));
        let first = debouncer.debounce();
        let second = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            debouncer.debounce().await
        };
        let (first_won, second_won) = tokio::join!(first, second);
        assert!(!first_won);
        assert!(second_won);
    }

    #[tokio::test]
    async fn test_sequential_edits_each_fire() {
        let debouncer = SearchDebouncer::new(Duration::from_millis(5));
        assert!(debouncer.debounce().await);
        assert!(debouncer.debounce().await);
    }
}
