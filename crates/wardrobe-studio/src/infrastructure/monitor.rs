//! Debounced connectivity monitor.
//!
//! While the user drags or swaps layers the renderer reports a new set of
//! boxes on every frame.  Evaluating each one would make the indicator
//! flicker, so the monitor waits for a quiet period and only evaluates the
//! most recent snapshot.
//!
//! ```text
//!  submit(A) ─┐
//!  submit(B) ─┼─ debounce ─► A, B discarded (superseded)
//!  submit(C) ─┘              C evaluated ─► watch channel
//! ```
//!
//! Each submission bumps a generation counter; a pending check that wakes up
//! to find a newer generation drops its snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::trace;
use wardrobe_core::{ClothingItemPosition, ConnectivityDetector, ConnectivityState};

/// Debounces layout snapshots and publishes the latest connectivity result.
#[derive(Debug)]
pub struct ConnectivityMonitor {
    detector: ConnectivityDetector,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    tx: Arc<watch::Sender<Option<ConnectivityState>>>,
}

impl ConnectivityMonitor {
    pub fn new(detector: ConnectivityDetector, debounce: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            detector,
            debounce,
            generation: Arc::new(AtomicU64::new(0)),
            tx: Arc::new(tx),
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Returns a receiver that sees every published result.  The value is
    /// `None` until the first snapshot has been evaluated.
    pub fn subscribe(&self) -> watch::Receiver<Option<ConnectivityState>> {
        self.tx.subscribe()
    }

    /// Most recently published result.
    pub fn latest(&self) -> Option<ConnectivityState> {
        *self.tx.borrow()
    }

    /// Schedules `positions` for evaluation after the debounce period.
    ///
    /// Must be called from within a Tokio runtime.  The returned task
    /// resolves to `true` if this snapshot was evaluated and published, or
    /// `false` if a later submission superseded it.
    pub fn submit(&self, positions: Vec<ClothingItemPosition>) -> JoinHandle<bool> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let tx = Arc::clone(&self.tx);
        let detector = self.detector;
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if latest.load(Ordering::SeqCst) != generation {
                trace!(generation, "layout snapshot superseded");
                return false;
            }
            let state = detector.evaluate(&positions);
            trace!(generation, connected = state.is_connected, "layout snapshot evaluated");
            tx.send_replace(Some(state));
            true
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
