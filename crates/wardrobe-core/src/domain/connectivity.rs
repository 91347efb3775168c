//! Connectivity detection between rendered outfit layers.
//!
//! The detector answers one question: do the rendered items form a single
//! connected cluster?  Two items are linked when their boxes overlap or come
//! within a tolerance of each other (see [`ClothingItemPosition::touches`]);
//! the cluster is connected when every item is reachable from the first one
//! through such links.
//!
//! # Example
//!
//! ```text
//!   ┌─────┐
//!   │ hat │
//!   └─────┘ ← gap ≤ tolerance
//!   ┌─────────┐
//!   │   top   │         A–B and B–C touch, A–C do not:
//!   └─────────┘         still one cluster.
//!     ┌─────┐
//!     │pants│
//!     └─────┘
//! ```
//!
//! The result only drives a cosmetic indicator, so malformed boxes are not
//! reported; they just fail to link.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::catalog::ItemId;
use super::geometry::ClothingItemPosition;

/// Margin, in layout units, within which two items count as touching.
pub const DEFAULT_TOLERANCE: f64 = 10.0;

/// Outcome of a connectivity check together with the tolerance it used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityState {
    pub is_connected: bool,
    pub tolerance: f64,
}

/// Decides whether a set of item boxes forms one connected cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectivityDetector {
    tolerance: f64,
}

impl Default for ConnectivityDetector {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ConnectivityDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns `true` when there are at least two boxes and all of them are
    /// linked into one cluster.
    ///
    /// Fewer than two boxes is never connected.  Nodes are item ids, and the
    /// reached id count must equal the number of boxes, so input that repeats
    /// an id is never connected.
    pub fn is_connected(&self, positions: &[ClothingItemPosition]) -> bool {
        if positions.len() < 2 {
            return false;
        }

        let adjacency = self.adjacency(positions);

        // Breadth-first search from the first box.
        let start = positions[0].id;
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for neighbor in adjacency.get(&current).into_iter().flatten() {
                if visited.insert(*neighbor) {
                    queue.push_back(*neighbor);
                }
            }
        }

        trace!(
            items = positions.len(),
            reached = visited.len(),
            tolerance = self.tolerance,
            "connectivity evaluated"
        );
        visited.len() == positions.len()
    }

    /// Runs [`ConnectivityDetector::is_connected`] and records the tolerance.
    pub fn evaluate(&self, positions: &[ClothingItemPosition]) -> ConnectivityState {
        ConnectivityState {
            is_connected: self.is_connected(positions),
            tolerance: self.tolerance,
        }
    }

    /// Undirected adjacency lists keyed by item id.
    fn adjacency(&self, positions: &[ClothingItemPosition]) -> HashMap<ItemId, Vec<ItemId>> {
        let mut adjacency: HashMap<ItemId, Vec<ItemId>> =
            positions.iter().map(|p| (p.id, Vec::new())).collect();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                if a.touches(b, self.tolerance) {
                    adjacency.entry(a.id).or_default().push(b.id);
                    adjacency.entry(b.id).or_default().push(a.id);
                }
            }
        }
        adjacency
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> ClothingItemPosition {
        ClothingItemPosition::new(Uuid::new_v4(), x, y, w, h)
    }

    #[test]
    fn test_no_positions_is_not_connected() {
        assert!(!ConnectivityDetector::new().is_connected(&[]));
    }

    #[test]
    fn test_single_position_is_not_connected() {
        let detector = ConnectivityDetector::new();
        assert!(!detector.is_connected(&[rect(0.0, 0.0, 100.0, 100.0)]));
    }

    #[test]
    fn test_two_overlapping_positions_are_connected() {
        let detector = ConnectivityDetector::new();
        let positions = [rect(0.0, 0.0, 100.0, 100.0), rect(50.0, 80.0, 100.0, 100.0)];
        assert!(detector.is_connected(&positions));
    }

    #[test]
    fn test_two_positions_within_tolerance_are_connected() {
        let detector = ConnectivityDetector::new();
        // Vertical gap of 8 units, below the default 10.
        let positions = [rect(0.0, 0.0, 100.0, 100.0), rect(0.0, 108.0, 100.0, 100.0)];
        assert!(detector.is_connected(&positions));
    }

    #[test]
    fn test_gap_larger_than_tolerance_on_both_axes_is_not_connected() {
        let detector = ConnectivityDetector::new();
        let positions = [rect(0.0, 0.0, 100.0, 100.0), rect(120.0, 120.0, 100.0, 100.0)];
        assert!(!detector.is_connected(&positions));
    }

    #[test]
    fn test_connectivity_is_transitive_through_middle_item() {
        let detector = ConnectivityDetector::new();
        let a = rect(0.0, 0.0, 100.0, 50.0); // hat
        let b = rect(0.0, 55.0, 100.0, 100.0); // top, 5 below hat
        let c = rect(0.0, 160.0, 100.0, 100.0); // pants, 5 below top
        assert!(!a.touches(&c, DEFAULT_TOLERANCE), "A and C must not touch directly");
        assert!(detector.is_connected(&[a, b, c]));
        assert!(detector.is_connected(&[c, a, b]), "start order must not matter");
    }

    #[test]
    fn test_two_separate_clusters_are_not_connected() {
        let detector = ConnectivityDetector::new();
        let positions = [
            rect(0.0, 0.0, 100.0, 100.0),
            rect(0.0, 100.0, 100.0, 100.0),
            rect(500.0, 0.0, 100.0, 100.0),
            rect(500.0, 100.0, 100.0, 100.0),
        ];
        assert!(!detector.is_connected(&positions));
    }

    #[test]
    fn test_custom_tolerance_changes_outcome() {
        let positions = [rect(0.0, 0.0, 100.0, 100.0), rect(125.0, 0.0, 100.0, 100.0)];
        assert!(!ConnectivityDetector::new().is_connected(&positions));
        assert!(ConnectivityDetector::with_tolerance(25.0).is_connected(&positions));
    }

    #[test]
    fn test_nan_position_degrades_to_not_connected_without_panicking() {
        let detector = ConnectivityDetector::new();
        let positions = [rect(0.0, 0.0, 100.0, 100.0), rect(f64::NAN, 0.0, 100.0, 100.0)];
        assert!(!detector.is_connected(&positions));
    }

    #[test]
    fn test_touching_boxes_sharing_an_id_are_not_connected() {
        let detector = ConnectivityDetector::new();
        let id = Uuid::new_v4();
        let positions = [
            ClothingItemPosition::new(id, 0.0, 0.0, 100.0, 100.0),
            ClothingItemPosition::new(id, 0.0, 100.0, 100.0, 100.0),
        ];
        assert!(!detector.is_connected(&positions));
    }

    #[test]
    fn test_repeated_id_among_connected_boxes_is_not_connected() {
        let detector = ConnectivityDetector::new();
        let shared = Uuid::new_v4();
        let positions = [
            ClothingItemPosition::new(shared, 0.0, 0.0, 100.0, 100.0),
            rect(0.0, 105.0, 100.0, 100.0),
            ClothingItemPosition::new(shared, 0.0, 210.0, 100.0, 100.0),
        ];
        assert!(!detector.is_connected(&positions));
    }

    #[test]
    fn test_evaluate_reports_tolerance_used() {
        let detector = ConnectivityDetector::with_tolerance(4.0);
        let state = detector.evaluate(&[rect(0.0, 0.0, 10.0, 10.0), rect(12.0, 0.0, 10.0, 10.0)]);
        assert_eq!(
            state,
            ConnectivityState {
                is_connected: true,
                tolerance: 4.0
            }
        );
    }

    #[test]
    fn test_result_is_deterministic_for_same_input() {
        let detector = ConnectivityDetector::new();
        let positions = [
            rect(0.0, 0.0, 100.0, 100.0),
            rect(105.0, 0.0, 100.0, 100.0),
            rect(210.0, 0.0, 100.0, 100.0),
        ];
        let first = detector.is_connected(&positions);
        for _ in 0..10 {
            assert_eq!(detector.is_connected(&positions), first);
        }
    }
}
