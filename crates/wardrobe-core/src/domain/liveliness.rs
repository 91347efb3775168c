//! Cosmetic liveliness indicator.
//!
//! A small character sits next to the outfit being assembled.  It is alive
//! while the rendered pieces form one connected cluster and dead otherwise.
//! Each mood has a few interchangeable looks ("variations"); a fresh one is
//! drawn whenever the mood flips or the outfit editor is reopened.
//!
//! ```text
//!            connected
//!   Dead  ─────────────►  Alive
//!         ◄─────────────
//!           disconnected
//! ```
//!
//! Reporting the same connectivity twice does not redraw the variation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::random::RandomSource;

/// Number of looks per mood when not configured otherwise.
pub const DEFAULT_VARIATIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Alive,
    Dead,
}

/// Current mood plus which look of that mood is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorState {
    pub mood: Mood,
    pub variation: usize,
}

/// State machine behind the indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivelinessIndicator {
    state: IndicatorState,
    alive_variations: usize,
    dead_variations: usize,
}

impl LivelinessIndicator {
    /// Starts alive with a random alive look.
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        Self::with_variations(DEFAULT_VARIATIONS, DEFAULT_VARIATIONS, rng)
    }

    /// Like [`LivelinessIndicator::new`] with custom look counts.  A count of
    /// zero is treated as one.
    pub fn with_variations(alive: usize, dead: usize, rng: &mut dyn RandomSource) -> Self {
        let mut indicator = Self {
            state: IndicatorState {
                mood: Mood::Alive,
                variation: 0,
            },
            alive_variations: alive.max(1),
            dead_variations: dead.max(1),
        };
        indicator.state.variation = indicator.draw(Mood::Alive, rng);
        indicator
    }

    pub fn state(&self) -> IndicatorState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state.mood == Mood::Alive
    }

    /// Moves to the mood matching `connected`.
    ///
    /// Returns `true` if the mood flipped (and a new look was drawn).
    pub fn apply_connectivity(&mut self, connected: bool, rng: &mut dyn RandomSource) -> bool {
        let target = if connected { Mood::Alive } else { Mood::Dead };
        if target == self.state.mood {
            return false;
        }
        self.set_mood(target, rng);
        debug!(mood = ?target, variation = self.state.variation, "indicator mood changed");
        true
    }

    /// Draws a new look for the current mood.
    pub fn randomize_variation(&mut self, rng: &mut dyn RandomSource) {
        self.state.variation = self.draw(self.state.mood, rng);
    }

    pub fn force_alive(&mut self, rng: &mut dyn RandomSource) {
        self.set_mood(Mood::Alive, rng);
    }

    pub fn force_dead(&mut self, rng: &mut dyn RandomSource) {
        self.set_mood(Mood::Dead, rng);
    }

    fn set_mood(&mut self, mood: Mood, rng: &mut dyn RandomSource) {
        self.state = IndicatorState {
            mood,
            variation: self.draw(mood, rng),
        };
    }

    fn draw(&self, mood: Mood, rng: &mut dyn RandomSource) -> usize {
        let count = match mood {
            Mood::Alive => self.alive_variations,
            Mood::Dead => self.dead_variations,
        };
        rng.index_below(count) % count
    }
}
