//! Growth and heading policies composed into an agent at construction.
//!
//! Variants are plain enums with behavior rather than a trait hierarchy, so a
//! growth policy and a heading policy can be mixed freely on one agent.

use log::debug;
use rand::Rng;

use super::geometry::Direction;

/// Tail-skip ticks granted per food item under the fixed policy.
pub const FIXED_GROWTH: u32 = 2;
/// Exclusive upper bound on the randomized growth roll.
pub const MAX_RANDOM_GROWTH: u32 = 5;
/// Identical resolved headings in a row before the restless policy swerves.
pub const STRAIGHT_RUN_LIMIT: usize = 8;

/// How much growth debt one consumed food item is worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Every food item is worth [`FIXED_GROWTH`] ticks of growth.
    Fixed,
    /// Every food item rolls a uniform amount in `[0, MAX_RANDOM_GROWTH)`.
    Randomized,
}

impl GrowthPolicy {
    #[must_use]
    pub fn growth_amount(self) -> u32 {
        match self {
            GrowthPolicy::Fixed => FIXED_GROWTH,
            GrowthPolicy::Randomized => rand::thread_rng().gen_range(0..MAX_RANDOM_GROWTH),
        }
    }
}

/// Pre-move say over the heading the agent is about to adopt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadingPolicy {
    /// Adopts the pending heading unchanged.
    Steady,
    /// Swerves to a random perpendicular heading after a sustained straight
    /// run, otherwise behaves exactly like [`HeadingPolicy::Steady`].
    Restless {
        /// Every heading actually resolved so far, oldest first.
        history: Vec<Direction>,
    },
}

impl HeadingPolicy {
    #[must_use]
    pub fn restless() -> Self {
        HeadingPolicy::Restless {
            history: Vec::new(),
        }
    }

    /// Gives the policy a chance to replace the pending heading before the
    /// agent adopts it. The perpendicular pick is relative to the pending
    /// heading, not the one currently traveled.
    pub fn adjust_pending(&mut self, pending: Direction) -> Direction {
        match self {
            HeadingPolicy::Steady => pending,
            HeadingPolicy::Restless { history } => {
                if Self::stuck_in_line(history) {
                    let swerve = pending.random_perpendicular();
                    debug!("Restless swerve from {pending:?} to {swerve:?}");
                    swerve
                } else {
                    pending
                }
            }
        }
    }

    /// Records the heading that was actually adopted this tick. Called every
    /// resolution, whether or not a swerve happened.
    pub fn record_resolved(&mut self, resolved: Direction) {
        if let HeadingPolicy::Restless { history } = self {
            history.push(resolved);
        }
    }

    fn stuck_in_line(history: &[Direction]) -> bool {
        if history.len() < STRAIGHT_RUN_LIMIT {
            return false;
        }
        let window = &history[history.len() - STRAIGHT_RUN_LIMIT..];
        window.iter().all(|heading| *heading == window[0])
    }
}
