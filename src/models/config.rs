//! Construction-time configuration threaded through the simulation.
//!
//! Everything tunable travels in a [`SimulationConfig`] value, so several
//! simulations with different parameters can coexist in one process.

use std::collections::HashMap;

use super::{
    geometry::{Direction, Position},
    grid::GridBounds,
    policy::{GrowthPolicy, HeadingPolicy},
    render::ColorTag,
};

/// Fallback grid edge length.
pub const DEFAULT_GRID_SIZE: i32 = 30;
/// Smallest grid edge that leaves room to play.
pub const MIN_GRID_SIZE: i32 = 10;
/// Largest grid edge the game screen lays out comfortably.
pub const MAX_GRID_SIZE: i32 = 60;
/// Food items kept in play.
pub const DEFAULT_FOOD_TARGET: usize = 3;
/// Milliseconds between simulation ticks.
pub const DEFAULT_TICK_INTERVAL_MILLIS: u64 = 400;
/// Pixels per grid cell in the frontend.
pub const DEFAULT_CELL_SIZE: u16 = 20;
/// Most agents a single grid supports.
pub const MAX_NUM_OF_AGENTS: usize = 4;

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidGridSize,
    InvalidAgentCount,
    InvalidFoodTarget,
    StartOutOfBounds,
}

/// Key identifier delivered by the input source, kept free of any GUI types
/// so the control tables stay testable headless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

/// Arrow-key control table (player one).
#[must_use]
pub fn arrow_keys() -> HashMap<ControlKey, Direction> {
    HashMap::from([
        (ControlKey::ArrowUp, Direction::Up),
        (ControlKey::ArrowDown, Direction::Down),
        (ControlKey::ArrowLeft, Direction::Left),
        (ControlKey::ArrowRight, Direction::Right),
    ])
}

/// WASD control table (player two).
#[must_use]
pub fn wasd_keys() -> HashMap<ControlKey, Direction> {
    HashMap::from([
        (ControlKey::Char('w'), Direction::Up),
        (ControlKey::Char('s'), Direction::Down),
        (ControlKey::Char('a'), Direction::Left),
        (ControlKey::Char('d'), Direction::Right),
    ])
}

/// The named behavior presets selectable in the frontend. Each is a pair of
/// policies; other pairings can be had by constructing an agent with any
/// combination directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentVariant {
    Standard,
    RandomizedGrowth,
    Restless,
}

impl AgentVariant {
    pub const VALUES: [Self; 3] = [Self::Standard, Self::RandomizedGrowth, Self::Restless];

    #[must_use]
    pub fn growth_policy(self) -> GrowthPolicy {
        match self {
            AgentVariant::RandomizedGrowth => GrowthPolicy::Randomized,
            AgentVariant::Standard | AgentVariant::Restless => GrowthPolicy::Fixed,
        }
    }

    #[must_use]
    pub fn heading_policy(self) -> HeadingPolicy {
        match self {
            AgentVariant::Restless => HeadingPolicy::restless(),
            AgentVariant::Standard | AgentVariant::RandomizedGrowth => HeadingPolicy::Steady,
        }
    }
}

impl std::fmt::Display for AgentVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentVariant::Standard => write!(f, "Standard"),
            AgentVariant::RandomizedGrowth => write!(f, "Randomized Growth"),
            AgentVariant::Restless => write!(f, "Restless"),
        }
    }
}

/// Per-agent setup: where it starts, how it behaves, how it is drawn and
/// driven.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub start: Position,
    pub heading: Direction,
    pub variant: AgentVariant,
    pub color: ColorTag,
    pub controls: HashMap<ControlKey, Direction>,
}

#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub cell_size: u16,
    pub target_food_count: usize,
    pub tick_interval_millis: u64,
    pub agents: Vec<AgentConfig>,
}

impl SimulationConfig {
    /// One agent in the middle of the default grid, driven by the arrow keys.
    #[must_use]
    pub fn single_player(variant: AgentVariant) -> Self {
        Self {
            grid_width: DEFAULT_GRID_SIZE,
            grid_height: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            target_food_count: DEFAULT_FOOD_TARGET,
            tick_interval_millis: DEFAULT_TICK_INTERVAL_MILLIS,
            agents: vec![AgentConfig {
                start: Position::new(DEFAULT_GRID_SIZE / 2, DEFAULT_GRID_SIZE / 2),
                heading: Direction::Right,
                variant,
                color: ColorTag::Green,
                controls: arrow_keys(),
            }],
        }
    }

    /// Two agents sharing the food pool, facing each other: arrows on the
    /// left half, WASD on the right.
    #[must_use]
    pub fn two_player(variant: AgentVariant) -> Self {
        let mut config = Self::single_player(variant);
        config.agents[0].start =
            Position::new(DEFAULT_GRID_SIZE / 4, DEFAULT_GRID_SIZE / 2);
        config.agents.push(AgentConfig {
            start: Position::new(DEFAULT_GRID_SIZE * 3 / 4, DEFAULT_GRID_SIZE / 2),
            heading: Direction::Left,
            variant,
            color: ColorTag::Blue,
            controls: wasd_keys(),
        });
        config
    }

    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the grid, food target, or agent set is
    /// outside the supported ranges.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_width)
            || !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_height)
        {
            return Err(ConfigError::InvalidGridSize);
        }
        if self.agents.is_empty() || self.agents.len() > MAX_NUM_OF_AGENTS {
            return Err(ConfigError::InvalidAgentCount);
        }
        if self.target_food_count == 0 {
            return Err(ConfigError::InvalidFoodTarget);
        }
        let grid = GridBounds::new(self.grid_width, self.grid_height);
        if self.agents.iter().any(|agent| grid.is_out_of_bounds(agent.start)) {
            return Err(ConfigError::StartOutOfBounds);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::single_player(AgentVariant::Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for variant in AgentVariant::VALUES {
            assert_eq!(SimulationConfig::single_player(variant).validate(), Ok(()));
            assert_eq!(SimulationConfig::two_player(variant).validate(), Ok(()));
        }
    }

    #[test]
    fn test_grid_size_limits() {
        let mut config = SimulationConfig::default();
        config.grid_width = MIN_GRID_SIZE - 1;
        assert_eq!(config.validate(), Err(ConfigError::InvalidGridSize));
        config.grid_width = MAX_GRID_SIZE + 1;
        assert_eq!(config.validate(), Err(ConfigError::InvalidGridSize));
    }

    #[test]
    fn test_agent_count_limits() {
        let mut config = SimulationConfig::default();
        let template = config.agents[0].clone();
        config.agents.clear();
        assert_eq!(config.validate(), Err(ConfigError::InvalidAgentCount));
        for _ in 0..=MAX_NUM_OF_AGENTS {
            config.agents.push(template.clone());
        }
        assert_eq!(config.validate(), Err(ConfigError::InvalidAgentCount));
    }

    #[test]
    fn test_zero_food_target_rejected() {
        let mut config = SimulationConfig::default();
        config.target_food_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFoodTarget));
    }

    #[test]
    fn test_start_on_boundary_rejected() {
        let mut config = SimulationConfig::default();
        config.agents[0].start = Position::new(0, 15);
        assert_eq!(config.validate(), Err(ConfigError::StartOutOfBounds));
    }

    #[test]
    fn test_variant_policy_pairings() {
        assert_eq!(AgentVariant::Standard.growth_policy(), GrowthPolicy::Fixed);
        assert_eq!(
            AgentVariant::RandomizedGrowth.growth_policy(),
            GrowthPolicy::Randomized
        );
        assert_eq!(AgentVariant::Restless.growth_policy(), GrowthPolicy::Fixed);
        assert_eq!(AgentVariant::Standard.heading_policy(), HeadingPolicy::Steady);
        assert!(matches!(
            AgentVariant::Restless.heading_policy(),
            HeadingPolicy::Restless { .. }
        ));
    }

    #[test]
    fn test_two_player_controls_are_distinct() {
        let config = SimulationConfig::two_player(AgentVariant::Standard);
        assert_eq!(config.agents.len(), 2);
        assert!(config.agents[0].controls.contains_key(&ControlKey::ArrowUp));
        assert!(config.agents[1]
            .controls
            .contains_key(&ControlKey::Char('w')));
    }
}
