//! The fixed-tick game loop over agents and the shared food pool.

use log::{debug, info};

use super::{
    agent::Agent,
    config::{ConfigError, ControlKey, SimulationConfig},
    food::Food,
    grid::GridBounds,
    render::{ColorTag, Renderer},
};

/// Color the food items are drawn with.
const FOOD_COLOR: ColorTag = ColorTag::Red;

/// Where the loop is in its lifecycle. `Ending` only exists inside the tick
/// that observes the last death; externally a simulation is either running or
/// stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationStatus {
    Running,
    Ending,
    Stopped,
}

/// Owns the agents and the food pool, and sequences one tick at a time.
///
/// The tick order is a contract: collisions are checked against the state the
/// previous tick left behind, so the frame of a fatal move renders once
/// before the loop halts on the following call.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: GridBounds,
    agents: Vec<Agent>,
    food: Vec<Food>,
    target_food_count: usize,
    status: SimulationStatus,
    ticks: u64,
}

impl Simulation {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `config` fails validation.
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = GridBounds::new(config.grid_width, config.grid_height);
        let agents = config
            .agents
            .iter()
            .map(|agent| {
                Agent::new(
                    agent.start,
                    agent.heading,
                    agent.variant.growth_policy(),
                    agent.variant.heading_policy(),
                    agent.controls.clone(),
                    agent.color,
                )
            })
            .collect();
        let mut simulation = Self {
            grid,
            agents,
            food: Vec::new(),
            target_food_count: config.target_food_count,
            status: SimulationStatus::Running,
            ticks: 0,
        };
        simulation.replenish_food();
        Ok(simulation)
    }

    #[must_use]
    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    #[must_use]
    pub fn grid(&self) -> GridBounds {
        self.grid
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn food(&self) -> &[Food] {
        &self.food
    }

    /// Completed ticks since construction.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one simulation step.
    ///
    /// Fixed order: collision checks on the previous tick's state, clear,
    /// draw food, advance live agents, draw bodies, consume food, replenish.
    /// Once stopped, calls are no-ops.
    pub fn tick<R: Renderer>(&mut self, renderer: &mut R) {
        if self.status != SimulationStatus::Running {
            return;
        }

        let grid = self.grid;
        for agent in &mut self.agents {
            if !agent.is_alive() {
                continue;
            }
            if agent.has_crashed_into_wall(grid) || agent.has_crashed_into_self() {
                debug!("Agent crashed at {:?}", agent.head());
                agent.mark_dead();
            }
        }
        if self.agents.iter().all(|agent| !agent.is_alive()) {
            self.status = SimulationStatus::Ending;
            self.finish();
            return;
        }

        renderer.clear();
        self.draw_food(renderer);
        for agent in &mut self.agents {
            if agent.is_alive() {
                agent.advance();
            }
        }
        self.draw_agents(renderer);

        for agent in &mut self.agents {
            if !agent.is_alive() {
                continue;
            }
            if let Some(index) = agent.consumes_food(&self.food) {
                let eaten = self.food.remove(index);
                debug!("Food consumed at {:?}", eaten.position());
                agent.grow();
            }
        }
        self.replenish_food();
        self.ticks += 1;
    }

    /// Renders the current state without advancing anything. Used by the
    /// frontend for the frame shown before the first tick fires.
    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        renderer.clear();
        self.draw_food(renderer);
        self.draw_agents(renderer);
    }

    /// Forwards a key press to every live agent's control table. Input after
    /// the stop is dropped.
    pub fn handle_key(&mut self, key: ControlKey) {
        if self.status != SimulationStatus::Running {
            return;
        }
        for agent in &mut self.agents {
            if agent.is_alive() {
                agent.handle_key(key);
            }
        }
    }

    fn draw_food<R: Renderer>(&self, renderer: &mut R) {
        for item in &self.food {
            renderer.draw_point(item.position(), FOOD_COLOR);
        }
    }

    fn draw_agents<R: Renderer>(&self, renderer: &mut R) {
        for agent in &self.agents {
            for cell in agent.body() {
                renderer.draw_point(*cell, agent.color());
            }
        }
    }

    /// Tops the food pool back up to the target count.
    ///
    /// Cells occupied by any agent are rejected and rerolled; the interior
    /// dwarfs the food target, so the loop terminates in practice. Two food
    /// items may share a cell.
    fn replenish_food(&mut self) {
        while self.food.len() < self.target_food_count {
            let pos = self.grid.random_position();
            if self.agents.iter().any(|agent| agent.contains_cell(pos)) {
                continue;
            }
            self.food.push(Food::new(pos));
        }
    }

    /// Final transition out of [`SimulationStatus::Ending`]. The frontend
    /// observes Stopped and detaches its timer and keyboard listeners.
    fn finish(&mut self) {
        info!("Game over after {} ticks", self.ticks);
        self.status = SimulationStatus::Stopped;
    }

    #[cfg(test)]
    fn force_food(&mut self, positions: &[super::geometry::Position]) {
        self.food = positions.iter().map(|pos| Food::new(*pos)).collect();
    }
}
