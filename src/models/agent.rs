//! The snake agent: ordered body, heading state machine, growth bookkeeping.

use std::collections::{HashMap, VecDeque};

use log::debug;

use super::{
    config::ControlKey,
    food::Food,
    geometry::{Direction, Position},
    grid::GridBounds,
    policy::{GrowthPolicy, HeadingPolicy},
    render::ColorTag,
};

/// A player-controlled snake.
///
/// The body is head-first and never empty. Key input only ever touches
/// `pending_heading`, which the next [`Agent::advance`] adopts; that one-tick
/// latency makes a same-tick double turn impossible. A dead agent stops being
/// advanced but keeps its final body for inspection and rendering.
#[derive(Clone, Debug)]
pub struct Agent {
    body: VecDeque<Position>,
    heading: Direction,
    pending_heading: Direction,
    growth_debt: u32,
    alive: bool,
    growth_policy: GrowthPolicy,
    heading_policy: HeadingPolicy,
    controls: HashMap<ControlKey, Direction>,
    color: ColorTag,
}

impl Agent {
    #[must_use]
    pub fn new(
        start: Position,
        heading: Direction,
        growth_policy: GrowthPolicy,
        heading_policy: HeadingPolicy,
        controls: HashMap<ControlKey, Direction>,
        color: ColorTag,
    ) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);
        Self {
            body,
            heading,
            pending_heading: heading,
            growth_debt: 0,
            alive: true,
            growth_policy,
            heading_policy,
            controls,
            color,
        }
    }

    /// The head cell, always the front of the body.
    ///
    /// # Panics
    ///
    /// Never in practice; the body holds at least one cell from construction
    /// on and `advance` prepends before it truncates.
    #[must_use]
    pub fn head(&self) -> Position {
        *self.body.front().expect("agent body is never empty")
    }

    #[must_use]
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub fn pending_heading(&self) -> Direction {
        self.pending_heading
    }

    #[must_use]
    pub fn growth_debt(&self) -> u32 {
        self.growth_debt
    }

    #[must_use]
    pub fn color(&self) -> ColorTag {
        self.color
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Freezes the agent in place. The body stays as it was for rendering.
    pub fn mark_dead(&mut self) {
        self.alive = false;
    }

    /// True when any body segment sits on `pos`.
    #[must_use]
    pub fn contains_cell(&self, pos: Position) -> bool {
        self.body.iter().any(|cell| *cell == pos)
    }

    #[must_use]
    pub fn has_crashed_into_wall(&self, grid: GridBounds) -> bool {
        grid.is_out_of_bounds(self.head())
    }

    /// True when the head overlaps a non-head segment.
    #[must_use]
    pub fn has_crashed_into_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|cell| *cell == head)
    }

    /// Adopts the pending heading, letting the heading policy perturb the
    /// pending value first.
    fn resolve_heading(&mut self) {
        self.pending_heading = self.heading_policy.adjust_pending(self.pending_heading);
        self.heading = self.pending_heading;
        self.heading_policy.record_resolved(self.heading);
    }

    /// Moves the head one cell along the resolved heading. The tail is kept
    /// while growth debt remains, truncated otherwise.
    pub fn advance(&mut self) {
        self.resolve_heading();
        let new_head = self.head().stepped(self.heading);
        self.body.push_front(new_head);
        if self.growth_debt == 0 {
            self.body.pop_back();
        } else {
            self.growth_debt -= 1;
        }
    }

    /// Requests a turn for the next tick.
    ///
    /// Only quarter turns are accepted, measured against the heading already
    /// queued for the next tick. Reversals and no-ops are control noise and
    /// dropped without comment.
    pub fn set_heading(&mut self, requested: Direction) {
        if requested.is_perpendicular_to(self.pending_heading) {
            self.pending_heading = requested;
        } else {
            debug!(
                "Dropped {requested:?} turn against pending {:?}",
                self.pending_heading
            );
        }
    }

    /// Routes a key press through the agent's control table. Unmapped keys
    /// are ignored.
    pub fn handle_key(&mut self, key: ControlKey) {
        if let Some(direction) = self.controls.get(&key).copied() {
            self.set_heading(direction);
        }
    }

    /// Index of the first food item under the head, if any.
    #[must_use]
    pub fn consumes_food(&self, food: &[Food]) -> Option<usize> {
        let head = self.head();
        food.iter().position(|item| item.position() == head)
    }

    /// Books the growth the agent's policy grants for one food item.
    pub fn grow(&mut self) {
        self.growth_debt += self.growth_policy.growth_amount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::arrow_keys;

    fn standard_agent(start: Position, heading: Direction) -> Agent {
        Agent::new(
            start,
            heading,
            GrowthPolicy::Fixed,
            HeadingPolicy::Steady,
            arrow_keys(),
            ColorTag::Green,
        )
    }

    /// Grows the agent to the given length by booking debt and advancing.
    fn grown_agent(start: Position, heading: Direction, length: usize) -> Agent {
        let mut agent = standard_agent(start, heading);
        while agent.body().len() < length {
            agent.grow();
            while agent.growth_debt() > 0 && agent.body().len() < length {
                agent.advance();
            }
        }
        agent
    }

    #[test]
    fn test_single_advance_moves_head_one_cell() {
        let mut agent = standard_agent(Position::new(20, 20), Direction::Right);
        agent.advance();
        assert_eq!(agent.head(), Position::new(21, 20));
        assert_eq!(agent.body().len(), 1);
    }

    #[test]
    fn test_body_never_empty() {
        let mut agent = standard_agent(Position::new(5, 5), Direction::Down);
        for _ in 0..20 {
            agent.advance();
            assert!(!agent.body().is_empty());
        }
    }

    #[test]
    fn test_growth_debt_accounting() {
        let mut agent = standard_agent(Position::new(5, 5), Direction::Right);
        agent.grow();
        assert_eq!(agent.growth_debt(), 2);

        let len_before = agent.body().len();
        agent.advance();
        assert_eq!(agent.body().len(), len_before + 1);
        assert_eq!(agent.growth_debt(), 1);

        agent.advance();
        assert_eq!(agent.body().len(), len_before + 2);
        assert_eq!(agent.growth_debt(), 0);

        agent.advance();
        assert_eq!(agent.body().len(), len_before + 2);
        assert_eq!(agent.growth_debt(), 0);
    }

    #[test]
    fn test_turn_takes_effect_next_advance_only() {
        let mut agent = standard_agent(Position::new(5, 5), Direction::Right);
        agent.set_heading(Direction::Up);
        assert_eq!(agent.heading(), Direction::Right);
        assert_eq!(agent.pending_heading(), Direction::Up);
        agent.advance();
        assert_eq!(agent.heading(), Direction::Up);
        assert_eq!(agent.head(), Position::new(5, 4));
    }

    #[test]
    fn test_reversal_and_noop_rejected() {
        let mut agent = standard_agent(Position::new(5, 5), Direction::Right);
        agent.set_heading(Direction::Left);
        assert_eq!(agent.pending_heading(), Direction::Right);
        agent.set_heading(Direction::Right);
        assert_eq!(agent.pending_heading(), Direction::Right);
    }

    #[test]
    fn test_second_turn_compared_against_queued_turn() {
        let agent = grown_agent(Position::new(3, 5), Direction::Right, 3);
        assert_eq!(
            agent.body().iter().copied().collect::<Vec<_>>(),
            vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5)
            ]
        );

        let mut agent = agent;
        agent.set_heading(Direction::Up);
        assert_eq!(agent.pending_heading(), Direction::Up);
        agent.set_heading(Direction::Down);
        assert_eq!(agent.pending_heading(), Direction::Up);
    }

    #[test]
    fn test_wall_crash_detection() {
        let grid = GridBounds::new(30, 30);
        let mut agent = standard_agent(Position::new(1, 15), Direction::Left);
        assert!(!agent.has_crashed_into_wall(grid));
        agent.advance();
        assert_eq!(agent.head(), Position::new(0, 15));
        assert!(agent.has_crashed_into_wall(grid));
    }

    #[test]
    fn test_self_collision_square_walk() {
        let mut agent = grown_agent(Position::new(2, 5), Direction::Right, 5);
        assert!(!agent.has_crashed_into_self());

        agent.set_heading(Direction::Down);
        agent.advance();
        agent.set_heading(Direction::Left);
        agent.advance();
        assert!(!agent.has_crashed_into_self());

        agent.set_heading(Direction::Up);
        agent.advance();
        assert!(agent.has_crashed_into_self());
    }

    #[test]
    fn test_consumes_first_matching_food() {
        let mut agent = standard_agent(Position::new(5, 5), Direction::Right);
        agent.advance();
        let food = vec![
            Food::new(Position::new(9, 9)),
            Food::new(Position::new(6, 5)),
            Food::new(Position::new(6, 5)),
        ];
        assert_eq!(agent.consumes_food(&food), Some(1));
        assert_eq!(agent.consumes_food(&[]), None);
    }

    #[test]
    fn test_handle_key_respects_control_table() {
        let mut agent = standard_agent(Position::new(5, 5), Direction::Right);
        agent.handle_key(ControlKey::Char('w'));
        assert_eq!(agent.pending_heading(), Direction::Right);
        agent.handle_key(ControlKey::ArrowUp);
        assert_eq!(agent.pending_heading(), Direction::Up);
    }

    #[test]
    fn test_dead_agent_keeps_body() {
        let mut agent = grown_agent(Position::new(2, 5), Direction::Right, 3);
        let body_before = agent.body().clone();
        agent.mark_dead();
        assert!(!agent.is_alive());
        assert_eq!(*agent.body(), body_before);
    }
}
