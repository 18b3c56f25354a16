//! Grid coordinates and the cardinal heading algebra.

use rand::Rng;

/// A cell position in grid coordinates. Plain value semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step along `heading`.
    #[must_use]
    pub fn stepped(self, heading: Direction) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One of the four cardinal headings an agent can travel in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const VARIANTS: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Screen-style delta: y grows downward, so `Up` is y-1.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when turning from `self` to `other` is a quarter turn.
    #[must_use]
    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    /// Uniformly picks one of the two headings perpendicular to `self`.
    #[must_use]
    pub fn random_perpendicular(self) -> Direction {
        let options = if self.is_horizontal() {
            [Direction::Up, Direction::Down]
        } else {
            [Direction::Left, Direction::Right]
        };
        options[rand::thread_rng().gen_range(0..options.len())]
    }
}
