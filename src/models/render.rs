//! The drawing contract between the simulation and whatever displays it.

use super::geometry::Position;

/// Opaque color label the frontend maps to real pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTag {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

/// Receives one frame per tick: a clear followed by draw calls for every
/// visible entity, food items first, then each agent's body segments.
pub trait Renderer {
    fn clear(&mut self);

    fn draw_point(&mut self, position: Position, color: ColorTag);
}

/// A frame buffer the game screen reads back as a color grid.
///
/// The buffer covers the boundary ring too (columns `0..=width`, rows
/// `0..=height`), so the frame of a fatal move onto the wall still shows up.
/// Draw calls outside the buffer are dropped.
#[derive(Clone, Debug)]
pub struct GridFrame {
    cells: Vec<Vec<Option<ColorTag>>>,
}

impl GridFrame {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let cols = usize::try_from(width).unwrap_or(0) + 1;
        let rows = usize::try_from(height).unwrap_or(0) + 1;
        Self {
            cells: vec![vec![None; cols]; rows],
        }
    }

    /// Row-major cell colors, indexed `[y][x]`.
    #[must_use]
    pub fn rows(&self) -> &Vec<Vec<Option<ColorTag>>> {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<ColorTag> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        *self.cells.get(y)?.get(x)?
    }
}

impl Renderer for GridFrame {
    fn clear(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                *cell = None;
            }
        }
    }

    fn draw_point(&mut self, position: Position, color: ColorTag) {
        let Ok(x) = usize::try_from(position.x) else {
            return;
        };
        let Ok(y) = usize::try_from(position.y) else {
            return;
        };
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = Some(color);
        }
    }
}

/// Swallows every draw call. For headless tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self) {}

    fn draw_point(&mut self, _position: Position, _color: ColorTag) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_and_clear() {
        let mut frame = GridFrame::new(10, 10);
        frame.draw_point(Position::new(3, 4), ColorTag::Green);
        assert_eq!(frame.cell(Position::new(3, 4)), Some(ColorTag::Green));
        frame.clear();
        assert_eq!(frame.cell(Position::new(3, 4)), None);
    }

    #[test]
    fn test_boundary_ring_is_drawable() {
        let mut frame = GridFrame::new(10, 10);
        frame.draw_point(Position::new(0, 5), ColorTag::Blue);
        frame.draw_point(Position::new(10, 5), ColorTag::Blue);
        assert_eq!(frame.cell(Position::new(0, 5)), Some(ColorTag::Blue));
        assert_eq!(frame.cell(Position::new(10, 5)), Some(ColorTag::Blue));
    }

    #[test]
    fn test_out_of_frame_draws_are_dropped() {
        let mut frame = GridFrame::new(10, 10);
        frame.draw_point(Position::new(-1, 5), ColorTag::Red);
        frame.draw_point(Position::new(5, 11), ColorTag::Red);
        for row in frame.rows() {
            assert!(row.iter().all(Option::is_none));
        }
    }
}
