//! A surface that records draw calls instead of producing pixels.
//!
//! `clear()` starts a new picture: the command list always holds exactly what
//! is visible right now, in paint order.

use td_core::{Color, Point};

use crate::Surface;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    Clear,
    Circle { center: Point, radius: f32, color: Color },
    Rect { origin: Point, w: f32, h: f32, color: Color },
}

/// Draw-call recorder with fixed dimensions.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width:    f32,
    height:   f32,
    commands: Vec<DrawCommand>,
    clears:   u64,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            clears:   0,
        }
    }

    /// Commands issued since the most recent `clear()`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the surface has been cleared (one per rendered frame).
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    /// Circles in the current picture, in paint order.
    pub fn circles(&self) -> impl Iterator<Item = (Point, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Circle { center, radius, color } => Some((center, radius, color)),
            _ => None,
        })
    }

    /// Rectangles in the current picture, in paint order.
    pub fn rects(&self) -> impl Iterator<Item = (Point, f32, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Rect { origin, w, h, color } => Some((origin, w, h, color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.clears += 1;
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center: Point::new(x, y), radius, color });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { origin: Point::new(x, y), w, h, color });
    }
}
