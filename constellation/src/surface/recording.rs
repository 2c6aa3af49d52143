use cgmath::{Point2, Vector2};

use crate::color::Hsl;

use super::{DrawState, DrawSurface, Path, PathSegment, StateStack};

/// A single painted primitive, captured with the state in effect when it was painted.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        origin: Point2<f64>,
        size: Vector2<f64>,
    },
    Fill {
        segment: PathSegment,
        color: Hsl,
        alpha: f64,
    },
    Stroke {
        segment: PathSegment,
        color: Hsl,
        width: f64,
        alpha: f64,
    },
}

/// Headless surface that records what would have been painted.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    state: StateStack,
    path: Path,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop everything recorded so far, keeping the drawing state.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn state(&self) -> &DrawState {
        self.state.current()
    }

    pub fn saved_depth(&self) -> usize {
        self.state.depth()
    }

    /// Stroked line segments as `(from, to, color, alpha)`.
    pub fn lines(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>, Hsl, f64)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Stroke {
                segment: PathSegment::Polyline(points),
                color,
                alpha,
                ..
            } if points.len() == 2 => Some((points[0], points[1], *color, *alpha)),
            _ => None,
        })
    }

    /// Filled circles as `(center, radius, color)`.
    pub fn filled_circles(&self) -> impl Iterator<Item = (Point2<f64>, f64, Hsl)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Fill {
                segment: PathSegment::Circle { center, radius },
                color,
                ..
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, origin: Point2<f64>, size: Vector2<f64>) {
        self.commands.push(DrawCommand::Clear { origin, size });
    }

    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn arc(&mut self, center: Point2<f64>, radius: f64) {
        self.path.circle(center, radius);
    }

    fn move_to(&mut self, point: Point2<f64>) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Point2<f64>) {
        self.path.line_to(point);
    }

    fn set_fill_color(&mut self, color: Hsl) {
        self.state.current_mut().fill = color;
    }

    fn set_stroke_color(&mut self, color: Hsl) {
        self.state.current_mut().stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.current_mut().line_width = width;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.current_mut().global_alpha = alpha;
    }

    fn fill(&mut self) {
        let state = *self.state.current();
        for segment in self.path.segments() {
            self.commands.push(DrawCommand::Fill {
                segment: segment.clone(),
                color: state.fill,
                alpha: state.global_alpha,
            });
        }
    }

    fn stroke(&mut self) {
        let state = *self.state.current();
        for segment in self.path.segments() {
            self.commands.push(DrawCommand::Stroke {
                segment: segment.clone(),
                color: state.stroke,
                width: state.line_width,
                alpha: state.global_alpha,
            });
        }
    }
}
