use cgmath::{Point2, Vector2};
use eframe::egui::{Color32, CornerRadius, Painter, Pos2, Rect, Shape, Stroke, pos2, vec2};

use crate::{
    color::Hsl,
    surface::{DrawState, DrawSurface, Path, PathSegment, StateStack},
};

/// Draws onto an egui [`Painter`], with simulation coordinates relative to `origin`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    background: Color32,
    state: StateStack,
    path: Path,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, background: Color32) -> Self {
        Self {
            painter,
            origin,
            background,
            state: StateStack::default(),
            path: Path::default(),
        }
    }

    fn to_screen(&self, point: Point2<f64>) -> Pos2 {
        to_screen(self.origin, point)
    }
}

fn to_screen(origin: Pos2, point: Point2<f64>) -> Pos2 {
    pos2(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn fill_color(state: &DrawState) -> Color32 {
    state.fill.to_color32(state.global_alpha)
}

fn stroke_of(state: &DrawState) -> Stroke {
    Stroke::new(
        state.line_width as f32,
        state.stroke.to_color32(state.global_alpha),
    )
}

impl DrawSurface for PainterSurface<'_> {
    fn clear_rect(&mut self, origin: Point2<f64>, size: Vector2<f64>) {
        let rect = Rect::from_min_size(
            self.to_screen(origin),
            vec2(size.x as f32, size.y as f32),
        );
        self.painter
            .rect_filled(rect, CornerRadius::ZERO, self.background);
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
        let color = fill_color(self.state.current());
        for segment in self.path.segments() {
            match segment {
                PathSegment::Circle { center, radius } => {
                    self.painter
                        .circle_filled(self.to_screen(*center), *radius as f32, color);
                }
                // Lines and points enclose nothing
                PathSegment::Polyline(points) if points.len() < 3 => (),
                PathSegment::Polyline(points) => {
                    let points = points.iter().map(|p| self.to_screen(*p)).collect();
                    self.painter
                        .add(Shape::convex_polygon(points, color, Stroke::NONE));
                }
            }
        }
    }

    fn stroke(&mut self) {
        let stroke = stroke_of(self.state.current());
        for segment in self.path.segments() {
            match segment {
                PathSegment::Circle { center, radius } => {
                    self.painter
                        .circle_stroke(self.to_screen(*center), *radius as f32, stroke);
                }
                PathSegment::Polyline(points) => match points.as_slice() {
                    [] | [_] => (),
                    [from, to] => {
                        self.painter
                            .line_segment([self.to_screen(*from), self.to_screen(*to)], stroke);
                    }
                    _ => {
                        let points = points.iter().map(|p| self.to_screen(*p)).collect();
                        self.painter.add(Shape::line(points, stroke));
                    }
                },
            }
        }
    }
}
