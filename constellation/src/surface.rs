use std::ops::{Deref, DerefMut};

use cgmath::{Point2, Vector2};

use crate::color::Hsl;

pub mod recording;

pub use recording::{DrawCommand, RecordingSurface};

/// The 2D drawing context the simulation renders through.
///
/// Modelled on an immediate-mode canvas: style setters mutate the current
/// [`DrawState`], path calls build up a [`Path`], and `fill`/`stroke` paint
/// the current path with the current state.
pub trait DrawSurface {
    /// Clear the axis-aligned region starting at `origin`.
    fn clear_rect(&mut self, origin: Point2<f64>, size: Vector2<f64>);

    /// Push the current drawing state.
    fn save(&mut self);
    /// Pop the most recently saved drawing state. Does nothing if none was saved.
    fn restore(&mut self);

    fn begin_path(&mut self);
    /// Add a full circle to the current path.
    fn arc(&mut self, center: Point2<f64>, radius: f64);
    fn move_to(&mut self, point: Point2<f64>);
    fn line_to(&mut self, point: Point2<f64>);

    fn set_fill_color(&mut self, color: Hsl);
    fn set_stroke_color(&mut self, color: Hsl);
    fn set_line_width(&mut self, width: f64);
    fn set_global_alpha(&mut self, alpha: f64);

    fn fill(&mut self);
    fn stroke(&mut self);

    /// Save the drawing state and return a guard that restores it when dropped.
    fn scoped(&mut self) -> SavedState<'_, Self> {
        self.save();
        SavedState { surface: self }
    }
}

/// Restores the surface's drawing state on drop, see [`DrawSurface::scoped`].
pub struct SavedState<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<S: DrawSurface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Style settings that `save`/`restore` operate on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub fill: Hsl,
    pub stroke: Hsl,
    pub line_width: f64,
    pub global_alpha: f64,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: Hsl::BLACK,
            stroke: Hsl::BLACK,
            line_width: 1.0,
            global_alpha: 1.0,
        }
    }
}

/// Current drawing state plus the stack of saved ones.
#[derive(Debug, Default, Clone)]
pub struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    pub fn current(&self) -> &DrawState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut DrawState {
        &mut self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    Circle { center: Point2<f64>, radius: f64 },
    Polyline(Vec<Point2<f64>>),
}

/// The path under construction between `begin_path` and `fill`/`stroke`.
#[derive(Debug, Default, Clone)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn circle(&mut self, center: Point2<f64>, radius: f64) {
        self.segments.push(PathSegment::Circle { center, radius });
    }

    pub fn move_to(&mut self, point: Point2<f64>) {
        self.segments.push(PathSegment::Polyline(vec![point]));
    }

    /// Extend the last open polyline. Without one this starts a new polyline,
    /// the same as `move_to`.
    pub fn line_to(&mut self, point: Point2<f64>) {
        match self.segments.last_mut() {
            Some(PathSegment::Polyline(points)) => points.push(point),
            _ => self.move_to(point),
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}
