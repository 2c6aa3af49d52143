use cgmath::{Point2, Vector2};
use rand::Rng;

use crate::{Bounds, color::Hsl, parameters::Parameters, surface::DrawSurface};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Point2<f64>,
    /// Displacement per frame.
    pub vel: Vector2<f64>,
    pub radius: f64,
}

impl Particle {
    pub fn new(pos: Point2<f64>, vel: Vector2<f64>, radius: f64) -> Self {
        Self { pos, vel, radius }
    }

    /// A particle placed uniformly at random, fully inside `bounds`.
    pub fn random<R: Rng>(bounds: Bounds, params: &Parameters, rng: &mut R) -> Self {
        let radius =
            params.radius_min + rng.random::<f64>() * (params.radius_max - params.radius_min);
        let pos = Point2::new(
            radius + rng.random::<f64>() * (bounds.width - radius * 2.0),
            radius + rng.random::<f64>() * (bounds.height - radius * 2.0),
        );
        let vel = Vector2::new(
            (rng.random::<f64>() * 2.0 - 1.0) * params.max_speed,
            (rng.random::<f64>() * 2.0 - 1.0) * params.max_speed,
        );
        Self { pos, vel, radius }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        let rel = self.pos - other.pos;
        rel.x.hypot(rel.y)
    }

    /// Touching counts as overlapping.
    pub fn overlaps(&self, other: &Particle) -> bool {
        self.distance_to(other) <= self.radius + other.radius
    }

    pub fn is_inside(&self, bounds: Bounds) -> bool {
        self.radius <= self.pos.x
            && self.pos.x <= bounds.width - self.radius
            && self.radius <= self.pos.y
            && self.pos.y <= bounds.height - self.radius
    }

    /// Advance one frame, bouncing off the edges of `bounds`.
    ///
    /// The velocity flips once the new position crosses an edge, but the
    /// position is not pulled back, so a particle can overshoot for a frame.
    pub fn update(&mut self, bounds: Bounds) {
        self.pos.x += self.vel.x;
        if self.pos.x > bounds.width - self.radius || self.pos.x < self.radius {
            self.vel.x = -self.vel.x;
        }
        self.pos.y += self.vel.y;
        if self.pos.y > bounds.height - self.radius || self.pos.y < self.radius {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, params: &Parameters) {
        surface.begin_path();
        surface.arc(self.pos, self.radius);
        surface.set_fill_color(Hsl::saturated(self.pos.x * params.fill_hue_scale, 50.0));
        surface.fill();
        surface.set_line_width(params.outline_width);
        surface.set_stroke_color(Hsl::saturated(self.pos.x, 50.0));
        surface.stroke();
    }
}
