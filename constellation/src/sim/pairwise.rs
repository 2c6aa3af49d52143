use cgmath::{Point2, Vector2};

use crate::{color::Hsl, parameters::Parameters, particle::Particle, surface::DrawSurface};

use super::FrameStats;

/// Visit every unordered pair once, linking close pairs and pushing
/// overlapping pairs apart. Positions are left untouched.
pub(super) fn connect<S: DrawSurface + ?Sized>(
    particles: &mut [Particle],
    params: &Parameters,
    surface: &mut S,
) -> FrameStats {
    let mut stats = FrameStats::default();

    for a in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(a + 1);
        let first = &mut head[a];
        for second in tail.iter_mut() {
            let rel = first.pos - second.pos;
            let distance = rel.x.hypot(rel.y);

            if distance <= params.link_distance {
                draw_link(surface, first.pos, second.pos, distance, params);
                stats.links += 1;
            }

            let reach = first.radius + second.radius;
            if distance < reach {
                let angle = rel.y.atan2(rel.x);
                let target = first.pos + Vector2::new(angle.cos(), angle.sin()) * reach;
                let acc = (target - second.pos) * params.repulsion;
                second.vel -= acc;
                first.vel += acc;
                stats.impulses += 1;
            }
        }
    }

    stats
}

/// Closer pairs are more opaque and shift from white towards red.
fn draw_link<S: DrawSurface + ?Sized>(
    surface: &mut S,
    from: Point2<f64>,
    to: Point2<f64>,
    distance: f64,
    params: &Parameters,
) {
    let opacity = 1.0 - distance / params.link_distance;
    let fade = 1.0 - opacity;

    let mut scope = surface.scoped();
    scope.set_global_alpha(opacity);
    scope.set_stroke_color(Hsl::saturated(360.0 * fade, 100.0 * fade));
    scope.begin_path();
    scope.move_to(from);
    scope.line_to(to);
    scope.set_line_width(params.link_width);
    scope.stroke();
}
