use cgmath::{Point2, Vector2};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Bounds,
    parameters::{Parameters, PlacementStrategy},
    particle::Particle,
    surface::DrawSurface,
};

mod pairwise;

/// What a single frame did, reported back to the host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Lines drawn between nearby pairs.
    pub links: usize,
    /// Pairs that overlapped and were pushed apart.
    pub impulses: usize,
}

/// The swarm: owns every particle, the area they live in and the RNG used to seed them.
pub struct Simulation {
    bounds: Bounds,
    particles: Vec<Particle>,
    params: Parameters,
    rng: StdRng,
}

impl Simulation {
    /// Create a simulation and seed it against `bounds`.
    pub fn new(bounds: Bounds, params: Parameters) -> Self {
        let mut sim = Self::from_particles(bounds, params, Vec::new());
        sim.create_particles();
        sim
    }

    /// Create a simulation around an existing set of particles, without seeding.
    pub fn from_particles(bounds: Bounds, params: Parameters, particles: Vec<Particle>) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            bounds,
            particles,
            params,
            rng,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Make `particle_count` placement attempts, keeping every candidate that
    /// does not overlap the accepted particles it is checked against.
    ///
    /// Rejected candidates are not retried. Returns the number of particles added.
    pub fn create_particles(&mut self) -> usize {
        let before = self.particles.len();
        for attempt in 0..self.params.particle_count {
            let candidate = Particle::random(self.bounds, &self.params, &mut self.rng);
            let checked = match self.params.placement {
                PlacementStrategy::Suffix => self.particles.get(attempt..).unwrap_or_default(),
                PlacementStrategy::Exhaustive => &self.particles[..],
            };
            if !checked.iter().any(|other| candidate.overlaps(other)) {
                self.particles.push(candidate);
            }
        }

        let added = self.particles.len() - before;
        if added < self.params.particle_count {
            log::debug!(
                "Placed {added} of {} particles in {}x{}",
                self.params.particle_count,
                self.bounds.width,
                self.bounds.height
            );
        }
        added
    }

    /// Take on new bounds and reseed from scratch.
    pub fn resize(&mut self, bounds: Bounds) {
        log::debug!(
            "Resize {}x{} -> {}x{}",
            self.bounds.width,
            self.bounds.height,
            bounds.width,
            bounds.height
        );
        self.bounds = bounds;
        self.particles.clear();
        self.create_particles();
    }

    /// Draw links between nearby pairs and push overlapping pairs apart.
    pub fn connect_particles<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        pairwise::connect(&mut self.particles, &self.params, surface)
    }

    /// One frame: links and particles are drawn at their current positions,
    /// then every particle is moved.
    pub fn handle_particles<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        let stats = self.connect_particles(surface);

        for particle in &self.particles {
            particle.draw(surface, &self.params);
        }
        for particle in &mut self.particles {
            particle.update(self.bounds);
        }

        stats
    }

    /// Clear the whole area and handle one frame.
    pub fn advance_frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        surface.clear_rect(
            Point2::new(0.0, 0.0),
            Vector2::new(self.bounds.width, self.bounds.height),
        );
        self.handle_particles(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);

    fn seeded(placement: PlacementStrategy, seed: u64) -> Simulation {
        let params = Parameters {
            placement,
            ..Parameters::default().with_seed(seed)
        };
        Simulation::new(BOUNDS, params)
    }

    #[test]
    fn suffix_placement_accepts_every_candidate() {
        let sim = seeded(PlacementStrategy::Suffix, 1);
        assert_eq!(sim.particles().len(), 300);
        assert!(sim.particles().iter().all(|p| p.is_inside(BOUNDS)));
    }

    #[test]
    fn exhaustive_placement_never_overlaps() {
        let sim = seeded(PlacementStrategy::Exhaustive, 2);
        let particles = sim.particles();
        assert!(!particles.is_empty() && particles.len() <= 300);
        for (i, a) in particles.iter().enumerate() {
            assert!(a.is_inside(BOUNDS));
            for b in &particles[i + 1..] {
                assert!(a.distance_to(b) > a.radius + b.radius);
            }
        }
    }

    #[test]
    fn exhaustive_placement_falls_short_when_crowded() {
        let params = Parameters {
            placement: PlacementStrategy::Exhaustive,
            particle_count: 200,
            ..Parameters::default().with_seed(3)
        };
        // a 40x40 box cannot hold 200 disjoint particles of radius >= 3
        let sim = Simulation::new(Bounds::new(40.0, 40.0), params);
        assert!(sim.particles().len() < 200);
    }

    #[test]
    fn same_seed_same_swarm() {
        let a = seeded(PlacementStrategy::Exhaustive, 42);
        let b = seeded(PlacementStrategy::Exhaustive, 42);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn resize_reseeds_inside_new_bounds() {
        let mut sim = seeded(PlacementStrategy::Exhaustive, 5);
        let before = sim.particles().to_vec();

        let small = Bounds::new(200.0, 150.0);
        sim.resize(small);

        assert_eq!(sim.bounds(), small);
        assert!(!sim.particles().is_empty());
        assert!(sim.particles().iter().all(|p| p.is_inside(small)));
        assert_ne!(sim.particles(), &before[..]);
    }

    #[test]
    fn particles_are_drawn_before_they_move() {
        let particles = vec![
            Particle::new(Point2::new(100.0, 100.0), Vector2::new(1.0, 0.0), 3.0),
            Particle::new(Point2::new(400.0, 300.0), Vector2::new(0.0, -2.0), 4.0),
        ];
        let mut sim = Simulation::from_particles(BOUNDS, Parameters::default(), particles);
        let mut surface = RecordingSurface::default();
        sim.handle_particles(&mut surface);

        let drawn: Vec<_> = surface.filled_circles().map(|(c, _, _)| c).collect();
        assert_eq!(
            drawn,
            vec![Point2::new(100.0, 100.0), Point2::new(400.0, 300.0)]
        );
        assert_eq!(sim.particles()[0].pos, Point2::new(101.0, 100.0));
        assert_eq!(sim.particles()[1].pos, Point2::new(400.0, 298.0));
    }

    #[test]
    fn links_are_drawn_before_particles() {
        let particles = vec![
            Particle::new(Point2::new(100.0, 100.0), Vector2::new(0.0, 0.0), 3.0),
            Particle::new(Point2::new(130.0, 100.0), Vector2::new(0.0, 0.0), 3.0),
        ];
        let mut sim = Simulation::from_particles(BOUNDS, Parameters::default(), particles);
        let mut surface = RecordingSurface::default();
        let stats = sim.advance_frame(&mut surface);

        assert_eq!(stats, FrameStats { links: 1, impulses: 0 });
        let commands = surface.commands();
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert_eq!(surface.lines().count(), 1);
        // clear, link, then fill + stroke per particle
        assert_eq!(commands.len(), 1 + 1 + 2 * 2);
        assert!(matches!(commands[2], DrawCommand::Fill { .. }));
    }

    #[test]
    fn advance_frame_clears_whole_area() {
        let mut sim = seeded(PlacementStrategy::Suffix, 9);
        let mut surface = RecordingSurface::default();
        sim.advance_frame(&mut surface);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::Clear {
                origin: Point2::new(0.0, 0.0),
                size: Vector2::new(800.0, 600.0),
            }
        );
    }
}
