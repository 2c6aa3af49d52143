use anyhow::ensure;

use crate::constants::{
    FILL_HUE_SCALE, LINK_DISTANCE, LINK_WIDTH, MAX_SPEED, OUTLINE_WIDTH, PARTICLE_COUNT,
    RADIUS_MAX, RADIUS_MIN, REPULSION,
};

/// How a new candidate is checked for overlap while seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementStrategy {
    /// The candidate at attempt `i` is only compared with accepted particles at
    /// indices `i..`. At most `i` particles exist at that point, so the range is
    /// empty and every candidate is accepted.
    #[default]
    Suffix,
    /// The candidate is compared with every accepted particle. No two spawned
    /// particles overlap, and fewer than `particle_count` may be placed.
    Exhaustive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    /// Placement attempts per seeding.
    pub particle_count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    pub max_speed: f64,
    pub link_distance: f64,
    pub link_width: f64,
    pub outline_width: f64,
    pub fill_hue_scale: f64,
    pub repulsion: f64,
    pub placement: PlacementStrategy,
    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub show_info: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            max_speed: MAX_SPEED,
            link_distance: LINK_DISTANCE,
            link_width: LINK_WIDTH,
            outline_width: OUTLINE_WIDTH,
            fill_hue_scale: FILL_HUE_SCALE,
            repulsion: REPULSION,
            placement: PlacementStrategy::default(),
            seed: None,
            show_info: true,
        }
    }
}

impl Parameters {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.particle_count > 0, "particle count must be positive");
        ensure!(
            self.radius_min.is_finite() && self.radius_min > 0.0,
            "minimum radius must be positive, got {}",
            self.radius_min
        );
        ensure!(
            self.radius_max.is_finite() && self.radius_min < self.radius_max,
            "radius range [{}, {}) is empty",
            self.radius_min,
            self.radius_max
        );
        ensure!(
            self.max_speed.is_finite() && self.max_speed >= 0.0,
            "max speed must be non-negative, got {}",
            self.max_speed
        );
        ensure!(
            self.link_distance.is_finite() && self.link_distance > 0.0,
            "link distance must be positive, got {}",
            self.link_distance
        );
        ensure!(
            self.link_width > 0.0 && self.outline_width > 0.0,
            "line widths must be positive"
        );
        ensure!(
            self.repulsion.is_finite() && self.repulsion >= 0.0,
            "repulsion must be non-negative, got {}",
            self.repulsion
        );
        Ok(())
    }
}
