use anyhow::bail;

use crate::parameters::{Parameters, PlacementStrategy};

pub const PRESET_NAMES: [&str; 4] = ["default", "dense", "sparse", "spaced"];

/// The classic constellation: 300 particles, links under 60 pixels.
pub fn default_swarm() -> Parameters {
    Parameters::default()
}

/// Twice the particles with shorter links, so the mesh stays readable.
pub fn dense_swarm() -> Parameters {
    Parameters {
        particle_count: 600,
        radius_min: 2.0,
        radius_max: 4.0,
        link_distance: 45.0,
        link_width: 2.0,
        ..Parameters::default()
    }
}

pub fn sparse_swarm() -> Parameters {
    Parameters {
        particle_count: 120,
        radius_min: 4.0,
        radius_max: 7.0,
        max_speed: 1.0,
        link_distance: 110.0,
        ..Parameters::default()
    }
}

/// Default settings, but no two particles overlap when seeded.
pub fn spaced_swarm() -> Parameters {
    Parameters {
        placement: PlacementStrategy::Exhaustive,
        ..Parameters::default()
    }
}

pub fn from_name(name: &str) -> anyhow::Result<Parameters> {
    Ok(match name {
        "default" => default_swarm(),
        "dense" => dense_swarm(),
        "sparse" => sparse_swarm(),
        "spaced" => spaced_swarm(),
        _ => bail!(
            "unknown preset {name:?}, expected one of {}",
            PRESET_NAMES.join(", ")
        ),
    })
}
