use anyhow::{Context, anyhow};
use constellation::{
    Bounds, Parameters, Simulation,
    constants::{WINDOW_HEIGHT, WINDOW_WIDTH},
    presets,
    ui::ConstellationApp,
};
use eframe::egui;

const PRESET_VAR: &str = "CONSTELLATION_PRESET";
const SEED_VAR: &str = "CONSTELLATION_SEED";

fn load_parameters() -> anyhow::Result<Parameters> {
    let mut params = match std::env::var(PRESET_VAR) {
        Ok(name) => presets::from_name(&name).with_context(|| format!("reading {PRESET_VAR}"))?,
        Err(_) => presets::default_swarm(),
    };

    if let Ok(seed) = std::env::var(SEED_VAR) {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {seed:?}"))?;
        params.seed = Some(seed);
    }

    params.validate()?;
    Ok(params)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let params = load_parameters()?;
    log::info!("Starting with {params:?}");

    let sim = Simulation::new(
        Bounds::new(WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64),
        params,
    );
    log::info!("Seeded {} particles", sim.particles().len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Constellation")
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "constellation",
        options,
        Box::new(|cc| Ok(Box::new(ConstellationApp::new(cc, sim)))),
    )
    .map_err(|e| anyhow!("Window closed with an error: {e}"))?;

    log::info!("Window closed");
    Ok(())
}
