use eframe::egui::{self, Color32, Sense, Vec2};

use crate::{Bounds, render::PainterSurface, sim::Simulation};

mod info;

const BACKGROUND: Color32 = Color32::BLACK;

/// Turns the canvas size egui reports each frame into resize notifications.
#[derive(Debug, Default)]
pub struct ViewportTracker {
    last: Option<Bounds>,
}

impl ViewportTracker {
    /// Returns the new bounds when the rounded size differs from the last one
    /// seen and covers a non-empty area.
    pub fn observe(&mut self, size: Vec2) -> Option<Bounds> {
        let bounds = Bounds::new(size.x.round() as f64, size.y.round() as f64);
        if bounds.width <= 0.0 || bounds.height <= 0.0 || self.last == Some(bounds) {
            return None;
        }
        self.last = Some(bounds);
        Some(bounds)
    }
}

/// Hosts a [`Simulation`]: one frame per repaint, reseeding on resize.
pub struct ConstellationApp {
    sim: Simulation,
    viewport: ViewportTracker,
    info_panel: info::InfoPanel,
}

impl ConstellationApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, sim: Simulation) -> Self {
        Self {
            sim,
            viewport: ViewportTracker::default(),
            info_panel: info::InfoPanel::new(),
        }
    }
}

impl eframe::App for ConstellationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                let rect = response.rect;

                if let Some(bounds) = self.viewport.observe(rect.size())
                    && bounds != self.sim.bounds()
                {
                    self.sim.resize(bounds);
                }

                let mut surface = PainterSurface::new(&painter, rect.min, BACKGROUND);
                let stats = self.sim.advance_frame(&mut surface);

                if self.sim.params().show_info {
                    self.info_panel
                        .render(ctx, rect, self.sim.particles().len(), stats);
                }
            });
        ctx.request_repaint();
    }
}
